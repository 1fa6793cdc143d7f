//! Compiled contract artifacts.
//!
//! Reads the JSON artifact the Solidity toolchain writes for a contract and builds the
//! creation code for a token deployment.

use alloy_primitives::Bytes;
use alloy_sol_types::SolConstructor;
use binding::token::Token;
use config::TokenConfig;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    /// Contract name as declared in the source
    pub contract_name: String,
    /// Creation bytecode, without constructor arguments
    pub bytecode: Bytes,
}

impl Artifact {
    pub fn from_file(path: impl AsRef<Path>) -> eyre::Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| eyre::eyre!("Failed to read artifact {}: {}", path.display(), e))?;

        Self::from_json(&contents)
    }

    pub fn from_json(json: &str) -> eyre::Result<Self> {
        let artifact: Self = serde_json::from_str(json)?;

        // Interfaces and abstract contracts compile to empty bytecode.
        if artifact.bytecode.is_empty() {
            eyre::bail!("Artifact {} has no creation bytecode", artifact.contract_name);
        }

        Ok(artifact)
    }

    /// Creation bytecode followed by the ABI-encoded constructor arguments.
    pub fn deploy_code(&self, token: &TokenConfig) -> Bytes {
        let args = Token::constructorCall {
            _name: token.name.clone(),
            _symbol: token.symbol.clone(),
            _totalSupply: token.total_supply,
        }
        .abi_encode();

        let mut code = Vec::with_capacity(self.bytecode.len() + args.len());
        code.extend_from_slice(&self.bytecode);
        code.extend_from_slice(&args);
        Bytes::from(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::U256;

    const ARTIFACT: &str = r#"{
        "_format": "hh-sol-artifact-1",
        "contractName": "Token",
        "sourceName": "contracts/Token.sol",
        "abi": [],
        "bytecode": "0x6080604052",
        "deployedBytecode": "0x6080",
        "linkReferences": {},
        "deployedLinkReferences": {}
    }"#;

    #[test]
    fn test_parse_artifact() {
        let artifact = Artifact::from_json(ARTIFACT).unwrap();
        assert_eq!(artifact.contract_name, "Token");
        assert_eq!(artifact.bytecode.as_ref(), &[0x60, 0x80, 0x60, 0x40, 0x52]);
    }

    #[test]
    fn test_empty_bytecode_rejected() {
        let json = ARTIFACT.replace("\"0x6080604052\"", "\"0x\"");
        assert!(Artifact::from_json(&json).is_err());
    }

    #[test]
    fn test_deploy_code_appends_constructor_args() {
        let artifact = Artifact::from_json(ARTIFACT).unwrap();
        let code = artifact.deploy_code(&TokenConfig::default());

        assert!(code.starts_with(&artifact.bytecode));
        let args = &code[artifact.bytecode.len()..];
        // name offset, symbol offset, supply, then two one-word strings with lengths
        assert_eq!(args.len(), 32 * 7);
        assert_eq!(&args[64..96], &U256::from(1_000_000).to_be_bytes::<32>());
    }
}
