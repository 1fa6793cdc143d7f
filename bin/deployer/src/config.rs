use config::{load_toml, NetworkConfig, NetworkConfigBuilder, NetworkType, Secrets, TokenConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default location of the compiled token contract.
pub const DEFAULT_ARTIFACT: &str = "artifacts/contracts/Token.sol/Token.json";

/// Top-level deployer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Target network
    pub network: NetworkType,

    /// RPC endpoint url, replacing the network preset
    #[serde(default)]
    pub rpc_url: Option<String>,

    /// Chain id, replacing the network preset
    #[serde(default)]
    pub chain_id: Option<u64>,

    /// Compiled contract artifact (JSON with `contractName` and `bytecode`)
    #[serde(default = "default_artifact")]
    pub artifact: PathBuf,

    /// Constructor parameters
    #[serde(default)]
    pub token: TokenConfig,

    /// Log the deployment plan without sending a transaction
    #[serde(default)]
    pub dry_run: bool,
}

fn default_artifact() -> PathBuf {
    PathBuf::from(DEFAULT_ARTIFACT)
}

impl Config {
    pub fn from_file(path: impl AsRef<Path>) -> eyre::Result<Self> {
        let config: Self = load_toml(path)?;

        Ok(config)
    }

    /// Resolve the network preset and apply the configured overrides.
    pub fn network_config(&self, secrets: &Secrets) -> eyre::Result<NetworkConfig> {
        let preset = NetworkConfig::from_network_type(self.network, secrets)?;
        let mut builder = NetworkConfigBuilder::from_config(preset);

        if let Some(url) = &self.rpc_url {
            builder = builder.rpc_url(url.clone());
        }
        if let Some(chain_id) = self.chain_id {
            builder = builder.chain_id(chain_id);
        }

        Ok(builder.build())
    }
}
