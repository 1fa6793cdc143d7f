//! Secrets taken from the environment.
//!
//! Network presets never embed secrets; the RPC API key and signer keys are read from
//! `ALCHEMY_API_KEY` and `PRIVATE_KEY` at startup.

/// Environment variable holding the Alchemy API key.
pub const ALCHEMY_API_KEY: &str = "ALCHEMY_API_KEY";

/// Environment variable holding comma-separated signer private keys.
pub const PRIVATE_KEY: &str = "PRIVATE_KEY";

#[derive(Clone, Default)]
pub struct Secrets {
    /// API key substituted into hosted RPC URLs
    pub alchemy_api_key: Option<String>,
    /// Signer private keys, first one deploys
    pub private_keys: Vec<String>,
}

impl Secrets {
    /// Read secrets from the process environment.
    pub fn from_env() -> Self {
        Self::from_values(
            std::env::var(ALCHEMY_API_KEY).ok(),
            std::env::var(PRIVATE_KEY).ok(),
        )
    }

    pub fn from_values(alchemy_api_key: Option<String>, private_keys: Option<String>) -> Self {
        Self {
            alchemy_api_key: alchemy_api_key.filter(|k| !k.trim().is_empty()),
            private_keys: private_keys
                .as_deref()
                .map(parse_private_keys)
                .unwrap_or_default(),
        }
    }

    /// The key used to sign the deployment.
    pub fn deployer_key(&self) -> Option<&str> {
        self.private_keys.first().map(String::as_str)
    }
}

// Keys must never end up in logs.
impl std::fmt::Debug for Secrets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Secrets")
            .field("alchemy_api_key", &self.alchemy_api_key.as_ref().map(|_| "<redacted>"))
            .field("private_keys", &self.private_keys.len())
            .finish()
    }
}

/// Split a comma-separated key list, dropping empty entries.
pub fn parse_private_keys(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_private_keys() {
        assert_eq!(parse_private_keys("0xaa, 0xbb,,"), vec!["0xaa", "0xbb"]);
        assert!(parse_private_keys("").is_empty());
    }

    #[test]
    fn test_empty_values_are_unset() {
        let secrets = Secrets::from_values(Some("  ".to_string()), Some(String::new()));
        assert!(secrets.alchemy_api_key.is_none());
        assert!(secrets.deployer_key().is_none());
    }

    #[test]
    fn test_debug_redacts_keys() {
        let secrets = Secrets::from_values(Some("key".to_string()), Some("0xdead".to_string()));
        let printed = format!("{:?}", secrets);
        assert!(!printed.contains("0xdead"));
        assert!(!printed.contains("\"key\""));
        assert_eq!(secrets.deployer_key(), Some("0xdead"));
    }
}
