//! Network configuration for token deployments.
//!
//! Provides chain ids and RPC endpoints for the supported networks (a local
//! development node and the goerli testnet).

use crate::{error::ConfigError, secrets::Secrets};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Default endpoint of a local development node.
pub const LOCALHOST_RPC_URL: &str = "http://127.0.0.1:8545";

/// Hosted goerli endpoint; the API key is appended.
pub const GOERLI_RPC_URL_PREFIX: &str = "https://eth-goerli.g.alchemy.com/v2/";

/// Network type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkType {
    Localhost,
    Goerli,
}

impl NetworkType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Localhost => "localhost",
            Self::Goerli => "goerli",
        }
    }
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NetworkType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "localhost" => Ok(Self::Localhost),
            "goerli" => Ok(Self::Goerli),
            other => Err(ConfigError::UnknownNetwork(other.to_string())),
        }
    }
}

/// Complete network configuration for a deployment.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Network type
    pub network_type: NetworkType,
    /// Chain ID
    pub chain_id: u64,
    /// RPC endpoint url
    pub rpc_url: String,
}

impl NetworkConfig {
    /// Local development node configuration.
    pub fn localhost() -> Self {
        Self {
            network_type: NetworkType::Localhost,
            chain_id: 31337,
            rpc_url: LOCALHOST_RPC_URL.to_string(),
        }
    }

    /// Goerli testnet configuration through the hosted endpoint.
    pub fn goerli(api_key: &str) -> Self {
        Self {
            network_type: NetworkType::Goerli,
            chain_id: 5,
            rpc_url: format!("{GOERLI_RPC_URL_PREFIX}{api_key}"),
        }
    }

    /// Create configuration from network type, taking any API key from `secrets`.
    pub fn from_network_type(
        network_type: NetworkType,
        secrets: &Secrets,
    ) -> Result<Self, ConfigError> {
        match network_type {
            NetworkType::Localhost => Ok(Self::localhost()),
            NetworkType::Goerli => {
                let api_key = secrets
                    .alchemy_api_key
                    .as_deref()
                    .ok_or(ConfigError::MissingSecret(crate::secrets::ALCHEMY_API_KEY))?;
                Ok(Self::goerli(api_key))
            }
        }
    }

    /// RPC url safe to log: hosted endpoints have their API key elided.
    pub fn redacted_rpc_url(&self) -> String {
        match self.rpc_url.strip_prefix(GOERLI_RPC_URL_PREFIX) {
            Some(_) => format!("{GOERLI_RPC_URL_PREFIX}<redacted>"),
            None => self.rpc_url.clone(),
        }
    }
}

impl fmt::Debug for NetworkConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NetworkConfig")
            .field("network_type", &self.network_type)
            .field("chain_id", &self.chain_id)
            .field("rpc_url", &self.redacted_rpc_url())
            .finish()
    }
}

/// Builder for custom network configurations.
#[derive(Debug, Clone)]
pub struct NetworkConfigBuilder {
    config: NetworkConfig,
}

impl NetworkConfigBuilder {
    /// Start with local node defaults.
    pub fn localhost() -> Self {
        Self {
            config: NetworkConfig::localhost(),
        }
    }

    /// Start from an existing configuration.
    pub const fn from_config(config: NetworkConfig) -> Self {
        Self { config }
    }

    /// Override the RPC endpoint.
    pub fn rpc_url(mut self, url: impl Into<String>) -> Self {
        self.config.rpc_url = url.into();
        self
    }

    /// Override the chain id.
    pub const fn chain_id(mut self, chain_id: u64) -> Self {
        self.config.chain_id = chain_id;
        self
    }

    /// Build the network configuration.
    pub fn build(self) -> NetworkConfig {
        self.config
    }
}
