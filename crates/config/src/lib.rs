//! Configuration types for the token deployment harness.
//!
//! This crate provides:
//! - Network configurations (localhost, goerli)
//! - Token deployment parameters
//! - Secrets resolved from the environment (API keys, signer keys)
//! - TOML file loading

pub mod error;
pub mod network;
pub mod secrets;
pub mod token;

pub use error::ConfigError;
pub use network::{NetworkConfig, NetworkConfigBuilder, NetworkType};
pub use secrets::Secrets;
pub use token::TokenConfig;

use serde::de::DeserializeOwned;
use std::path::Path;

/// Read and parse a TOML file.
pub fn load_toml<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, ConfigError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let value = toml::from_str(&contents)?;

    Ok(value)
}
