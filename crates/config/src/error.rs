use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Network name not among the presets
    #[error("Unknown network: {0} (expected one of: localhost, goerli)")]
    UnknownNetwork(String),

    /// A secret required by the selected network is not set
    #[error("Missing secret: set the {0} environment variable")]
    MissingSecret(&'static str),

    /// Config file could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Config file is not valid TOML for the expected shape
    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}
