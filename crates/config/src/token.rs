use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

/// Constructor parameters for a token deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenConfig {
    /// Token name
    pub name: String,
    /// Token symbol
    pub symbol: String,
    /// Initial supply in whole tokens, credited to the deployer
    pub total_supply: U256,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            name: "Black Hills Token".to_string(),
            symbol: "BHT".to_string(),
            total_supply: U256::from(1_000_000),
        }
    }
}
