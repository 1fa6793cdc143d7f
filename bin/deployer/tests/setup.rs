//! Common test setup utilities shared across integration tests.
#![allow(dead_code)] // used in ignored tests

use alloy_provider::Provider;
use deployer::config::Config;
use serde::Deserialize;

/// Local configuration with private key (git-ignored file)
#[derive(Debug, Deserialize)]
struct LocalConfig {
    private_key: String,
}

/// Load test configuration. Panics if not found or invalid.
pub fn load_test_config() -> Config {
    Config::from_file("tests/test-config.toml").expect("Failed to load tests/test-config.toml.")
}

/// Load private key for signing transactions.
///
/// Tries multiple sources in order:
/// 1. PRIVATE_KEY environment variable
/// 2. tests/test-config.local.toml file (git-ignored)
///
/// Returns None if no private key is found.
pub fn load_private_key() -> Option<String> {
    if let Ok(pk) = std::env::var("PRIVATE_KEY") {
        eprintln!("✓ Loaded private key from PRIVATE_KEY environment variable");
        return config::secrets::parse_private_keys(&pk).into_iter().next();
    }

    let local_config_path = "tests/test-config.local.toml";
    if let Ok(contents) = std::fs::read_to_string(local_config_path) {
        if let Ok(config) = toml::from_str::<LocalConfig>(&contents) {
            eprintln!("✓ Loaded private key from {}", local_config_path);
            return Some(config.private_key);
        }
    }

    eprintln!("⚠ No private key found. Checked:");
    eprintln!("  1. PRIVATE_KEY environment variable");
    eprintln!("  2. tests/test-config.local.toml file");
    None
}

/// Create a wallet provider for signing transactions.
///
/// # Panics
/// Panics if no private key is found or if the private key is invalid.
pub fn setup_wallet_provider(url: &str) -> (impl Provider + Clone, String) {
    let private_key = load_private_key().expect(
        "Private key required for transaction signing.\n\
         Set PRIVATE_KEY environment variable or create tests/test-config.local.toml",
    );

    let provider = client::create_wallet_provider(url, &private_key)
        .expect("Invalid private key format. Expected hex string with optional 0x prefix.");

    (provider, private_key)
}
