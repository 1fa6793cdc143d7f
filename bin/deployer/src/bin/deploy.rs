//! Deploy the token contract to a configured network.
//!
//! Loads the compiled artifact, appends the constructor arguments, submits the
//! creation transaction from the first configured signer key and checks the deployed
//! token against an in-process ledger built from the same parameters. Reads go through
//! a separate provider without a wallet.

use alloy_provider::Provider;
use balance::monitor::BalanceMonitor;
use clap::Parser;
use config::{secrets::parse_private_keys, NetworkType, Secrets};
use deployer::{
    artifact::Artifact, config::Config, deploy_token, ensure_funded, init_tracing,
    verify_deployment, wait_for_code,
};
use ledger::{units::format_tokens, Ledger};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "deploy")]
#[command(about = "Deploy the token contract to a configured network")]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "deploy.toml")]
    config: PathBuf,

    /// Target network, replacing the one in the config file
    #[arg(short, long)]
    network: Option<NetworkType>,

    /// RPC endpoint url, replacing the network preset
    #[arg(long)]
    rpc_url: Option<String>,

    /// Compiled contract artifact, replacing the one in the config file
    #[arg(long)]
    artifact: Option<PathBuf>,

    /// Private keys for signing transactions (comma-separated hex, first one deploys)
    #[arg(short = 'k', long, env = "PRIVATE_KEY", hide_env_values = true)]
    private_key: Option<String>,

    /// Dry-run mode: log the deployment plan without sending a transaction
    #[arg(long)]
    dry_run: bool,

    /// Skip reading the deployed token back after deployment
    #[arg(long)]
    skip_verify: bool,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let mut config = Config::from_file(&cli.config)?;

    // CLI flags win over the config file
    if let Some(network) = cli.network {
        config.network = network;
    }
    if let Some(url) = cli.rpc_url {
        config.rpc_url = Some(url);
    }
    if let Some(artifact) = cli.artifact {
        config.artifact = artifact;
    }
    if cli.dry_run {
        config.dry_run = true;
    }

    let mut secrets = Secrets::from_env();
    if let Some(keys) = cli.private_key.as_deref() {
        secrets.private_keys = parse_private_keys(keys);
    }

    let network = config.network_config(&secrets)?;
    let private_key = secrets
        .deployer_key()
        .ok_or_else(|| eyre::eyre!("No signer key: set PRIVATE_KEY or pass --private-key"))?;
    let deployer = client::signer_address(private_key)?;

    // Serves both as constructor validation and as the reference for verification.
    let expected = Ledger::new(
        deployer,
        config.token.name.clone(),
        config.token.symbol.clone(),
        config.token.total_supply,
    )?;

    let artifact = Artifact::from_file(&config.artifact)?;
    let code = artifact.deploy_code(&config.token);

    info!("Loaded config:");
    info!("  Network: {} (chain {})", network.network_type, network.chain_id);
    info!("  RPC URL: {}", network.redacted_rpc_url());
    info!("  Artifact: {} ({})", artifact.contract_name, config.artifact.display());
    info!("  Deployer: {}", deployer);
    info!(
        "  Token: {} ({}), supply {}",
        config.token.name,
        config.token.symbol,
        format_tokens(expected.total_supply())
    );
    if config.dry_run {
        info!("  Mode: DRY-RUN (no transactions will be executed)");
        info!(code_len = code.len(), "Deployment plan ready");
        return Ok(());
    }

    let provider = client::create_wallet_provider(&network.rpc_url, private_key)?;
    let reader = client::create_provider(&network.rpc_url).await?;
    let monitor = BalanceMonitor::new(reader.clone());

    let chain_id = provider.get_chain_id().await?;
    if chain_id != network.chain_id {
        eyre::bail!(
            "Connected to chain {}, but {} expects chain {}",
            chain_id,
            network.network_type,
            network.chain_id
        );
    }

    ensure_funded(&monitor, deployer).await?;

    let deployment = deploy_token(&provider, code).await?;
    println!("Token deployed here ---> {}", deployment.address);

    if cli.skip_verify {
        return Ok(());
    }

    wait_for_code(&reader, deployment.address).await?;
    verify_deployment(&monitor, deployment.address, deployer, &expected).await?;

    info!("Step completed: deploy");

    Ok(())
}
