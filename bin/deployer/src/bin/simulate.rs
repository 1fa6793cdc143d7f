//! Run the token scenario against an in-process ledger.
//!
//! Uses the well-known local development accounts, so the output can be compared
//! with a run against a local node.

use clap::Parser;
use config::TokenConfig;
use deployer::{
    init_tracing,
    scenario::{self, Accounts, Outcome},
};
use ledger::units::format_tokens;

#[derive(Parser)]
#[command(name = "simulate")]
#[command(about = "Run the token scenario against an in-process ledger")]
struct Cli {
    /// Token name
    #[arg(long)]
    name: Option<String>,

    /// Token symbol
    #[arg(long)]
    symbol: Option<String>,

    /// Initial supply in whole tokens
    #[arg(long)]
    supply: Option<u64>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

fn main() -> eyre::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let mut token = TokenConfig::default();
    if let Some(name) = cli.name {
        token.name = name;
    }
    if let Some(symbol) = cli.symbol {
        token.symbol = symbol;
    }
    if let Some(supply) = cli.supply {
        token.total_supply = alloy_primitives::U256::from(supply);
    }

    let (_, report) = scenario::run(Accounts::local(), &token)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} ({}), total supply {}",
        report.name,
        report.symbol,
        format_tokens(report.total_supply)
    );
    for step in &report.steps {
        match &step.outcome {
            Outcome::Applied { events } => {
                println!("  ok   {}", step.action);
                for event in events {
                    println!("         {:?}", event);
                }
            }
            Outcome::Rejected { reason } => {
                println!("  fail {}: {}", step.action, reason);
            }
        }
    }
    println!("Balances:");
    for (account, balance) in &report.balances {
        println!("  {}: {}", account, format_tokens(*balance));
    }

    Ok(())
}
