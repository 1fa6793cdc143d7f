//! Scripted harness scenario against an in-process ledger.
//!
//! The deployer funds a receiver directly, approves an exchange, lets the exchange
//! move tokens on its behalf, and finally attempts a transfer beyond its balance.

use alloy_primitives::{address, Address, U256};
use config::TokenConfig;
use ledger::{units::tokens, Event, Ledger, LedgerError, Receipt};
use serde::Serialize;
use tracing::info;

/// The accounts taking part in the scenario.
#[derive(Debug, Clone, Copy)]
pub struct Accounts {
    pub deployer: Address,
    pub receiver: Address,
    pub exchange: Address,
}

impl Accounts {
    /// The first three well-known development accounts of a local node.
    pub const fn local() -> Self {
        Self {
            deployer: address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"),
            receiver: address!("0x70997970C51812dc3A010C7d01b50e0d17dc79C8"),
            exchange: address!("0x3C44CdDdB6a900fa2b585dd299e03d12FA4293BC"),
        }
    }
}

/// How a scenario step ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Applied { events: Vec<Event> },
    Rejected { reason: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct Step {
    pub action: String,
    #[serde(flatten)]
    pub outcome: Outcome,
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub name: String,
    pub symbol: String,
    pub total_supply: U256,
    pub steps: Vec<Step>,
    /// Final balances of deployer, receiver and exchange
    pub balances: Vec<(Address, U256)>,
}

/// Run the scenario on a fresh ledger built from `token`.
///
/// Rejected calls are recorded as steps; only a failed construction is an error.
pub fn run(accounts: Accounts, token: &TokenConfig) -> Result<(Ledger, Report), LedgerError> {
    let mut ledger = Ledger::new(
        accounts.deployer,
        token.name.clone(),
        token.symbol.clone(),
        token.total_supply,
    )?;
    let amount = tokens(100);
    let mut steps = Vec::new();

    let result = ledger.connect(accounts.deployer).transfer(accounts.receiver, amount);
    steps.push(step("deployer transfers 100 to receiver", result));

    let result = ledger.connect(accounts.deployer).approve(accounts.exchange, amount);
    steps.push(step("deployer approves exchange for 100", result));

    let result = ledger
        .connect(accounts.exchange)
        .transfer_from(accounts.deployer, accounts.receiver, amount);
    steps.push(step("exchange moves 100 from deployer to receiver", result));

    let result = ledger
        .connect(accounts.deployer)
        .transfer(accounts.receiver, tokens(100_000_000));
    steps.push(step("deployer transfers 100000000 to receiver", result));

    let balances = [accounts.deployer, accounts.receiver, accounts.exchange]
        .into_iter()
        .map(|a| (a, ledger.balance_of(a)))
        .collect();

    let report = Report {
        name: ledger.name().to_string(),
        symbol: ledger.symbol().to_string(),
        total_supply: ledger.total_supply(),
        steps,
        balances,
    };

    Ok((ledger, report))
}

fn step(action: &str, result: Result<Receipt, LedgerError>) -> Step {
    let outcome = match result {
        Ok(receipt) => Outcome::Applied {
            events: receipt.events,
        },
        Err(e) => Outcome::Rejected {
            reason: e.to_string(),
        },
    };
    info!(action, ?outcome, "Scenario step");

    Step {
        action: action.to_string(),
        outcome,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_outcomes() {
        let accounts = Accounts::local();
        let (ledger, report) = run(accounts, &TokenConfig::default()).unwrap();

        assert_eq!(report.steps.len(), 4);
        assert!(matches!(report.steps[0].outcome, Outcome::Applied { .. }));
        assert!(matches!(report.steps[1].outcome, Outcome::Applied { .. }));
        assert!(matches!(report.steps[2].outcome, Outcome::Applied { .. }));
        assert!(matches!(report.steps[3].outcome, Outcome::Rejected { .. }));

        assert_eq!(ledger.balance_of(accounts.deployer), tokens(999_800));
        assert_eq!(ledger.balance_of(accounts.receiver), tokens(200));
        assert_eq!(ledger.allowance(accounts.deployer, accounts.exchange), U256::ZERO);
        assert_eq!(ledger.events().len(), 3);
    }

    #[test]
    fn test_report_serializes() {
        let (_, report) = run(Accounts::local(), &TokenConfig::default()).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["symbol"], "BHT");
        assert_eq!(json["steps"][0]["outcome"], "applied");
        assert_eq!(json["steps"][0]["events"][0]["event"], "Transfer");
        assert_eq!(json["steps"][3]["outcome"], "rejected");
    }
}
