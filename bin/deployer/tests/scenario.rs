//! The scripted scenario, end to end on the in-process ledger.

use alloy_primitives::U256;
use config::TokenConfig;
use deployer::scenario::{run, Accounts, Outcome};
use ledger::{units::tokens, Event, LedgerError};

#[test]
fn test_scenario_matches_direct_calls() {
    let accounts = Accounts::local();
    let (ledger, report) = run(accounts, &TokenConfig::default()).unwrap();

    let Outcome::Applied { events } = &report.steps[2].outcome else {
        panic!("delegated transfer should apply");
    };
    assert_eq!(
        events,
        &vec![Event::Transfer {
            from: accounts.deployer,
            to: accounts.receiver,
            value: tokens(100),
        }]
    );

    let Outcome::Rejected { reason } = &report.steps[3].outcome else {
        panic!("over-balance transfer should be rejected");
    };
    let expected = LedgerError::InsufficientBalance {
        account: accounts.deployer,
        balance: tokens(999_800),
        required: tokens(100_000_000),
    };
    assert_eq!(reason, &expected.to_string());

    let circulating: U256 = report.balances.iter().map(|(_, b)| *b).sum();
    assert_eq!(circulating, ledger.total_supply());
}

#[test]
fn test_scenario_with_custom_token() {
    let token = TokenConfig {
        name: "Tiny".to_string(),
        symbol: "TNY".to_string(),
        total_supply: U256::from(150),
    };
    let accounts = Accounts::local();
    let (ledger, report) = run(accounts, &token).unwrap();

    // 100 is sent directly, the delegated 100 no longer fits in the remaining 50.
    assert!(matches!(report.steps[0].outcome, Outcome::Applied { .. }));
    assert!(matches!(report.steps[2].outcome, Outcome::Rejected { .. }));
    assert_eq!(ledger.balance_of(accounts.deployer), tokens(50));
    assert_eq!(ledger.allowance(accounts.deployer, accounts.exchange), tokens(100));
}

#[test]
fn test_scenario_rejects_oversized_supply() {
    let token = TokenConfig {
        total_supply: U256::MAX,
        ..TokenConfig::default()
    };
    let err = run(Accounts::local(), &token).unwrap_err();
    assert!(matches!(err, LedgerError::SupplyOverflow { .. }));
}
