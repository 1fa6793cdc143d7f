//! In-process fungible token ledger.
//!
//! This crate provides:
//! - [`Ledger`]: balance and allowance accounting with ERC20 semantics
//! - [`Event`] and [`Receipt`]: the `Transfer`/`Approval` records emitted by each call
//! - [`units`]: conversions between whole tokens and base units
//!
//! A ledger is constructed once with its metadata and supply, which is credited in full
//! to the deployer. Every mutating call either applies completely and returns a
//! receipt, or fails with a [`LedgerError`] and leaves the ledger untouched.

pub mod error;
pub mod event;
pub mod ledger;
mod metrics;
pub mod units;

pub use error::{AmountError, LedgerError};
pub use event::{Event, Receipt};
pub use ledger::{Connected, Ledger};
