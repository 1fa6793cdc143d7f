//! Contract bindings for the token contract.
//!
//! The `Token` ABI is declared once here and shared by:
//! - the in-process ledger (event signatures and log encoding)
//! - the deployer (constructor argument encoding)
//! - the balance monitor (on-chain read queries)
//!
//! All bindings are generated using alloy's `sol!` macro.

pub mod token;
