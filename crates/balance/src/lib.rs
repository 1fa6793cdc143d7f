//! Token read queries.
//!
//! This crate provides one interface for reading token state, with two backends:
//! - [`monitor::BalanceMonitor`]: a deployed token contract, through an RPC provider
//! - [`local::LedgerMonitor`]: an in-process [`ledger::Ledger`]

pub mod local;
pub mod monitor;

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};
use std::future::Future;

/// Represents a balance at a specific point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    /// The address holding the balance
    pub holder: Address,
    /// The asset address (zero address for native token)
    pub asset: Address,
    /// The balance amount
    pub amount: U256,
}

/// Type of balance query to perform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BalanceQuery {
    /// Query token balance for an account
    TokenBalance {
        /// Token contract address
        token: Address,
        /// Holder address
        holder: Address,
    },
    /// Query native ETH balance
    NativeBalance {
        /// Account address
        address: Address,
    },
}

/// Immutable token metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub total_supply: U256,
}

/// Trait for reading token state.
pub trait Monitor: Send + Sync {
    /// Query a single balance.
    fn query_balance(
        &self,
        query: BalanceQuery,
    ) -> impl Future<Output = eyre::Result<Balance>> + Send;

    /// Query how much `spender` may move out of `owner`'s balance of `token`.
    fn query_allowance(
        &self,
        token: Address,
        owner: Address,
        spender: Address,
    ) -> impl Future<Output = eyre::Result<U256>> + Send;

    /// Query name, symbol, decimals and total supply of `token`.
    fn query_metadata(
        &self,
        token: Address,
    ) -> impl Future<Output = eyre::Result<TokenMetadata>> + Send;
}
