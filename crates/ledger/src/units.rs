//! Conversions between whole tokens and base units.

use crate::error::AmountError;
use alloy_primitives::{
    utils::{format_ether, parse_units, ParseUnits},
    U256,
};

/// Number of decimals of every ledger token.
pub const DECIMALS: u8 = 18;

/// One whole token expressed in base units (`10^DECIMALS`).
pub fn one_token() -> U256 {
    U256::from(10u64).pow(U256::from(DECIMALS))
}

/// `n` whole tokens in base units.
pub fn tokens(n: u64) -> U256 {
    // u64::MAX * 10^18 is far below 2^256.
    U256::from(n) * one_token()
}

/// Scale a whole-token amount to base units, or `None` if it overflows.
pub fn scale(whole: U256) -> Option<U256> {
    whole.checked_mul(one_token())
}

/// Parse a decimal token amount such as `"999900"` or `"0.5"` into base units.
///
/// Amounts with a leading minus sign are rejected.
pub fn parse_tokens(amount: &str) -> Result<U256, AmountError> {
    match parse_units(amount, "ether")? {
        ParseUnits::U256(value) => Ok(value),
        ParseUnits::I256(_) => Err(AmountError::Negative(amount.to_string())),
    }
}

/// Render base units as a decimal token amount.
pub fn format_tokens(amount: U256) -> String {
    format_ether(amount)
}
