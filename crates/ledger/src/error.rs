use alloy_primitives::{utils::UnitsError, Address, U256};
use thiserror::Error;

/// Reasons a ledger call is rejected.
///
/// Every variant is terminal: the call had no effect on balances, allowances or the
/// event log.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerError {
    /// The debited account holds less than the requested amount
    #[error("Insufficient balance: {account} holds {balance}, needs {required}")]
    InsufficientBalance {
        account: Address,
        balance: U256,
        required: U256,
    },

    /// The spender's allowance over the owner's balance is below the requested amount
    #[error("Insufficient allowance: {spender} may spend {allowance} of {owner}, needs {required}")]
    InsufficientAllowance {
        owner: Address,
        spender: Address,
        allowance: U256,
        required: U256,
    },

    /// Tokens cannot be sent to the null account
    #[error("Invalid recipient: the null account cannot receive tokens")]
    InvalidRecipient,

    /// The null account cannot be granted an allowance
    #[error("Invalid spender: the null account cannot be approved")]
    InvalidSpender,

    /// The initial supply does not fit in 256 bits once scaled by the token decimals
    #[error("Supply overflow: {supply} whole tokens exceed the 256-bit range")]
    SupplyOverflow { supply: U256 },
}

impl LedgerError {
    /// Short stable identifier, used as a metrics label.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InsufficientBalance { .. } => "insufficient_balance",
            Self::InsufficientAllowance { .. } => "insufficient_allowance",
            Self::InvalidRecipient => "invalid_recipient",
            Self::InvalidSpender => "invalid_spender",
            Self::SupplyOverflow { .. } => "supply_overflow",
        }
    }
}

/// Errors parsing a decimal token amount.
#[derive(Error, Debug)]
pub enum AmountError {
    /// Token amounts are unsigned
    #[error("Negative amount: {0:?}")]
    Negative(String),

    #[error(transparent)]
    Units(#[from] UnitsError),
}
