use crate::{
    error::LedgerError,
    event::{Event, Receipt},
    metrics::{record_operation, record_rejection, register_descriptions},
    units::{self, DECIMALS},
};
use alloy_primitives::{Address, U256};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Fixed-supply token ledger.
///
/// Holds the balance table, the allowance table and the event log. All mutation goes
/// through [`Ledger::transfer`], [`Ledger::approve`] and [`Ledger::transfer_from`] (or
/// their [`Connected`] forms), each of which validates before touching any table.
#[derive(Debug, Clone)]
pub struct Ledger {
    name: String,
    symbol: String,
    total_supply: U256,
    balances: HashMap<Address, U256>,
    allowances: HashMap<(Address, Address), U256>,
    events: Vec<Event>,
}

impl Ledger {
    /// Construct a ledger and credit the whole supply to `deployer`.
    ///
    /// `supply` is given in whole tokens and scaled by `10^DECIMALS`.
    pub fn new(
        deployer: Address,
        name: impl Into<String>,
        symbol: impl Into<String>,
        supply: U256,
    ) -> Result<Self, LedgerError> {
        let total_supply = units::scale(supply).ok_or(LedgerError::SupplyOverflow { supply })?;
        let name = name.into();
        let symbol = symbol.into();

        register_descriptions();
        debug!(
            %deployer,
            name = %name,
            symbol = %symbol,
            total_supply = %total_supply,
            "Ledger deployed"
        );

        Ok(Self {
            name,
            symbol,
            total_supply,
            balances: HashMap::from([(deployer, total_supply)]),
            allowances: HashMap::new(),
            events: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub const fn decimals(&self) -> u8 {
        DECIMALS
    }

    pub const fn total_supply(&self) -> U256 {
        self.total_supply
    }

    /// Balance of `account`, zero if it was never credited.
    pub fn balance_of(&self, account: Address) -> U256 {
        self.balances.get(&account).copied().unwrap_or_default()
    }

    /// Amount `spender` may still move out of `owner`'s balance.
    pub fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.allowances
            .get(&(owner, spender))
            .copied()
            .unwrap_or_default()
    }

    /// Every account that was ever credited, with its current balance.
    pub fn holders(&self) -> impl Iterator<Item = (Address, U256)> + '_ {
        self.balances.iter().map(|(a, b)| (*a, *b))
    }

    /// All events emitted so far, oldest first.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Bind a caller, for calls where the caller is implicit.
    pub const fn connect(&mut self, caller: Address) -> Connected<'_> {
        Connected {
            ledger: self,
            caller,
        }
    }

    /// Move `amount` from `caller` to `to`.
    pub fn transfer(
        &mut self,
        caller: Address,
        to: Address,
        amount: U256,
    ) -> Result<Receipt, LedgerError> {
        const OP: &str = "transfer";

        if to.is_zero() {
            return reject(OP, LedgerError::InvalidRecipient);
        }
        if let Err(e) = self.ensure_balance(caller, amount) {
            return reject(OP, e);
        }

        self.move_balance(caller, to, amount);

        debug!(from = %caller, %to, %amount, "Transfer applied");
        Ok(self.emit(
            OP,
            Event::Transfer {
                from: caller,
                to,
                value: amount,
            },
        ))
    }

    /// Set `spender`'s allowance over `caller`'s balance to exactly `amount`.
    pub fn approve(
        &mut self,
        caller: Address,
        spender: Address,
        amount: U256,
    ) -> Result<Receipt, LedgerError> {
        const OP: &str = "approve";

        if spender.is_zero() {
            return reject(OP, LedgerError::InvalidSpender);
        }

        self.allowances.insert((caller, spender), amount);

        debug!(owner = %caller, %spender, %amount, "Allowance set");
        Ok(self.emit(
            OP,
            Event::Approval {
                owner: caller,
                spender,
                value: amount,
            },
        ))
    }

    /// Move `amount` from `from` to `to` on `from`'s behalf, spending `caller`'s allowance.
    pub fn transfer_from(
        &mut self,
        caller: Address,
        from: Address,
        to: Address,
        amount: U256,
    ) -> Result<Receipt, LedgerError> {
        const OP: &str = "transfer_from";

        if to.is_zero() {
            return reject(OP, LedgerError::InvalidRecipient);
        }
        if let Err(e) = self.ensure_balance(from, amount) {
            return reject(OP, e);
        }
        let allowance = self.allowance(from, caller);
        if allowance < amount {
            return reject(
                OP,
                LedgerError::InsufficientAllowance {
                    owner: from,
                    spender: caller,
                    allowance,
                    required: amount,
                },
            );
        }

        self.allowances.insert((from, caller), allowance - amount);
        self.move_balance(from, to, amount);

        debug!(spender = %caller, %from, %to, %amount, "Delegated transfer applied");
        Ok(self.emit(
            OP,
            Event::Transfer {
                from,
                to,
                value: amount,
            },
        ))
    }

    fn ensure_balance(&self, account: Address, required: U256) -> Result<(), LedgerError> {
        let balance = self.balance_of(account);
        if balance < required {
            return Err(LedgerError::InsufficientBalance {
                account,
                balance,
                required,
            });
        }
        Ok(())
    }

    /// Callers must have checked that `from` holds at least `amount`.
    fn move_balance(&mut self, from: Address, to: Address, amount: U256) {
        let debited = self.balance_of(from) - amount;
        self.balances.insert(from, debited);

        // Cannot overflow: every balance is bounded by the total supply.
        let credited = self.balance_of(to) + amount;
        self.balances.insert(to, credited);
    }

    fn emit(&mut self, operation: &'static str, event: Event) -> Receipt {
        record_operation(operation);
        self.events.push(event.clone());
        Receipt {
            events: vec![event],
        }
    }
}

fn reject(operation: &'static str, error: LedgerError) -> Result<Receipt, LedgerError> {
    warn!(operation, %error, "Ledger call rejected");
    record_rejection(operation, error.kind());
    Err(error)
}

/// A ledger bound to the account issuing calls.
#[derive(Debug)]
pub struct Connected<'a> {
    ledger: &'a mut Ledger,
    caller: Address,
}

impl Connected<'_> {
    pub const fn caller(&self) -> Address {
        self.caller
    }

    pub fn transfer(&mut self, to: Address, amount: U256) -> Result<Receipt, LedgerError> {
        self.ledger.transfer(self.caller, to, amount)
    }

    pub fn approve(&mut self, spender: Address, amount: U256) -> Result<Receipt, LedgerError> {
        self.ledger.approve(self.caller, spender, amount)
    }

    pub fn transfer_from(
        &mut self,
        from: Address,
        to: Address,
        amount: U256,
    ) -> Result<Receipt, LedgerError> {
        self.ledger.transfer_from(self.caller, from, to, amount)
    }
}
