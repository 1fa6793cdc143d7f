use crate::{Balance, BalanceQuery, Monitor, TokenMetadata};
use alloy_primitives::{Address, U256};
use eyre::Result;
use ledger::Ledger;
use tracing::debug;

/// Monitor over an in-process ledger standing in for the token at `address`.
pub struct LedgerMonitor<'a> {
    ledger: &'a Ledger,
    address: Address,
}

impl<'a> LedgerMonitor<'a> {
    pub const fn new(ledger: &'a Ledger, address: Address) -> Self {
        Self { ledger, address }
    }

    fn ensure_token(&self, token: Address) -> Result<()> {
        if token != self.address {
            eyre::bail!("Unknown token {}: this ledger serves {}", token, self.address);
        }
        Ok(())
    }
}

impl Monitor for LedgerMonitor<'_> {
    async fn query_balance(&self, query: BalanceQuery) -> Result<Balance> {
        match query {
            BalanceQuery::TokenBalance { token, holder } => {
                self.ensure_token(token)?;
                debug!("Reading ledger balance: address={}", holder);

                Ok(Balance {
                    holder,
                    asset: token,
                    amount: self.ledger.balance_of(holder),
                })
            }
            BalanceQuery::NativeBalance { address } => {
                eyre::bail!("Native balance of {} is not tracked by the ledger", address)
            }
        }
    }

    async fn query_allowance(
        &self,
        token: Address,
        owner: Address,
        spender: Address,
    ) -> Result<U256> {
        self.ensure_token(token)?;
        Ok(self.ledger.allowance(owner, spender))
    }

    async fn query_metadata(&self, token: Address) -> Result<TokenMetadata> {
        self.ensure_token(token)?;

        Ok(TokenMetadata {
            name: self.ledger.name().to_string(),
            symbol: self.ledger.symbol().to_string(),
            decimals: self.ledger.decimals(),
            total_supply: self.ledger.total_supply(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;
    use ledger::units::tokens;

    const TOKEN: Address = address!("0x5FbDB2315678afecb367f032d93F642f64180aa3");
    const DEPLOYER: Address = address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
    const EXCHANGE: Address = address!("0x3C44CdDdB6a900fa2b585dd299e03d12FA4293BC");

    fn ledger() -> Ledger {
        let mut ledger =
            Ledger::new(DEPLOYER, "Black Hills Token", "BHT", U256::from(1_000_000)).unwrap();
        ledger.approve(DEPLOYER, EXCHANGE, tokens(100)).unwrap();
        ledger
    }

    #[tokio::test]
    async fn test_reads_ledger_state() {
        let ledger = ledger();
        let monitor = LedgerMonitor::new(&ledger, TOKEN);

        let balance = monitor
            .query_balance(BalanceQuery::TokenBalance {
                token: TOKEN,
                holder: DEPLOYER,
            })
            .await
            .unwrap();
        assert_eq!(balance.amount, tokens(1_000_000));
        assert_eq!(balance.asset, TOKEN);

        let allowance = monitor.query_allowance(TOKEN, DEPLOYER, EXCHANGE).await.unwrap();
        assert_eq!(allowance, tokens(100));

        let metadata = monitor.query_metadata(TOKEN).await.unwrap();
        assert_eq!(metadata.symbol, "BHT");
        assert_eq!(metadata.decimals, 18);
        assert_eq!(metadata.total_supply, tokens(1_000_000));
    }

    #[tokio::test]
    async fn test_rejects_other_tokens() {
        let ledger = ledger();
        let monitor = LedgerMonitor::new(&ledger, TOKEN);

        assert!(monitor.query_metadata(Address::ZERO).await.is_err());
        assert!(monitor
            .query_balance(BalanceQuery::NativeBalance { address: DEPLOYER })
            .await
            .is_err());
    }
}
