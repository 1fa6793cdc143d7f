use crate::{Balance, BalanceQuery, Monitor, TokenMetadata};
use alloy_primitives::{Address, U256};
use alloy_provider::Provider;
use binding::token::Token;
use eyre::Result;
use tracing::debug;

// Balance monitor implementation.
pub struct BalanceMonitor<P> {
    provider: P,
}

impl<P> BalanceMonitor<P>
where
    P: Provider + Clone,
{
    pub const fn new(provider: P) -> Self {
        Self { provider }
    }

    async fn query_native(&self, address: Address) -> Result<Balance> {
        debug!("Querying native balance: address={}", address);

        let balance = self.provider.get_balance(address).await?;

        Ok(Balance {
            holder: address,
            asset: Address::ZERO,
            amount: balance,
        })
    }

    async fn query_token(&self, token: Address, holder: Address) -> Result<Balance> {
        debug!("Querying token {} balance: address={}", token, holder);

        let contract = Token::new(token, &self.provider);
        let amount = contract.balanceOf(holder).call().await?;

        Ok(Balance {
            holder,
            asset: token,
            amount,
        })
    }
}

impl<P> Monitor for BalanceMonitor<P>
where
    P: Provider + Clone,
{
    async fn query_balance(&self, query: BalanceQuery) -> Result<Balance> {
        match query {
            BalanceQuery::TokenBalance { token, holder } => self.query_token(token, holder).await,
            BalanceQuery::NativeBalance { address } => self.query_native(address).await,
        }
    }

    async fn query_allowance(
        &self,
        token: Address,
        owner: Address,
        spender: Address,
    ) -> Result<U256> {
        debug!(
            "Querying token {} allowance: owner={}, spender={}",
            token, owner, spender
        );

        let contract = Token::new(token, &self.provider);
        let amount = contract.allowance(owner, spender).call().await?;

        Ok(amount)
    }

    async fn query_metadata(&self, token: Address) -> Result<TokenMetadata> {
        debug!("Querying token {} metadata", token);

        let contract = Token::new(token, &self.provider);
        let name = contract.name().call().await?;
        let symbol = contract.symbol().call().await?;
        let decimals = contract.decimals().call().await?;
        let total_supply = contract.totalSupply().call().await?;

        if decimals > U256::from(u8::MAX) {
            eyre::bail!("Token {} reports out-of-range decimals: {}", token, decimals);
        }

        Ok(TokenMetadata {
            name,
            symbol,
            decimals: decimals.to::<u8>(),
            total_supply,
        })
    }
}
