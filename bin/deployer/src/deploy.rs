//! Token deployment and post-deployment checks.

use alloy_network::TransactionBuilder;
use alloy_primitives::{utils::format_ether, Address, Bytes, TxHash, U256};
use alloy_provider::Provider;
use alloy_rpc_types::TransactionRequest;
use balance::{BalanceQuery, Monitor, TokenMetadata};
use ledger::{units::format_tokens, Ledger};
use tokio_retry::{strategy::ExponentialBackoff, Retry};
use tracing::{debug, info, warn};

/// Result of a contract creation.
#[derive(Debug, Clone)]
pub struct Deployment {
    /// Address of the created contract
    pub address: Address,
    /// Transaction hash
    pub tx_hash: TxHash,
    /// Block number where transaction was included
    pub block_number: Option<u64>,
    /// Gas used
    pub gas_used: u64,
}

/// Check that `deployer` holds native currency to pay for the creation transaction.
pub async fn ensure_funded<M>(monitor: &M, deployer: Address) -> eyre::Result<U256>
where
    M: Monitor,
{
    let balance = monitor
        .query_balance(BalanceQuery::NativeBalance { address: deployer })
        .await?;

    if balance.amount.is_zero() {
        eyre::bail!("Deployer {} has no funds to pay for deployment", deployer);
    }

    info!(%deployer, balance = %format_ether(balance.amount), "Deployer funded");
    Ok(balance.amount)
}

/// Submit a contract creation transaction and wait for its receipt.
///
/// `code` is the creation bytecode with constructor arguments appended.
pub async fn deploy_token<P>(provider: &P, code: Bytes) -> eyre::Result<Deployment>
where
    P: Provider + Clone,
{
    debug!(code_len = code.len(), "Submitting contract creation");

    let tx = TransactionRequest::default().with_deploy_code(code);
    let pending = provider.send_transaction(tx).await?;
    let receipt = pending.get_receipt().await?;

    if !receipt.status() {
        eyre::bail!(
            "Deployment transaction {} reverted",
            receipt.transaction_hash
        );
    }

    let Some(address) = receipt.contract_address else {
        eyre::bail!(
            "Receipt for {} has no contract address",
            receipt.transaction_hash
        );
    };

    info!(
        tx_hash = %receipt.transaction_hash,
        block_number = receipt.block_number,
        gas_used = receipt.gas_used,
        %address,
        "Token deployed."
    );

    Ok(Deployment {
        address,
        tx_hash: receipt.transaction_hash,
        block_number: receipt.block_number,
        gas_used: receipt.gas_used,
    })
}

/// Wait until `address` has code, retrying on load-balanced endpoints that lag behind.
pub async fn wait_for_code<P>(provider: &P, address: Address) -> eyre::Result<Bytes>
where
    P: Provider + Clone,
{
    // Exponential backoff: 100ms, 200ms, 400ms, 800ms, 1.6s (max 5 attempts)
    let retry_strategy = ExponentialBackoff::from_millis(100).take(5);

    Retry::spawn(retry_strategy, || async {
        let code = provider.get_code_at(address).await?;
        if code.is_empty() {
            warn!(%address, "No code at deployment address yet, will retry");
            eyre::bail!("No code at {}", address);
        }
        Ok(code)
    })
    .await
}

/// Check a deployed token against a ledger constructed with the same parameters.
///
/// Compares the token metadata first, then the deployer's balance.
pub async fn verify_deployment<M>(
    monitor: &M,
    token: Address,
    deployer: Address,
    expected: &Ledger,
) -> eyre::Result<TokenMetadata>
where
    M: Monitor,
{
    let metadata = monitor.query_metadata(token).await?;

    if metadata.name != expected.name() {
        eyre::bail!(
            "Name mismatch: deployed {:?}, expected {:?}",
            metadata.name,
            expected.name()
        );
    }
    if metadata.symbol != expected.symbol() {
        eyre::bail!(
            "Symbol mismatch: deployed {:?}, expected {:?}",
            metadata.symbol,
            expected.symbol()
        );
    }
    if metadata.decimals != expected.decimals() {
        eyre::bail!(
            "Decimals mismatch: deployed {}, expected {}",
            metadata.decimals,
            expected.decimals()
        );
    }
    if metadata.total_supply != expected.total_supply() {
        eyre::bail!(
            "Total supply mismatch: deployed {}, expected {}",
            format_tokens(metadata.total_supply),
            format_tokens(expected.total_supply())
        );
    }

    let balance = monitor
        .query_balance(BalanceQuery::TokenBalance {
            token,
            holder: deployer,
        })
        .await?;

    if balance.amount != expected.balance_of(deployer) {
        eyre::bail!(
            "Deployer {} holds {}, expected {}",
            deployer,
            format_tokens(balance.amount),
            format_tokens(expected.balance_of(deployer))
        );
    }

    info!(
        %token,
        name = %metadata.name,
        symbol = %metadata.symbol,
        total_supply = %format_tokens(metadata.total_supply),
        "Deployment verified"
    );

    Ok(metadata)
}
