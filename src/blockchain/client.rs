//! Blockchain RPC client with timeout and error handling.
//!
//! # Responsibilities
//! - Connect to the JSON-RPC endpoint
//! - Query chain state (chain id, balance, nonce, gas price, receipts)
//! - Submit raw signed transactions
//! - Bound every request with a timeout

use std::future::{Future, IntoFuture};
use std::sync::Arc;
use std::time::Duration;

use alloy::primitives::{Address, TxHash, U256};
use alloy::providers::{Provider, ProviderBuilder};
use alloy::transports::{TransportError, TransportResult};
use tokio::time::timeout;

use crate::blockchain::types::{BlockchainError, BlockchainResult, ChainId, ReceiptOutcome};
use crate::config::NetworkConfig;

/// The JSON-RPC surface the initializer needs.
///
/// Implemented by [`BlockchainClient`] for real endpoints and by stubs in
/// tests.
pub trait ChainRpc: Send + Sync {
    /// `eth_chainId`; doubles as the connectivity check.
    fn chain_id(&self) -> impl Future<Output = BlockchainResult<ChainId>> + Send;

    /// `eth_getBalance` at the latest block.
    fn balance(&self, address: Address) -> impl Future<Output = BlockchainResult<U256>> + Send;

    /// `eth_getTransactionCount` at the pending block.
    fn pending_nonce(&self, address: Address) -> impl Future<Output = BlockchainResult<u64>> + Send;

    /// `eth_gasPrice` in wei.
    fn gas_price(&self) -> impl Future<Output = BlockchainResult<u128>> + Send;

    /// `eth_sendRawTransaction`, returning the hash the endpoint reports.
    fn send_raw_transaction(&self, raw: &[u8]) -> impl Future<Output = BlockchainResult<TxHash>> + Send;

    /// `eth_getTransactionReceipt`; `None` while the transaction is pending.
    fn transaction_receipt(
        &self,
        tx_hash: TxHash,
    ) -> impl Future<Output = BlockchainResult<Option<ReceiptOutcome>>> + Send;
}

/// alloy-backed RPC client for a single HTTP endpoint.
#[derive(Clone)]
pub struct BlockchainClient {
    provider: Arc<dyn Provider + Send + Sync>,
    rpc_url: String,
    /// Request timeout duration.
    timeout_duration: Duration,
}

impl BlockchainClient {
    /// Create a new blockchain client.
    ///
    /// No request is made here; the endpoint is first contacted by
    /// [`ChainRpc::chain_id`].
    pub fn new(config: &NetworkConfig) -> BlockchainResult<Self> {
        let url: url::Url = config.rpc_url.parse().map_err(|e| {
            BlockchainError::Rpc(format!("Invalid RPC URL '{}': {}", config.rpc_url, e))
        })?;
        let provider = Arc::new(ProviderBuilder::new().connect_http(url)) as Arc<dyn Provider + Send + Sync>;

        tracing::debug!(rpc_url = %config.rpc_url, "RPC client created");

        Ok(Self {
            provider,
            rpc_url: config.rpc_url.clone(),
            timeout_duration: Duration::from_secs(config.rpc_timeout_secs),
        })
    }

    /// Await `request` under the per-request timeout.
    async fn call<T, F>(&self, method: &'static str, request: F) -> BlockchainResult<T>
    where
        F: IntoFuture<Output = TransportResult<T>>,
    {
        match timeout(self.timeout_duration, request).await {
            Ok(Ok(result)) => Ok(result),
            Ok(Err(e)) => {
                tracing::warn!(method, error = %e, "RPC error");
                Err(BlockchainError::Rpc(format!("{} failed: {}", method, e)))
            }
            Err(_) => {
                tracing::warn!(method, "RPC timeout");
                Err(BlockchainError::Timeout(self.timeout_duration.as_secs()))
            }
        }
    }
}

impl ChainRpc for BlockchainClient {
    async fn chain_id(&self) -> BlockchainResult<ChainId> {
        self.call("eth_chainId", self.provider.get_chain_id())
            .await
            .map(ChainId)
    }

    async fn balance(&self, address: Address) -> BlockchainResult<U256> {
        self.call("eth_getBalance", self.provider.get_balance(address)).await
    }

    async fn pending_nonce(&self, address: Address) -> BlockchainResult<u64> {
        self.call(
            "eth_getTransactionCount",
            self.provider.get_transaction_count(address).pending(),
        )
        .await
    }

    async fn gas_price(&self) -> BlockchainResult<u128> {
        self.call("eth_gasPrice", self.provider.get_gas_price()).await
    }

    async fn send_raw_transaction(&self, raw: &[u8]) -> BlockchainResult<TxHash> {
        match timeout(self.timeout_duration, self.provider.send_raw_transaction(raw)).await {
            Ok(Ok(pending)) => Ok(*pending.tx_hash()),
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "Raw transaction not accepted");
                Err(classify_submission_error(e))
            }
            Err(_) => Err(BlockchainError::Timeout(self.timeout_duration.as_secs())),
        }
    }

    async fn transaction_receipt(&self, tx_hash: TxHash) -> BlockchainResult<Option<ReceiptOutcome>> {
        let receipt = self
            .call(
                "eth_getTransactionReceipt",
                self.provider.get_transaction_receipt(tx_hash),
            )
            .await?;

        Ok(receipt.map(|receipt| ReceiptOutcome {
            tx_hash: receipt.transaction_hash,
            success: receipt.status(),
            gas_used: receipt.gas_used,
            block_number: receipt.block_number,
        }))
    }
}

/// JSON-RPC error responses are rejections; anything else is transport.
fn classify_submission_error(e: TransportError) -> BlockchainError {
    match e.as_error_resp() {
        Some(payload) => BlockchainError::Rejected(payload.message.to_string()),
        None => BlockchainError::Rpc(format!("eth_sendRawTransaction failed: {}", e)),
    }
}

impl std::fmt::Debug for BlockchainClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockchainClient")
            .field("rpc_url", &self.rpc_url)
            .field("timeout_secs", &self.timeout_duration.as_secs())
            .finish()
    }
}
