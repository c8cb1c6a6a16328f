//! Call-recording RPC stub shared by the workflow tests.

use std::sync::Mutex;

use alloy::primitives::{keccak256, Address, TxHash, U256};

use crate::blockchain::{BlockchainError, ChainId, ChainRpc, ReceiptOutcome};
use crate::blockchain::types::BlockchainResult;

// Anvil's first account.
pub const TEST_PRIVATE_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// How the stub answers receipt queries.
#[derive(Debug, Clone, Copy)]
pub enum ReceiptMode {
    Success,
    Reverted,
    /// Always `null`.
    Pending,
    /// Never answers.
    Hang,
}

#[derive(Debug)]
pub struct StubRpc {
    /// `None` simulates an unreachable endpoint.
    chain_id: Option<u64>,
    balance: U256,
    receipt: ReceiptMode,
    reject_with: Option<String>,
    calls: Mutex<Vec<&'static str>>,
    submitted: Mutex<Vec<TxHash>>,
}

impl StubRpc {
    pub fn new(chain_id: u64, balance: U256, receipt: ReceiptMode) -> Self {
        Self {
            chain_id: Some(chain_id),
            balance,
            receipt,
            reject_with: None,
            calls: Mutex::new(Vec::new()),
            submitted: Mutex::new(Vec::new()),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            chain_id: None,
            ..Self::new(0, U256::ZERO, ReceiptMode::Pending)
        }
    }

    /// Refuse every raw transaction with `message`.
    pub fn rejecting(mut self, message: &str) -> Self {
        self.reject_with = Some(message.to_string());
        self
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    pub fn submitted(&self) -> Vec<TxHash> {
        self.submitted.lock().unwrap().clone()
    }

    fn record(&self, method: &'static str) {
        self.calls.lock().unwrap().push(method);
    }
}

impl ChainRpc for StubRpc {
    async fn chain_id(&self) -> BlockchainResult<ChainId> {
        self.record("eth_chainId");
        self.chain_id
            .map(ChainId)
            .ok_or_else(|| BlockchainError::Rpc("connection refused".to_string()))
    }

    async fn balance(&self, _address: Address) -> BlockchainResult<U256> {
        self.record("eth_getBalance");
        Ok(self.balance)
    }

    async fn pending_nonce(&self, _address: Address) -> BlockchainResult<u64> {
        self.record("eth_getTransactionCount");
        Ok(self.submitted.lock().unwrap().len() as u64)
    }

    async fn gas_price(&self) -> BlockchainResult<u128> {
        self.record("eth_gasPrice");
        Ok(1_000_000_000)
    }

    async fn send_raw_transaction(&self, raw: &[u8]) -> BlockchainResult<TxHash> {
        self.record("eth_sendRawTransaction");
        if let Some(message) = &self.reject_with {
            return Err(BlockchainError::Rejected(message.clone()));
        }
        let hash = keccak256(raw);
        self.submitted.lock().unwrap().push(hash);
        Ok(hash)
    }

    async fn transaction_receipt(&self, tx_hash: TxHash) -> BlockchainResult<Option<ReceiptOutcome>> {
        self.record("eth_getTransactionReceipt");
        let success = match self.receipt {
            ReceiptMode::Success => true,
            ReceiptMode::Reverted => false,
            ReceiptMode::Pending => return Ok(None),
            ReceiptMode::Hang => std::future::pending().await,
        };
        Ok(Some(ReceiptOutcome {
            tx_hash,
            success,
            gas_used: 46_000,
            block_number: Some(1),
        }))
    }
}
