//! Chain-specific types and error definitions.

use alloy::primitives::{Address, Bytes, TxHash};
use thiserror::Error;

/// Chain ID type for strong typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChainId(pub u64);

impl From<u64> for ChainId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<ChainId> for u64 {
    fn from(id: ChainId) -> Self {
        id.0
    }
}

/// Errors that can occur during blockchain operations.
#[derive(Debug, Error)]
pub enum BlockchainError {
    /// RPC connection or request failed.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// RPC request timed out.
    #[error("RPC timeout after {0} seconds")]
    Timeout(u64),

    /// No receipt arrived within the wait.
    #[error("Transaction not mined after {0} seconds")]
    ConfirmationTimeout(u64),

    /// Invalid private key format or signing error.
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// The endpoint refused a raw transaction.
    #[error("Transaction rejected: {0}")]
    Rejected(String),

    /// Chain configuration mismatch.
    #[error("Chain ID mismatch: expected {expected}, got {actual}")]
    ChainMismatch { expected: u64, actual: u64 },
}

/// Result type for blockchain operations.
pub type BlockchainResult<T> = Result<T, BlockchainError>;

/// Unsigned legacy transaction calling the contract's `initialize()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitializeTx {
    pub from: Address,
    pub nonce: u64,
    pub chain_id: u64,
    pub gas_limit: u64,
    pub gas_price: u128,
    pub to: Address,
    pub input: Bytes,
}

/// A signed transaction ready for `eth_sendRawTransaction`.
#[derive(Debug, Clone)]
pub struct SignedInitializeTx {
    /// The request that was signed.
    pub request: InitializeTx,
    /// EIP-2718 encoded bytes.
    pub raw: Bytes,
    /// Hash of the signed transaction.
    pub hash: TxHash,
}

/// The parts of a receipt the workflow cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReceiptOutcome {
    pub tx_hash: TxHash,
    /// `true` when the receipt status is 1.
    pub success: bool,
    pub gas_used: u64,
    pub block_number: Option<u64>,
}
