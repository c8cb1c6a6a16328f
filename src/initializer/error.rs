//! Workflow error kinds.

use alloy::primitives::{Address, TxHash};
use thiserror::Error;

/// Every way an initialization run can end unsuccessfully.
///
/// All variants are terminal: the run stops at the first one.
#[derive(Debug, Error)]
pub enum InitError {
    /// The credential environment variable is unset or blank.
    #[error("{var} environment variable required")]
    MissingCredential { var: String },

    /// Unusable credential or configuration.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The endpoint could not be reached or serves the wrong chain.
    #[error("Could not connect to RPC endpoint: {0}")]
    Connectivity(String),

    /// The wallet holds no funds to pay for gas.
    #[error("Wallet {address} has 0 balance; fund it before initializing")]
    Precondition { address: Address },

    /// A chain-state query failed after connecting.
    #[error("RPC query failed: {0}")]
    Rpc(String),

    /// The endpoint did not accept the signed transaction.
    #[error("Transaction submission failed: {0}")]
    Submission(String),

    /// No receipt arrived in time.
    #[error("Timed out after {secs} seconds waiting for receipt of {tx_hash}")]
    Timeout { tx_hash: TxHash, secs: u64 },

    /// The transaction was mined but reverted.
    #[error("Transaction {tx_hash} failed on-chain (gas used: {gas_used})")]
    Execution { tx_hash: TxHash, gas_used: u64 },
}

impl InitError {
    /// Short name of the error kind, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            InitError::MissingCredential { .. } | InitError::Configuration(_) => "configuration",
            InitError::Connectivity(_) => "connectivity",
            InitError::Precondition { .. } => "precondition",
            InitError::Rpc(_) => "rpc",
            InitError::Submission(_) => "submission",
            InitError::Timeout { .. } => "timeout",
            InitError::Execution { .. } => "execution",
        }
    }

    /// How to invoke the tool, when the error means it was invoked wrong.
    pub fn usage_hint(&self) -> Option<String> {
        match self {
            InitError::MissingCredential { var } => Some(format!("Usage: {}=your_key registry-init", var)),
            _ => None,
        }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        1
    }
}
