//! The linear initialize workflow.
//!
//! ```text
//! connectivity check → derive address → balance → build → sign → submit → wait
//! ```
//!
//! Each step either advances or ends the run with an [`InitError`]. Nothing
//! is retried and exactly one transaction is submitted.

use std::io::Write;
use std::time::Duration;

use alloy::primitives::{Address, TxHash};

use crate::blockchain::transaction::{wait_for_receipt, TxBuilder};
use crate::blockchain::{BlockchainError, ChainRpc, TransactionSigner};
use crate::config::InitConfig;
use crate::initializer::error::InitError;
use crate::initializer::report::Console;

/// Fixed parameters of a run, resolved from [`InitConfig`].
#[derive(Debug, Clone)]
pub struct WorkflowSettings {
    pub network_name: String,
    pub native_symbol: String,
    pub chain_id: u64,
    pub contract_name: String,
    pub contract: Address,
    pub gas_limit: u64,
    pub receipt_timeout: Duration,
    pub poll_interval: Duration,
}

impl TryFrom<&InitConfig> for WorkflowSettings {
    type Error = InitError;

    fn try_from(config: &InitConfig) -> Result<Self, Self::Error> {
        let contract = config.contract.address.parse::<Address>().map_err(|e| {
            InitError::Configuration(format!(
                "invalid contract address '{}': {}",
                config.contract.address, e
            ))
        })?;

        Ok(Self {
            network_name: config.network.name.clone(),
            native_symbol: config.network.native_symbol.clone(),
            chain_id: config.network.chain_id,
            contract_name: config.contract.name.clone(),
            contract,
            gas_limit: config.transaction.gas_limit,
            receipt_timeout: Duration::from_secs(config.transaction.receipt_timeout_secs),
            poll_interval: Duration::from_millis(config.transaction.poll_interval_ms),
        })
    }
}

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitOutcome {
    /// Hash reported by the endpoint on submission.
    pub tx_hash: TxHash,
    pub gas_used: u64,
    pub block_number: Option<u64>,
    /// The wallet that is now contract admin.
    pub admin: Address,
}

/// One initialize run against an RPC endpoint.
pub struct Workflow<'a, R> {
    settings: &'a WorkflowSettings,
    rpc: &'a R,
}

impl<'a, R: ChainRpc> Workflow<'a, R> {
    pub fn new(settings: &'a WorkflowSettings, rpc: &'a R) -> Self {
        Self { settings, rpc }
    }

    /// Run every step after the credential has been loaded.
    pub async fn execute<S, W>(&self, signer: &S, console: &mut Console<W>) -> Result<InitOutcome, InitError>
    where
        S: TransactionSigner,
        W: Write,
    {
        let settings = self.settings;

        self.check_connectivity().await?;
        console.connected(
            &settings.network_name,
            settings.chain_id,
            &settings.contract_name,
            settings.contract,
        );

        let address = signer.address();
        console.wallet(address);

        let balance = self
            .rpc
            .balance(address)
            .await
            .map_err(|e| InitError::Rpc(e.to_string()))?;
        console.balance(balance, &settings.native_symbol);
        tracing::info!(%address, %balance, "Wallet balance");

        if balance.is_zero() {
            return Err(InitError::Precondition { address });
        }

        console.sending();
        let request = TxBuilder::new(self.rpc, settings.contract, settings.chain_id, settings.gas_limit)
            .build(address)
            .await
            .map_err(|e| InitError::Rpc(e.to_string()))?;

        let signed = signer
            .sign_transaction(request)
            .map_err(|e| InitError::Configuration(e.to_string()))?;

        let tx_hash = self
            .rpc
            .send_raw_transaction(&signed.raw)
            .await
            .map_err(|e| InitError::Submission(e.to_string()))?;
        if tx_hash != signed.hash {
            tracing::warn!(local = %signed.hash, remote = %tx_hash, "Endpoint reported a different transaction hash");
        }
        tracing::info!(
            %tx_hash,
            nonce = signed.request.nonce,
            gas_price = signed.request.gas_price,
            "Transaction submitted"
        );
        console.submitted(tx_hash);

        let receipt = wait_for_receipt(self.rpc, tx_hash, settings.receipt_timeout, settings.poll_interval)
            .await
            .map_err(|e| match e {
                BlockchainError::ConfirmationTimeout(secs) => InitError::Timeout { tx_hash, secs },
                other => InitError::Rpc(other.to_string()),
            })?;

        if !receipt.success {
            console.failed(&receipt);
            return Err(InitError::Execution {
                tx_hash,
                gas_used: receipt.gas_used,
            });
        }

        console.succeeded(&receipt, address);
        tracing::info!(
            %tx_hash,
            gas_used = receipt.gas_used,
            block_number = ?receipt.block_number,
            "Contract initialized"
        );

        Ok(InitOutcome {
            tx_hash,
            gas_used: receipt.gas_used,
            block_number: receipt.block_number,
            admin: address,
        })
    }

    /// One `eth_chainId` call; the answer must match the configured chain.
    async fn check_connectivity(&self) -> Result<(), InitError> {
        let chain_id = self
            .rpc
            .chain_id()
            .await
            .map_err(|e| InitError::Connectivity(e.to_string()))?;

        if chain_id.0 != self.settings.chain_id {
            return Err(InitError::Connectivity(
                BlockchainError::ChainMismatch {
                    expected: self.settings.chain_id,
                    actual: chain_id.0,
                }
                .to_string(),
            ));
        }
        Ok(())
    }
}
