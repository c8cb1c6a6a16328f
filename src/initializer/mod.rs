//! Contract initialization workflow.
//!
//! # Data Flow
//! ```text
//! InitConfig + private key (environment)
//!     → run() (credential check, wallet derivation)
//!     → workflow.rs (connect, balance, build, sign, submit, wait)
//!     → report.rs (console progress lines)
//!     → InitOutcome | InitError (exit status 0 | 1)
//! ```
//!
//! # Guarantees
//! - No network call happens before a usable credential is loaded
//! - Exactly one transaction is submitted per run, never retried
//! - Every error ends the run

pub mod error;
pub mod report;
pub mod workflow;

#[cfg(test)]
pub(crate) mod testing;

use std::io::Write;

use tracing::Instrument;
use uuid::Uuid;

use crate::blockchain::{ChainRpc, Wallet};
use crate::config::InitConfig;

pub use error::InitError;
pub use report::Console;
pub use workflow::{InitOutcome, Workflow, WorkflowSettings};

/// Initialize the configured contract with the wallet behind `private_key`.
///
/// `private_key` is the raw value read from the environment; `None` fails
/// with [`InitError::MissingCredential`] before `rpc` is touched.
pub async fn run<R, W>(
    config: &InitConfig,
    private_key: Option<String>,
    rpc: &R,
    out: W,
) -> Result<InitOutcome, InitError>
where
    R: ChainRpc,
    W: Write,
{
    let span = tracing::info_span!("initialize", run_id = %Uuid::new_v4());

    async move {
        let settings = WorkflowSettings::try_from(config)?;

        let private_key = private_key.ok_or_else(|| InitError::MissingCredential {
            var: config.credentials.private_key_env.clone(),
        })?;
        let wallet = Wallet::from_private_key(&private_key, settings.chain_id)
            .map_err(|e| InitError::Configuration(e.to_string()))?;

        tracing::info!(
            chain_id = settings.chain_id,
            contract = %settings.contract,
            wallet = %wallet.address(),
            "Starting initialization"
        );

        let mut console = Console::new(out);
        Workflow::new(&settings, rpc).execute(&wallet, &mut console).await
    }
    .instrument(span)
    .await
}
