//! registry-init
//!
//! Makes the wallet behind `PRIVATE_KEY` the first admin of the app registry
//! by sending a single `initialize()` transaction.
//!
//! ```text
//! PRIVATE_KEY=<hex> registry-init [--config registry-init.toml]
//!
//!   read key ─▶ eth_chainId ─▶ eth_getBalance ─▶ nonce + gas price
//!       ─▶ sign ─▶ eth_sendRawTransaction ─▶ poll receipt (≤ 120 s)
//! ```
//!
//! Exit status is 0 when the receipt reports success and 1 otherwise.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use registry_init::blockchain::wallet::private_key_from_env;
use registry_init::blockchain::BlockchainClient;
use registry_init::config::{resolve_config, ConfigOverrides};
use registry_init::observability::init_logging;

#[derive(Parser)]
#[command(name = "registry-init")]
#[command(about = "Send initialize() to the app registry and wait for the receipt", long_about = None)]
struct Cli {
    /// TOML configuration file; built-in testnet defaults when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// JSON-RPC endpoint URL.
    #[arg(long)]
    rpc_url: Option<String>,

    /// Registry contract address.
    #[arg(long)]
    contract: Option<String>,

    /// Expected chain ID.
    #[arg(long)]
    chain_id: Option<u64>,

    /// Seconds to wait for the receipt.
    #[arg(long)]
    receipt_timeout_secs: Option<u64>,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            rpc_url: self.rpc_url.clone(),
            contract_address: self.contract.clone(),
            chain_id: self.chain_id,
            receipt_timeout_secs: self.receipt_timeout_secs,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match resolve_config(cli.config.as_deref(), &cli.overrides()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(1);
        }
    };

    init_logging(&config.observability);
    tracing::info!(
        rpc_url = %config.network.rpc_url,
        chain_id = config.network.chain_id,
        "registry-init v{} starting",
        env!("CARGO_PKG_VERSION")
    );

    let client = match BlockchainClient::new(&config.network) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(1);
        }
    };

    let private_key = private_key_from_env(&config.credentials.private_key_env);

    match registry_init::run(&config, private_key, &client, std::io::stdout()).await {
        Ok(outcome) => {
            tracing::info!(tx_hash = %outcome.tx_hash, "Done");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(kind = e.kind(), error = %e, "Initialization failed");
            eprintln!("Error: {}", e);
            if let Some(hint) = e.usage_hint() {
                eprintln!("{}", hint);
            }
            ExitCode::from(e.exit_code())
        }
    }
}
