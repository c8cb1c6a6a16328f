//! Configuration schema definitions.
//!
//! All sections default to the Varity L3 testnet deployment of the app
//! registry, so running without a config file initializes that contract.

use serde::{Deserialize, Serialize};

/// Default JSON-RPC endpoint (Varity L3 testnet).
pub const DEFAULT_RPC_URL: &str = "https://rpc-varity-testnet-rroe52pwjp.t.conduit.xyz";

/// Default registry contract address.
pub const DEFAULT_CONTRACT_ADDRESS: &str = "0xbf9f4849a5508e9f271c30205c1ce924328e5e1c";

/// Default chain ID (Varity L3 testnet).
pub const DEFAULT_CHAIN_ID: u64 = 33529;

/// Gas limit for the `initialize()` call.
pub const DEFAULT_GAS_LIMIT: u64 = 200_000;

/// How long to wait for a receipt before giving up.
pub const DEFAULT_RECEIPT_TIMEOUT_SECS: u64 = 120;

/// Environment variable holding the signing key.
pub const DEFAULT_PRIVATE_KEY_ENV: &str = "PRIVATE_KEY";

/// Root configuration for the initializer.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct InitConfig {
    /// Endpoint and chain settings.
    pub network: NetworkConfig,

    /// Target contract.
    pub contract: ContractConfig,

    /// Transaction and receipt-wait settings.
    pub transaction: TransactionConfig,

    /// Where the signing key comes from.
    pub credentials: CredentialsConfig,

    /// Logging settings.
    pub observability: ObservabilityConfig,
}

/// JSON-RPC endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// JSON-RPC endpoint URL.
    pub rpc_url: String,

    /// Chain ID used for EIP-155 signing and verified on connect.
    pub chain_id: u64,

    /// Per-request RPC timeout in seconds.
    pub rpc_timeout_secs: u64,

    /// Display name of the network.
    pub name: String,

    /// Symbol of the native gas token, for balance output.
    pub native_symbol: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            chain_id: DEFAULT_CHAIN_ID,
            rpc_timeout_secs: 10,
            name: "Varity L3".to_string(),
            native_symbol: "USDC".to_string(),
        }
    }
}

/// Target contract configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ContractConfig {
    /// Contract address (checksummed or lowercase hex).
    pub address: String,

    /// Display name used in console output.
    pub name: String,
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_CONTRACT_ADDRESS.to_string(),
            name: "VarityAppRegistry".to_string(),
        }
    }
}

/// Transaction parameters.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TransactionConfig {
    /// Fixed gas limit for the call.
    pub gas_limit: u64,

    /// Maximum time to wait for the receipt, in seconds.
    pub receipt_timeout_secs: u64,

    /// Delay between receipt polls, in milliseconds.
    pub poll_interval_ms: u64,
}

impl Default for TransactionConfig {
    fn default() -> Self {
        Self {
            gas_limit: DEFAULT_GAS_LIMIT,
            receipt_timeout_secs: DEFAULT_RECEIPT_TIMEOUT_SECS,
            poll_interval_ms: 1_000,
        }
    }
}

/// Credential source.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CredentialsConfig {
    /// Name of the environment variable holding the hex private key.
    pub private_key_env: String,
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            private_key_env: DEFAULT_PRIVATE_KEY_ENV.to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "registry_init=info".to_string(),
        }
    }
}
