//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate the endpoint URL and contract address formats
//! - Validate value ranges (chain id, gas limit, timeouts)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: InitConfig → Result<(), Vec<ValidationError>>
//! - Runs before any network activity

use alloy::primitives::Address;

use crate::config::schema::InitConfig;

/// Intrinsic gas of any transaction; a lower limit can never be mined.
const MIN_GAS_LIMIT: u64 = 21_000;

/// A single semantic problem with the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field.
    pub field: &'static str,
    /// What is wrong with it.
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a configuration, collecting every error found.
pub fn validate_config(config: &InitConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match url::Url::parse(&config.network.rpc_url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        Ok(url) => errors.push(ValidationError::new(
            "network.rpc_url",
            format!("unsupported scheme '{}', expected http or https", url.scheme()),
        )),
        Err(e) => errors.push(ValidationError::new(
            "network.rpc_url",
            format!("invalid URL '{}': {}", config.network.rpc_url, e),
        )),
    }

    if config.network.chain_id == 0 {
        errors.push(ValidationError::new("network.chain_id", "must be greater than 0"));
    }

    if config.network.rpc_timeout_secs == 0 {
        errors.push(ValidationError::new(
            "network.rpc_timeout_secs",
            "must be greater than 0",
        ));
    }

    match config.contract.address.parse::<Address>() {
        Ok(address) if address.is_zero() => errors.push(ValidationError::new(
            "contract.address",
            "must not be the zero address",
        )),
        Ok(_) => {}
        Err(e) => errors.push(ValidationError::new(
            "contract.address",
            format!("invalid address '{}': {}", config.contract.address, e),
        )),
    }

    let tx = &config.transaction;
    if tx.gas_limit < MIN_GAS_LIMIT {
        errors.push(ValidationError::new(
            "transaction.gas_limit",
            format!("must be at least {}", MIN_GAS_LIMIT),
        ));
    }

    if tx.receipt_timeout_secs == 0 {
        errors.push(ValidationError::new(
            "transaction.receipt_timeout_secs",
            "must be greater than 0",
        ));
    }

    if tx.poll_interval_ms == 0 {
        errors.push(ValidationError::new(
            "transaction.poll_interval_ms",
            "must be greater than 0",
        ));
    } else if tx.poll_interval_ms >= tx.receipt_timeout_secs.saturating_mul(1_000) {
        errors.push(ValidationError::new(
            "transaction.poll_interval_ms",
            "must be shorter than the receipt timeout",
        ));
    }

    if config.credentials.private_key_env.trim().is_empty() {
        errors.push(ValidationError::new(
            "credentials.private_key_env",
            "must name an environment variable",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
