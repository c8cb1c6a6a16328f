//! Wallet management and transaction signing.
//!
//! # Security
//! - Private keys are loaded ONLY from environment variables
//! - Keys are never logged or serialized
//! - `Debug` output shows the address, never the key

use alloy::consensus::{SignableTransaction, TxEnvelope, TxLegacy};
use alloy::eips::eip2718::Encodable2718;
use alloy::network::TxSignerSync;
use alloy::primitives::{Address, Bytes, TxKind, U256};
use alloy::signers::local::PrivateKeySigner;

use crate::blockchain::types::{BlockchainError, BlockchainResult, InitializeTx, SignedInitializeTx};

/// Signs the initialize transaction.
///
/// Key derivation and the signature scheme live behind this trait so the
/// workflow never touches key material directly.
pub trait TransactionSigner: Send + Sync {
    /// Address the signatures recover to.
    fn address(&self) -> Address;

    /// Sign `tx`, producing its raw encoding and hash.
    fn sign_transaction(&self, tx: InitializeTx) -> BlockchainResult<SignedInitializeTx>;
}

/// Read a private key from `var`, treating blank values as absent.
pub fn private_key_from_env(var: &str) -> Option<String> {
    std::env::var(var)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Local private-key wallet.
#[derive(Clone)]
pub struct Wallet {
    /// The underlying signer (private key).
    signer: PrivateKeySigner,
    /// Chain ID for EIP-155 replay protection.
    chain_id: u64,
}

impl Wallet {
    /// Create a wallet from a hex-encoded private key string.
    ///
    /// # Arguments
    /// * `private_key_hex` - Hex string (with or without 0x prefix)
    /// * `chain_id` - Chain ID for transaction signing
    pub fn from_private_key(private_key_hex: &str, chain_id: u64) -> BlockchainResult<Self> {
        let key_hex = private_key_hex.strip_prefix("0x").unwrap_or(private_key_hex);

        let signer: PrivateKeySigner = key_hex
            .parse()
            .map_err(|e| BlockchainError::Wallet(format!("Invalid private key format: {}", e)))?;

        tracing::debug!(address = %signer.address(), chain_id, "Wallet derived");

        Ok(Self { signer, chain_id })
    }

    /// Get the wallet's address.
    pub fn address(&self) -> Address {
        self.signer.address()
    }
}

impl TransactionSigner for Wallet {
    fn address(&self) -> Address {
        self.signer.address()
    }

    fn sign_transaction(&self, tx: InitializeTx) -> BlockchainResult<SignedInitializeTx> {
        if tx.chain_id != self.chain_id {
            return Err(BlockchainError::ChainMismatch {
                expected: self.chain_id,
                actual: tx.chain_id,
            });
        }

        let mut legacy = TxLegacy {
            chain_id: Some(tx.chain_id),
            nonce: tx.nonce,
            gas_price: tx.gas_price,
            gas_limit: tx.gas_limit,
            to: TxKind::Call(tx.to),
            value: U256::ZERO,
            input: tx.input.clone(),
        };

        let signature = self
            .signer
            .sign_transaction_sync(&mut legacy)
            .map_err(|e| BlockchainError::Wallet(format!("Signing failed: {}", e)))?;

        let signed = legacy.into_signed(signature);
        let hash = *signed.hash();
        let raw = Bytes::from(TxEnvelope::from(signed).encoded_2718());

        Ok(SignedInitializeTx {
            request: tx,
            raw,
            hash,
        })
    }
}

impl std::fmt::Debug for Wallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wallet")
            .field("address", &self.address())
            .field("chain_id", &self.chain_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::keccak256;

    // Well-known test private key (Anvil's first account)
    const TEST_PRIVATE_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    fn sample_tx(from: Address, chain_id: u64) -> InitializeTx {
        InitializeTx {
            from,
            nonce: 7,
            chain_id,
            gas_limit: 200_000,
            gas_price: 1_000_000_000,
            to: Address::repeat_byte(0xbf),
            input: Bytes::from_static(&[0x81, 0x29, 0xfc, 0x1c]),
        }
    }

    #[test]
    fn test_wallet_from_private_key() {
        let wallet = Wallet::from_private_key(TEST_PRIVATE_KEY, 1).unwrap();
        assert_eq!(
            wallet.address().to_string().to_lowercase(),
            "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"
        );
    }

    #[test]
    fn test_wallet_with_0x_prefix() {
        let wallet = Wallet::from_private_key(&format!("0x{}", TEST_PRIVATE_KEY), 1).unwrap();
        assert_eq!(
            wallet.address().to_string().to_lowercase(),
            "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"
        );
    }

    #[test]
    fn test_invalid_private_key() {
        let result = Wallet::from_private_key("invalid_key", 1);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid private key"));
    }

    #[test]
    fn test_debug_hides_key() {
        let wallet = Wallet::from_private_key(TEST_PRIVATE_KEY, 1).unwrap();
        let debug = format!("{:?}", wallet);
        assert!(!debug.contains(TEST_PRIVATE_KEY));
        assert!(debug.contains("address"));
    }

    #[test]
    fn test_private_key_from_env_treats_blank_as_missing() {
        std::env::set_var("REGISTRY_INIT_TEST_BLANK_KEY", "   ");
        assert_eq!(private_key_from_env("REGISTRY_INIT_TEST_BLANK_KEY"), None);
        assert_eq!(private_key_from_env("REGISTRY_INIT_TEST_UNSET_KEY"), None);
    }

    #[test]
    fn test_signed_hash_matches_raw_encoding() {
        let wallet = Wallet::from_private_key(TEST_PRIVATE_KEY, 33529).unwrap();
        let signed = wallet
            .sign_transaction(sample_tx(wallet.address(), 33529))
            .unwrap();

        assert_eq!(signed.hash, keccak256(&signed.raw));
        // Legacy transactions are bare RLP lists.
        assert!(signed.raw[0] >= 0xc0);
        assert_eq!(signed.request.nonce, 7);
    }

    #[test]
    fn test_signing_is_deterministic_per_nonce() {
        let wallet = Wallet::from_private_key(TEST_PRIVATE_KEY, 33529).unwrap();
        let first = wallet.sign_transaction(sample_tx(wallet.address(), 33529)).unwrap();
        let again = wallet.sign_transaction(sample_tx(wallet.address(), 33529)).unwrap();
        assert_eq!(first.hash, again.hash);

        let mut next = sample_tx(wallet.address(), 33529);
        next.nonce += 1;
        let second = wallet.sign_transaction(next).unwrap();
        assert_ne!(first.hash, second.hash);
    }

    #[test]
    fn test_rejects_foreign_chain_id() {
        let wallet = Wallet::from_private_key(TEST_PRIVATE_KEY, 33529).unwrap();
        let result = wallet.sign_transaction(sample_tx(wallet.address(), 1));
        assert!(matches!(
            result,
            Err(BlockchainError::ChainMismatch { expected: 33529, actual: 1 })
        ));
    }
}
