//! Human-readable progress lines.
//!
//! Console output is for the operator; structured events go through
//! `tracing` on stderr.

use std::fmt;
use std::io::Write;

use alloy::primitives::utils::format_ether;
use alloy::primitives::{Address, TxHash, U256};

use crate::blockchain::ReceiptOutcome;

/// Writes progress lines to `out`.
///
/// A failed write is logged at `warn` and does not end the run: the
/// transaction outcome is already decided by then.
pub struct Console<W> {
    out: W,
}

impl<W: Write> Console<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the console, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, args: fmt::Arguments<'_>) {
        if let Err(e) = self.out.write_fmt(args).and_then(|_| self.out.write_all(b"\n")) {
            tracing::warn!(error = %e, "Failed to write progress line");
        }
    }

    pub fn connected(&mut self, network: &str, chain_id: u64, contract_name: &str, contract: Address) {
        self.line(format_args!("Connected to {} (Chain ID: {})", network, chain_id));
        self.line(format_args!("Contract: {} ({})", contract_name, contract));
    }

    pub fn wallet(&mut self, address: Address) {
        self.line(format_args!("Wallet: {}", address));
    }

    pub fn balance(&mut self, balance: U256, symbol: &str) {
        self.line(format_args!("Balance: {} {}", format_ether(balance), symbol));
    }

    pub fn sending(&mut self) {
        self.line(format_args!("\nSending initialize() transaction..."));
    }

    pub fn submitted(&mut self, tx_hash: TxHash) {
        self.line(format_args!("Tx hash: {}", tx_hash));
        self.line(format_args!("Waiting for confirmation..."));
    }

    pub fn succeeded(&mut self, receipt: &ReceiptOutcome, admin: Address) {
        self.line(format_args!("\nInitialize successful!"));
        self.line(format_args!("Tx: {}", receipt.tx_hash));
        self.line(format_args!("Gas used: {}", receipt.gas_used));
        self.line(format_args!("\nYour wallet ({}) is now the contract admin.", admin));
    }

    pub fn failed(&mut self, receipt: &ReceiptOutcome) {
        self.line(format_args!("\nTransaction FAILED"));
        self.line(format_args!("Tx: {}", receipt.tx_hash));
    }
}
