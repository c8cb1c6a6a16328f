//! One-shot initializer for the Varity app registry contract.

pub mod blockchain;
pub mod config;
pub mod initializer;
pub mod observability;

pub use config::schema::InitConfig;
pub use initializer::{run, InitError, InitOutcome};
