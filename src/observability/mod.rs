//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! config, blockchain, initializer
//!     → tracing events (structured fields, run_id span)
//!     → logging.rs subscriber (stderr)
//! ```

pub mod logging;

pub use logging::init_logging;
