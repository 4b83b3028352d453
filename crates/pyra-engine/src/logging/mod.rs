//! Logging utilities.
//!
//! Centralizes logger initialization. Everything else logs through the `log`
//! facade only.

mod init;

pub use init::{init_logging, resolve_filter, LoggingConfig, DEFAULT_FILTER};
