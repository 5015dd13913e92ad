//! Logging utilities.
//!
//! Centralizes logger initialization. Library code logs through the standard
//! `log` facade only; the backend is chosen here by the host.

mod init;

pub use init::{init_logging, LoggingConfig};
