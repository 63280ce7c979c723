//! Logging setup.
//!
//! Everything logs through the `log` facade; `env_logger` is the only backend
//! and is installed here.

mod init;

pub use init::{init_logging, LoggingConfig, DEFAULT_FILTER};
