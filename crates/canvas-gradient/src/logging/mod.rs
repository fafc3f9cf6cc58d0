//! Logging utilities.
//!
//! The library only emits through the `log` facade. Binaries and tests call
//! `init_logging` to install an `env_logger` backend.

mod init;

pub use init::{LoggingConfig, init_logging};
