//! Logger wiring for the `log` facade.

mod init;

pub use init::{init_logging, LoggingConfig};
