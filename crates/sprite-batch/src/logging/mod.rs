//! Logging utilities.
//!
//! The library only emits through the `log` facade. Embedding applications that
//! want output without wiring their own backend can call [`init_logging`].

mod init;

pub use init::{init_logging, LoggingConfig};
