//! # CLI
//!
//! Command-line entry for rosterd. `serve` is the only command: it boots
//! logging, builds the HTTP server, and blocks on it.

pub mod args;
pub mod commands;
pub mod errors;

pub use commands::run;
pub use errors::{CliError, CliResult};
