//! CLI-specific error types
//!
//! All CLI errors are fatal; main prints them and exits non-zero.

use std::io;

use thiserror::Error;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// Server failed to boot or run
    #[error("boot failed: {0}")]
    BootFailed(String),

    /// I/O error
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
