//! CLI command implementations

use tracing_subscriber::EnvFilter;

use crate::http_server::{HttpServer, HttpServerConfig};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { host, port } => serve(host, port),
    }
}

/// Start the HTTP server
///
/// 1. Initialize logging
/// 2. Build the server from CLI flags
/// 3. Start the async runtime and block on the server
pub fn serve(host: String, port: u16) -> CliResult<()> {
    init_logging();

    let config = HttpServerConfig {
        host,
        port,
        ..Default::default()
    };
    let server = HttpServer::with_config(config);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::BootFailed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::BootFailed(format!("HTTP server failed: {}", e)))
    })
}

/// Initialize the tracing subscriber
///
/// RUST_LOG overrides the default `info` filter.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
