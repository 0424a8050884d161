//! # HTTP Server
//!
//! Assembles the router and serves it. The employee endpoints live at the
//! root; CORS comes from configuration and every request is traced.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::config::HttpServerConfig;
use super::employee_routes::{employee_routes, EmployeeState};

/// HTTP server for the employee directory
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new() -> Self {
        Self::with_config(HttpServerConfig::default())
    }

    /// Create a new HTTP server with custom configuration
    pub fn with_config(config: HttpServerConfig) -> Self {
        let router = Self::build_router(&config);
        Self { config, router }
    }

    /// Build the router with all endpoints
    fn build_router(config: &HttpServerConfig) -> Router {
        let employee_state = Arc::new(EmployeeState::new());

        // Configure CORS from config
        let cors = if config.cors_origins.is_empty() {
            // If no origins configured, use permissive for development
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            use tower_http::cors::AllowOrigin;
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(employee_routes(employee_state))
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid socket address: {}", e),
            )
        })?;

        info!("Starting rosterd HTTP server on {}", addr);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_uses_configured_addr() {
        let server = HttpServer::with_config(HttpServerConfig::with_port(9999));
        assert_eq!(server.socket_addr(), "0.0.0.0:9999");
    }

    #[test]
    fn test_router_builds_with_configured_origins() {
        let config = HttpServerConfig {
            cors_origins: vec!["http://localhost:3000".to_string()],
            ..Default::default()
        };
        let server = HttpServer::with_config(config);
        let _ = server.router();
    }
}
