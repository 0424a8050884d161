//! # HTTP Server
//!
//! Axum endpoint layer over the employee store: the seven employee
//! endpoints, their input validation, and the status-code contract
//! (200/400/404/500).

pub mod config;
pub mod employee_routes;
pub mod errors;
pub mod server;
pub mod validation;

pub use config::HttpServerConfig;
pub use employee_routes::{employee_routes, EmployeeState};
pub use errors::{ApiError, ApiResult};
pub use server::HttpServer;
pub use validation::{validate_creation_input, ValidationError};
