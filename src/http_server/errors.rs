//! # Endpoint Errors
//!
//! Error types for the employee endpoints. The contract allows exactly four
//! status codes; error responses carry empty bodies (the delete endpoint,
//! which answers with string bodies on every outcome, builds its responses
//! directly and does not go through this type).

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::store::StoreError;

use super::validation::ValidationError;

/// Result type for endpoint handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Employee endpoint errors
#[derive(Debug, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Blank or missing request parameter
    #[error("invalid {0} parameter")]
    InvalidParameter(&'static str),

    /// Request body failed to decode
    #[error("invalid request body: {0}")]
    InvalidBody(String),

    /// Creation input failed validation
    #[error("{0}")]
    Validation(#[from] ValidationError),

    // ==================
    // Not Found (404)
    // ==================
    /// Requested resource does not exist (or an aggregate has no data)
    #[error("resource not found")]
    NotFound,

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Store failure
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidParameter(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Status line only; the error contract has empty bodies
        self.status_code().into_response()
    }
}
