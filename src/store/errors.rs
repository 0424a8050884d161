//! # Store Errors
//!
//! The store has no error taxonomy of its own: absence is communicated with
//! `Option`, deletion outcomes with `bool`. The only failure an in-memory
//! map can produce is a poisoned lock, which the endpoint layer maps to 500.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store errors
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// A thread panicked while holding the store lock
    #[error("employee store lock poisoned")]
    LockPoisoned,
}
