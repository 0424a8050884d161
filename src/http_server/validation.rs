//! # Creation Input Validation
//!
//! Semantic rules for employee creation, applied by the endpoint layer
//! before any store call: non-blank name and title, positive salary, age
//! within the employable range, and the contractual email pattern.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use crate::store::EmployeeCreationInput;

/// Minimum accepted age
pub const MIN_AGE: i64 = 16;

/// Maximum accepted age
pub const MAX_AGE: i64 = 75;

// The email pattern is contractual; do not substitute a library validator.
const EMAIL_PATTERN: &str =
    r"^[A-Za-z0-9_-]+(\.[A-Za-z0-9_-]+)*@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*$";

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("valid email regex"))
}

/// Validation failures for employee creation input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid name")]
    InvalidName,

    #[error("Title is required")]
    MissingTitle,

    #[error("Invalid salary")]
    InvalidSalary,

    #[error("Age is out of valid range (min=16, max=75)")]
    AgeOutOfRange,

    #[error("Invalid email address provided")]
    InvalidEmail,
}

/// Validate creation input against the endpoint contract.
///
/// Returns the first rule violated; callers surface any violation as 400.
pub fn validate_creation_input(input: &EmployeeCreationInput) -> Result<(), ValidationError> {
    if input.name.trim().is_empty() {
        return Err(ValidationError::InvalidName);
    }
    if input.title.trim().is_empty() {
        return Err(ValidationError::MissingTitle);
    }
    if input.salary <= 0 {
        return Err(ValidationError::InvalidSalary);
    }
    if input.age < MIN_AGE || input.age > MAX_AGE {
        return Err(ValidationError::AgeOutOfRange);
    }
    if !is_email(&input.email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// Check a string against the contractual email pattern
fn is_email(email: &str) -> bool {
    if email.trim().is_empty() {
        return false;
    }
    email_regex().is_match(email)
}
