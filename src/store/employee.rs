//! # Employee Model
//!
//! The employee record and its creation payload. The wire format uses the
//! `employee_`-prefixed field names on records and plain names on creation
//! input; serde renames keep the Rust fields idiomatic.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Employee record
///
/// Immutable once created. The `id` is assigned at creation as a fresh
/// random UUID in textual form and stays stable for the life of the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique employee identifier (UUID v4, textual form)
    pub id: String,

    /// Full name (non-empty)
    #[serde(rename = "employee_name")]
    pub name: String,

    /// Salary in whole currency units
    #[serde(rename = "employee_salary")]
    pub salary: i64,

    /// Age in years
    #[serde(rename = "employee_age")]
    pub age: i64,

    /// Job title (non-empty)
    #[serde(rename = "employee_title")]
    pub title: String,

    /// Email address (non-empty)
    #[serde(rename = "employee_email")]
    pub email: String,
}

impl Employee {
    /// Build a new employee from creation input, assigning a fresh id
    pub fn from_creation_input(input: EmployeeCreationInput) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            salary: input.salary,
            age: input.age,
            title: input.title,
            email: input.email,
        }
    }
}

/// Inbound payload for employee creation
///
/// Field presence is enforced by deserialization; the semantic rules
/// (salary range, age range, email shape) live in the endpoint layer.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeCreationInput {
    pub name: String,
    pub salary: i64,
    pub age: i64,
    pub title: String,
    pub email: String,
}
