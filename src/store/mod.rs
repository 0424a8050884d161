//! # Employee Store
//!
//! The in-process source of truth: an in-memory mapping from employee id to
//! employee record, plus the derived queries (substring name search, max
//! salary, top-N earners) the endpoint layer exposes.
//!
//! The store lives for the life of the process. Nothing is persisted.

pub mod employee;
pub mod errors;
pub mod repository;

pub use employee::{Employee, EmployeeCreationInput};
pub use errors::{StoreError, StoreResult};
pub use repository::{EmployeeRepository, InMemoryEmployeeRepository};
