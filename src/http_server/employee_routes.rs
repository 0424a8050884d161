//! Employee HTTP Routes
//!
//! The seven employee endpoints. Each handler follows the same pipeline:
//! validate inputs, call the store, map the outcome onto the status-code
//! contract. Validation failures never reach the store; store failures
//! never propagate past the handler.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use tracing::{error, warn};

use crate::store::{
    Employee, EmployeeCreationInput, EmployeeRepository, InMemoryEmployeeRepository,
};

use super::errors::{ApiError, ApiResult};
use super::validation::validate_creation_input;

/// Number of names returned by the top-earners endpoint
const TOP_EARNER_COUNT: usize = 10;

// ==================
// Shared State
// ==================

/// Employee state shared across handlers
pub struct EmployeeState {
    pub store: Arc<dyn EmployeeRepository>,
}

impl EmployeeState {
    /// Create state backed by an empty in-memory store
    pub fn new() -> Self {
        Self {
            store: Arc::new(InMemoryEmployeeRepository::new()),
        }
    }

    /// Create state over a specific repository
    pub fn with_store(store: Arc<dyn EmployeeRepository>) -> Self {
        Self { store }
    }
}

impl Default for EmployeeState {
    fn default() -> Self {
        Self::new()
    }
}

// ==================
// Employee Routes
// ==================

/// Create employee routes
pub fn employee_routes(state: Arc<EmployeeState>) -> Router {
    Router::new()
        .route("/", get(list_all_employees_handler))
        .route("/", post(create_employee_handler))
        .route("/search/{search}", get(search_employees_handler))
        .route("/highestSalary", get(highest_salary_handler))
        .route(
            "/topTenHighestEarningEmployeeNames",
            get(top_earning_names_handler),
        )
        .route("/{id}", get(get_employee_handler))
        .route("/{id}", delete(delete_employee_handler))
        .with_state(state)
}

// ==================
// Query Handlers
// ==================

/// GET / - List all employees
async fn list_all_employees_handler(
    State(state): State<Arc<EmployeeState>>,
) -> ApiResult<Json<Vec<Employee>>> {
    match state.store.list_all() {
        Ok(employees) => Ok(Json(employees)),
        Err(e) => {
            error!("Failed to get all employees: {}", e);
            Err(e.into())
        }
    }
}

/// GET /search/{search} - Search employees by name substring
async fn search_employees_handler(
    State(state): State<Arc<EmployeeState>>,
    Path(search): Path<String>,
) -> ApiResult<Json<Vec<Employee>>> {
    if search.trim().is_empty() {
        warn!("Invalid search string for name search.");
        return Err(ApiError::InvalidParameter("search"));
    }

    match state.store.search_by_name(&search) {
        Ok(employees) if employees.is_empty() => Err(ApiError::NotFound),
        Ok(employees) => Ok(Json(employees)),
        Err(e) => {
            error!("Failed to get employees by name: {}", e);
            Err(e.into())
        }
    }
}

/// GET /{id} - Look up a single employee
async fn get_employee_handler(
    State(state): State<Arc<EmployeeState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Employee>> {
    if id.trim().is_empty() {
        warn!("Invalid employee id.");
        return Err(ApiError::InvalidParameter("id"));
    }

    match state.store.find_by_id(&id) {
        Ok(Some(employee)) => Ok(Json(employee)),
        Ok(None) => Err(ApiError::NotFound),
        Err(e) => {
            error!("Failed to get employee by id: {}", e);
            Err(e.into())
        }
    }
}

/// GET /highestSalary - Highest salary across all employees
async fn highest_salary_handler(
    State(state): State<Arc<EmployeeState>>,
) -> ApiResult<Json<i64>> {
    match state.store.max_salary() {
        Ok(Some(salary)) => Ok(Json(salary)),
        Ok(None) => Err(ApiError::NotFound),
        Err(e) => {
            error!("Failed to get highest employee salary: {}", e);
            Err(e.into())
        }
    }
}

/// GET /topTenHighestEarningEmployeeNames - Names of the top ten earners
async fn top_earning_names_handler(
    State(state): State<Arc<EmployeeState>>,
) -> ApiResult<Json<Vec<String>>> {
    match state.store.top_n_names_by_salary(TOP_EARNER_COUNT) {
        Ok(names) => Ok(Json(names)),
        Err(e) => {
            error!("Failed to get top 10 highest earning employees: {}", e);
            Err(e.into())
        }
    }
}

// ==================
// Mutation Handlers
// ==================

/// POST / - Create an employee
///
/// The body is extracted as a `Result` so decode failures map to 400
/// rather than axum's default rejection status.
async fn create_employee_handler(
    State(state): State<Arc<EmployeeState>>,
    payload: Result<Json<EmployeeCreationInput>, JsonRejection>,
) -> ApiResult<Json<Employee>> {
    let Json(input) = payload.map_err(|e| {
        warn!("Invalid input to create employee - {}", e);
        ApiError::InvalidBody(e.to_string())
    })?;

    if let Err(e) = validate_creation_input(&input) {
        warn!("Invalid input to create employee - {}", e);
        return Err(e.into());
    }

    match state.store.create(input) {
        Ok(employee) => Ok(Json(employee)),
        Err(e) => {
            error!("Failed to create new employee: {}", e);
            Err(e.into())
        }
    }
}

/// DELETE /{id} - Delete an employee
///
/// Unlike the other endpoints this one answers with a string body on every
/// outcome except the preflight miss, so it shapes its responses directly.
async fn delete_employee_handler(
    State(state): State<Arc<EmployeeState>>,
    Path(id): Path<String>,
) -> (StatusCode, String) {
    if id.trim().is_empty() {
        return (StatusCode::BAD_REQUEST, "Invalid employee id.".to_string());
    }

    // Preflight: the 404-vs-200 distinction comes from this lookup. The
    // window between lookup and delete is accepted; delete is idempotent.
    let existing = match state.store.find_by_id(&id) {
        Ok(existing) => existing,
        Err(e) => {
            error!("Failed to delete employee {}: {}", id, e);
            return delete_failure(&id);
        }
    };
    if existing.is_none() {
        warn!("Employee with id {} doesn't exist.", id);
        return (StatusCode::NOT_FOUND, String::new());
    }

    match state.store.delete_by_id(&id) {
        Ok(true) => (
            StatusCode::OK,
            format!("Successfully deleted employee with id {}", id),
        ),
        Ok(false) => {
            error!("Store refused to delete employee {}", id);
            delete_failure(&id)
        }
        Err(e) => {
            error!("Failed to delete employee {}: {}", id, e);
            delete_failure(&id)
        }
    }
}

fn delete_failure(id: &str) -> (StatusCode, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("Failed to delete employee with id {}", id),
    )
}
