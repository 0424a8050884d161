//! # Employee Repository
//!
//! Storage operations for employees, abstracted behind a trait so handlers
//! can be exercised against doubles in tests.

use std::collections::HashMap;
use std::sync::RwLock;

use tracing::warn;

use super::employee::{Employee, EmployeeCreationInput};
use super::errors::{StoreError, StoreResult};

/// Employee repository trait
///
/// Every operation acquires the underlying lock exactly once for its whole
/// duration, so each call observes a consistent snapshot of the store.
pub trait EmployeeRepository: Send + Sync {
    /// Return a snapshot of all employees. Order is unspecified.
    fn list_all(&self) -> StoreResult<Vec<Employee>>;

    /// Find the employee with exactly this id
    fn find_by_id(&self, id: &str) -> StoreResult<Option<Employee>>;

    /// Return every employee whose name contains `substring`
    /// (case-sensitive, contiguous). Order is unspecified.
    fn search_by_name(&self, substring: &str) -> StoreResult<Vec<Employee>>;

    /// Return the maximum salary, or `None` when the store is empty
    fn max_salary(&self) -> StoreResult<Option<i64>>;

    /// Return up to `n` names sorted by salary descending.
    ///
    /// Employees with equal salaries may appear in any order.
    fn top_n_names_by_salary(&self, n: usize) -> StoreResult<Vec<String>>;

    /// Construct a new employee with a fresh id, insert it, and return it
    fn create(&self, input: EmployeeCreationInput) -> StoreResult<Employee>;

    /// Remove the mapping if present.
    ///
    /// Returns `Ok(true)` even when no such id exists; deletion is
    /// idempotent. `Ok(false)` signals a failure to mutate state.
    fn delete_by_id(&self, id: &str) -> StoreResult<bool>;
}

/// In-memory employee repository
///
/// The single shared mutable state of the process. An `RwLock` around the
/// map keeps concurrent handler invocations safe.
#[derive(Debug, Default)]
pub struct InMemoryEmployeeRepository {
    employees: RwLock<HashMap<String, Employee>>,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EmployeeRepository for InMemoryEmployeeRepository {
    fn list_all(&self) -> StoreResult<Vec<Employee>> {
        let employees = self.employees.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(employees.values().cloned().collect())
    }

    fn find_by_id(&self, id: &str) -> StoreResult<Option<Employee>> {
        let employees = self.employees.read().map_err(|_| StoreError::LockPoisoned)?;
        let found = employees.get(id).cloned();
        if found.is_none() {
            warn!("No employee found with id {}", id);
        }
        Ok(found)
    }

    fn search_by_name(&self, substring: &str) -> StoreResult<Vec<Employee>> {
        let employees = self.employees.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(employees
            .values()
            .filter(|e| e.name.contains(substring))
            .cloned()
            .collect())
    }

    fn max_salary(&self) -> StoreResult<Option<i64>> {
        let employees = self.employees.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(employees.values().map(|e| e.salary).max())
    }

    fn top_n_names_by_salary(&self, n: usize) -> StoreResult<Vec<String>> {
        let employees = self.employees.read().map_err(|_| StoreError::LockPoisoned)?;
        let mut ranked: Vec<(String, i64)> = employees
            .values()
            .map(|e| (e.name.clone(), e.salary))
            .collect();
        ranked.sort_unstable_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        Ok(ranked.into_iter().map(|(name, _)| name).collect())
    }

    fn create(&self, input: EmployeeCreationInput) -> StoreResult<Employee> {
        let employee = Employee::from_creation_input(input);
        let mut employees = self.employees.write().map_err(|_| StoreError::LockPoisoned)?;
        employees.insert(employee.id.clone(), employee.clone());
        Ok(employee)
    }

    fn delete_by_id(&self, id: &str) -> StoreResult<bool> {
        let mut employees = self.employees.write().map_err(|_| StoreError::LockPoisoned)?;
        if !employees.contains_key(id) {
            warn!("No employee with id {} exists. Skipping delete.", id);
            return Ok(true);
        }
        Ok(employees.remove(id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creation_input(name: &str, salary: i64) -> EmployeeCreationInput {
        EmployeeCreationInput {
            name: name.to_string(),
            salary,
            age: 30,
            title: "Manager".to_string(),
            email: format!("{}@mail.com", name),
        }
    }

    fn store_with(entries: &[(&str, i64)]) -> InMemoryEmployeeRepository {
        let store = InMemoryEmployeeRepository::new();
        for (name, salary) in entries {
            store.create(creation_input(name, *salary)).unwrap();
        }
        store
    }

    #[test]
    fn test_list_all_returns_all_employees() {
        let store = store_with(&[("Alice", 50000), ("Bob", 60000)]);
        let result = store.list_all().unwrap();
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_list_all_empty_store_returns_empty_list() {
        let store = InMemoryEmployeeRepository::new();
        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_search_by_name_returns_matching_employees() {
        let store = store_with(&[("Alice", 50000), ("Alicia", 60000), ("Bob", 70000)]);
        let result = store.search_by_name("Ali").unwrap();
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|e| e.name.contains("Ali")));
    }

    #[test]
    fn test_search_by_name_is_case_sensitive() {
        let store = store_with(&[("Alice", 50000)]);
        assert!(store.search_by_name("ali").unwrap().is_empty());
    }

    #[test]
    fn test_search_by_name_no_matches_returns_empty_list() {
        let store = store_with(&[("Alice", 50000)]);
        assert!(store.search_by_name("ZZZ").unwrap().is_empty());
    }

    #[test]
    fn test_find_by_id_existing_id_returns_employee() {
        let store = InMemoryEmployeeRepository::new();
        let created = store.create(creation_input("Alice", 50000)).unwrap();
        let found = store.find_by_id(&created.id).unwrap();
        assert_eq!(found, Some(created));
    }

    #[test]
    fn test_find_by_id_missing_id_returns_none() {
        let store = InMemoryEmployeeRepository::new();
        assert_eq!(store.find_by_id("999").unwrap(), None);
    }

    #[test]
    fn test_max_salary_returns_max() {
        let store = store_with(&[("Alice", 50000), ("Bob", 90000), ("Charlie", 70000)]);
        assert_eq!(store.max_salary().unwrap(), Some(90000));
    }

    #[test]
    fn test_max_salary_empty_store_returns_none() {
        let store = InMemoryEmployeeRepository::new();
        assert_eq!(store.max_salary().unwrap(), None);
    }

    #[test]
    fn test_max_salary_matches_list_all() {
        let store = store_with(&[("Alice", 50000), ("Bob", 90000), ("Charlie", 70000)]);
        let from_list = store.list_all().unwrap().iter().map(|e| e.salary).max();
        assert_eq!(store.max_salary().unwrap(), from_list);
    }

    #[test]
    fn test_top_n_names_by_salary_returns_sorted_top_ten() {
        let store = InMemoryEmployeeRepository::new();
        for i in 1..=15 {
            store
                .create(creation_input(&format!("Emp{}", i), i * 1000))
                .unwrap();
        }
        let result = store.top_n_names_by_salary(10).unwrap();
        assert_eq!(result.len(), 10);
        assert_eq!(result[0], "Emp15");
        assert_eq!(result[9], "Emp6");
    }

    #[test]
    fn test_top_n_names_by_salary_fewer_than_n_returns_all_sorted() {
        let store = store_with(&[("Alice", 50000), ("Bob", 60000)]);
        let result = store.top_n_names_by_salary(10).unwrap();
        assert_eq!(result, vec!["Bob".to_string(), "Alice".to_string()]);
    }

    #[test]
    fn test_top_n_salaries_are_weakly_decreasing() {
        let store = store_with(&[
            ("A", 300),
            ("B", 100),
            ("C", 300),
            ("D", 200),
            ("E", 100),
        ]);
        let names = store.top_n_names_by_salary(10).unwrap();
        let by_name: HashMap<String, i64> = store
            .list_all()
            .unwrap()
            .into_iter()
            .map(|e| (e.name, e.salary))
            .collect();
        let salaries: Vec<i64> = names.iter().map(|n| by_name[n]).collect();
        assert!(salaries.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_create_stores_and_returns_employee() {
        let store = InMemoryEmployeeRepository::new();
        let created = store.create(creation_input("Alice", 50000)).unwrap();
        assert_eq!(created.name, "Alice");
        assert_eq!(store.find_by_id(&created.id).unwrap(), Some(created));
    }

    #[test]
    fn test_create_assigns_unique_ids() {
        let store = InMemoryEmployeeRepository::new();
        let a = store.create(creation_input("Alice", 50000)).unwrap();
        let b = store.create(creation_input("Alice", 50000)).unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(store.list_all().unwrap().len(), 2);
    }

    #[test]
    fn test_delete_by_id_removes_employee() {
        let store = InMemoryEmployeeRepository::new();
        let created = store.create(creation_input("Alice", 50000)).unwrap();
        assert!(store.delete_by_id(&created.id).unwrap());
        assert_eq!(store.find_by_id(&created.id).unwrap(), None);
    }

    #[test]
    fn test_delete_by_id_missing_id_returns_true() {
        let store = InMemoryEmployeeRepository::new();
        assert!(store.delete_by_id("999").unwrap());
    }

    #[test]
    fn test_delete_by_id_is_idempotent() {
        let store = InMemoryEmployeeRepository::new();
        let created = store.create(creation_input("Alice", 50000)).unwrap();
        assert!(store.delete_by_id(&created.id).unwrap());
        assert!(store.delete_by_id(&created.id).unwrap());
        assert_eq!(store.find_by_id(&created.id).unwrap(), None);
    }
}
