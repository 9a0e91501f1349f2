// Storage abstraction for the employee API
// This defines the interface for persisting employee records

//! # Storage Abstraction Layer
//!
//! Handlers never touch a concrete store. They talk to the
//! [`EmployeeStorage`] trait, and the server wires in a backend at startup.
//!
//! ## Storage Architecture
//!
//! The storage layer follows the **Repository Pattern**:
//! - **EmployeeStorage trait**: save, find by id, find all
//! - **InMemoryStorage**: Default implementation for development/testing
//!
//! ## Save Semantics
//!
//! `save` is an upsert keyed by `id`:
//! - a record without an id gets the next id from the sequence;
//! - a record with an id replaces whatever is stored under it, or is created
//!   there if nothing is. No existence check, no partial merge.
//!
//! The returned record always carries its id, so callers never need a second
//! lookup to learn what was assigned.
//!
//! ## Rust Learning Notes:
//!
//! This file demonstrates:
//! - Async traits with the async-trait crate
//! - Interior mutability with `RwLock`
//! - Turning lock poisoning into an error instead of a panic

use std::collections::BTreeMap;
use std::sync::RwLock;

use anyhow::anyhow;
use tracing::debug;

use crate::models::Employee;
use crate::Result;

/// Persistence boundary for employee records
///
/// ## Rust Learning Notes:
///
/// ### Trait Bounds
/// - `Send`: Type can be safely moved between threads
/// - `Sync`: Type can be safely shared between threads via references
/// Both are required to keep the storage in an `Arc<dyn EmployeeStorage>`
/// that axum shares across request tasks.
///
/// ### `Result<Option<T>>`
/// - `Ok(Some(employee))`: Found it
/// - `Ok(None)`: Nothing stored under that id (not an error)
/// - `Err(error)`: The backend itself failed
#[async_trait::async_trait]
pub trait EmployeeStorage: Send + Sync {
    /// Create or replace a record, returning it with its id set
    async fn save(&self, employee: Employee) -> Result<Employee>;

    /// Look up a record by id
    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>>;

    /// All records, in the backend's iteration order
    async fn find_all(&self) -> Result<Vec<Employee>>;
}

#[derive(Debug)]
struct StoreState {
    employees: BTreeMap<i64, Employee>,
    next_id: i64,
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            employees: BTreeMap::new(),
            next_id: 1,
        }
    }
}

/// In-memory storage implementation for development and testing
///
/// Records are kept in a `BTreeMap`, so `find_all` yields them in ascending
/// id order. Ids start at 1. Explicit ids written through `save` push the
/// sequence past them, so a later create never lands on an existing record.
/// A create that would land on one anyway (the sequence ran into `i64::MAX`)
/// fails with a storage error instead.
///
/// ## Limitations
///
/// - **Not persistent**: Data is lost when process restarts
/// - **Not distributed**: Cannot share data across multiple processes
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    /// Records and id sequence behind a single lock
    state: RwLock<StoreState>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub fn len(&self) -> Result<usize> {
        let state = self
            .state
            .read()
            .map_err(|_| anyhow!("employee store lock poisoned"))?;
        Ok(state.employees.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

#[async_trait::async_trait]
impl EmployeeStorage for InMemoryStorage {
    async fn save(&self, mut employee: Employee) -> Result<Employee> {
        let mut state = self
            .state
            .write()
            .map_err(|_| anyhow!("employee store lock poisoned"))?;

        let id = match employee.id {
            Some(id) => {
                // i64::MAX has no successor; the sequence stays where it is
                if id >= state.next_id {
                    if let Some(next) = id.checked_add(1) {
                        state.next_id = next;
                    }
                }
                id
            }
            None => {
                let id = state.next_id;
                if state.employees.contains_key(&id) {
                    return Err(anyhow!("employee id sequence exhausted at {}", id).into());
                }
                state.next_id = id.checked_add(1).unwrap_or(id);
                id
            }
        };

        employee.id = Some(id);
        let replaced = state.employees.insert(id, employee.clone()).is_some();
        debug!(id, replaced, "Saved employee");

        Ok(employee)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>> {
        let state = self
            .state
            .read()
            .map_err(|_| anyhow!("employee store lock poisoned"))?;

        Ok(state.employees.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Employee>> {
        let state = self
            .state
            .read()
            .map_err(|_| anyhow!("employee store lock poisoned"))?;

        Ok(state.employees.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_assigns_sequential_ids() {
        let storage = InMemoryStorage::new();

        let frodo = storage
            .save(Employee::new("Frodo", "Baggins", "ring bearer"))
            .await
            .unwrap();
        let bilbo = storage
            .save(Employee::new("Bilbo", "Baggins", "burglar"))
            .await
            .unwrap();

        assert_eq!(frodo.id, Some(1));
        assert_eq!(bilbo.id, Some(2));
        assert_eq!(storage.len().unwrap(), 2);
    }

    #[tokio::test]
    async fn test_save_with_id_replaces_record() {
        let storage = InMemoryStorage::new();
        storage
            .save(Employee::new("Frodo", "Baggins", "ring bearer"))
            .await
            .unwrap();

        storage
            .save(Employee::with_id(1, "Bilbo", "Baggins", "burglar"))
            .await
            .unwrap();

        let stored = storage.find_by_id(1).await.unwrap().unwrap();
        assert_eq!(stored.first_name, "Bilbo");
        assert_eq!(stored.role, "burglar");
        assert_eq!(storage.len().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_save_with_unknown_id_creates_and_advances_sequence() {
        let storage = InMemoryStorage::new();

        storage
            .save(Employee::with_id(10, "Sam", "Gamgee", "gardener"))
            .await
            .unwrap();
        let next = storage
            .save(Employee::new("Merry", "Brandybuck", "squire"))
            .await
            .unwrap();

        assert!(storage.find_by_id(10).await.unwrap().is_some());
        assert_eq!(next.id, Some(11));
    }

    #[tokio::test]
    async fn test_save_at_max_id_keeps_sequence_usable() {
        let storage = InMemoryStorage::new();

        storage
            .save(Employee::with_id(i64::MAX, "Gollum", "Smeagol", "guide"))
            .await
            .unwrap();
        let next = storage
            .save(Employee::new("Frodo", "Baggins", "ring bearer"))
            .await
            .unwrap();

        assert_eq!(next.id, Some(1));
        assert!(storage.find_by_id(i64::MAX).await.unwrap().is_some());
        assert_eq!(storage.len().unwrap(), 2);
    }

    #[tokio::test]
    async fn test_exhausted_sequence_is_an_error_not_an_overwrite() {
        let storage = InMemoryStorage::new();
        storage
            .save(Employee::with_id(i64::MAX - 1, "Sam", "Gamgee", "gardener"))
            .await
            .unwrap();
        storage
            .save(Employee::with_id(i64::MAX, "Gollum", "Smeagol", "guide"))
            .await
            .unwrap();

        let err = storage
            .save(Employee::new("Frodo", "Baggins", "ring bearer"))
            .await
            .unwrap_err();
        assert!(matches!(err, crate::EmployeeApiError::Storage(_)));

        // The lock is still healthy after the failed save
        let gollum = storage.find_by_id(i64::MAX).await.unwrap().unwrap();
        assert_eq!(gollum.first_name, "Gollum");
    }

    #[tokio::test]
    async fn test_find_missing_returns_none() {
        let storage = InMemoryStorage::new();
        assert!(storage.find_by_id(42).await.unwrap().is_none());
        assert!(storage.is_empty().unwrap());
    }

    #[tokio::test]
    async fn test_find_all_is_ordered_by_id() {
        let storage = InMemoryStorage::new();
        storage
            .save(Employee::with_id(3, "Pippin", "Took", "guard"))
            .await
            .unwrap();
        storage
            .save(Employee::new("Frodo", "Baggins", "ring bearer"))
            .await
            .unwrap();
        storage
            .save(Employee::with_id(1, "Bilbo", "Baggins", "burglar"))
            .await
            .unwrap();

        let ids: Vec<Option<i64>> = storage
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec![Some(1), Some(3), Some(4)]);
    }
}
