// Seed data loaded at startup

use tracing::info;

use crate::engine::storage::EmployeeStorage;
use crate::models::Employee;
use crate::Result;

/// The demo employees, unsaved, in load order
pub fn seed_employees() -> Vec<Employee> {
    vec![
        Employee::new("Frodo", "Baggins", "ring bearer"),
        Employee::new("Bilbo", "Baggins", "burglar"),
    ]
}

/// Save the demo employees and return them with their assigned ids
///
/// On a fresh `InMemoryStorage` Frodo gets id 1 and Bilbo id 2.
pub async fn load_seed_data(storage: &dyn EmployeeStorage) -> Result<Vec<Employee>> {
    let mut saved = Vec::new();

    for employee in seed_employees() {
        let employee = storage.save(employee).await?;
        info!("🌱 Preloaded {}", employee);
        saved.push(employee);
    }

    Ok(saved)
}
