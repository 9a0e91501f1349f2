// Resource assembler - turns stored employees into HAL envelopes

//! # Resource Assembler
//!
//! The assembler decorates raw [`Employee`] records with navigational links.
//! Links are plain string templates over a [`CollectionBase`]:
//!
//! ```text
//! self      = <base>/<id>
//! employees = <base>
//! ```
//!
//! where `<base>` is an absolute collection URL such as
//! `http://localhost/employees`.
//!
//! Assembly is pure: no I/O, no caching, one pass per call. The only failure
//! is a record without an id, for which no `self` link exists.
//!
//! ## Rust Learning Notes:
//!
//! ### Newtypes
//! `CollectionBase` wraps a `String` so a base URL can't be confused with any
//! other string argument, and so normalisation (trimming the trailing `/`)
//! happens exactly once, in the constructor.

use crate::models::{
    EmbeddedEmployees, Employee, EmployeeCollection, EmployeeResource, Links, REL_EMPLOYEES,
    REL_SELF,
};
use crate::{EmployeeApiError, Result};

/// Path of the employee collection, relative to the server root
pub const COLLECTION_PATH: &str = "/employees";

/// Host used for links when a request carries no `Host` header
pub const DEFAULT_HOST: &str = "localhost";

/// Absolute URL of the employee collection, without a trailing slash
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionBase(String);

impl CollectionBase {
    /// Wrap an already absolute collection URL
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self(base.trim_end_matches('/').to_string())
    }

    /// Collection URL under a configured external root, e.g. `https://api.example.com`
    pub fn from_external_url(root: &str) -> Self {
        Self::new(format!("{}{}", root.trim_end_matches('/'), COLLECTION_PATH))
    }

    /// Collection URL derived from the request's `Host` header
    pub fn from_host(host: Option<&str>) -> Self {
        let host = host.unwrap_or(DEFAULT_HOST);
        Self::new(format!("http://{}{}", host, COLLECTION_PATH))
    }

    /// Pick the configured external root if there is one, else the request host
    pub fn resolve(external_url: Option<&str>, host: Option<&str>) -> Self {
        match external_url {
            Some(root) => Self::from_external_url(root),
            None => Self::from_host(host),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Builds HAL envelopes for employees
#[derive(Debug, Clone)]
pub struct EmployeeResourceAssembler {
    base: CollectionBase,
}

impl EmployeeResourceAssembler {
    pub fn new(base: CollectionBase) -> Self {
        Self { base }
    }

    /// Link to the collection itself
    pub fn collection_link(&self) -> String {
        self.base.as_str().to_string()
    }

    /// Link to a single employee
    pub fn item_link(&self, id: i64) -> String {
        format!("{}/{}", self.base.as_str(), id)
    }

    /// Wrap one saved employee with `self` and `employees` links
    pub fn to_resource(&self, employee: &Employee) -> Result<EmployeeResource> {
        let id = employee.id.ok_or_else(|| EmployeeApiError::MalformedLink {
            message: format!("Unable to link {}: no identifier assigned", employee),
        })?;

        let links = Links::new()
            .with(REL_SELF, self.item_link(id))
            .with(REL_EMPLOYEES, self.collection_link());

        Ok(EmployeeResource {
            employee: employee.clone(),
            links,
        })
    }

    /// Wrap every employee, in order, and add the collection `self` link
    pub fn to_collection_resource(&self, employees: Vec<Employee>) -> Result<EmployeeCollection> {
        let employees = employees
            .iter()
            .map(|employee| self.to_resource(employee))
            .collect::<Result<Vec<_>>>()?;

        Ok(EmployeeCollection {
            embedded: EmbeddedEmployees { employees },
            links: Links::new().with(REL_SELF, self.collection_link()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assembler() -> EmployeeResourceAssembler {
        EmployeeResourceAssembler::new(CollectionBase::new("http://localhost/employees"))
    }

    #[test]
    fn test_collection_base_resolution() {
        assert_eq!(
            CollectionBase::from_host(None).as_str(),
            "http://localhost/employees"
        );
        assert_eq!(
            CollectionBase::from_host(Some("example.com:8080")).as_str(),
            "http://example.com:8080/employees"
        );
        assert_eq!(
            CollectionBase::resolve(Some("https://api.example.com/"), Some("ignored")).as_str(),
            "https://api.example.com/employees"
        );
        assert_eq!(
            CollectionBase::new("http://localhost/employees/").as_str(),
            "http://localhost/employees"
        );
    }

    #[test]
    fn test_to_resource_builds_self_and_collection_links() {
        let employee = Employee::with_id(7, "Frodo", "Baggins", "ring bearer");
        let resource = assembler().to_resource(&employee).unwrap();

        let self_href = &resource.links.get(REL_SELF).unwrap().href;
        assert!(self_href.ends_with("/7"));
        assert_eq!(self_href, "http://localhost/employees/7");
        assert_eq!(
            resource.links.get(REL_EMPLOYEES).unwrap().href,
            "http://localhost/employees"
        );
        assert_eq!(resource.employee, employee);
    }

    #[test]
    fn test_to_resource_rejects_unsaved_employee() {
        let unsaved = Employee::new("Sam", "Gamgee", "gardener");
        let err = assembler().to_resource(&unsaved).unwrap_err();
        assert!(matches!(err, EmployeeApiError::MalformedLink { .. }));
    }

    #[test]
    fn test_collection_preserves_order_and_counts_links() {
        let employees = vec![
            Employee::with_id(2, "Bilbo", "Baggins", "burglar"),
            Employee::with_id(1, "Frodo", "Baggins", "ring bearer"),
        ];

        let collection = assembler().to_collection_resource(employees).unwrap();

        let ids: Vec<Option<i64>> = collection.items().iter().map(|r| r.employee.id).collect();
        assert_eq!(ids, vec![Some(2), Some(1)]);
        assert_eq!(collection.self_link_count(), collection.items().len() + 1);
        assert!(collection
            .items()
            .iter()
            .all(|item| item.links.get(REL_EMPLOYEES).is_some()));
        assert_eq!(
            collection.links.self_link().unwrap().href,
            "http://localhost/employees"
        );
    }

    #[test]
    fn test_empty_collection_has_only_collection_link() {
        let collection = assembler().to_collection_resource(Vec::new()).unwrap();
        assert!(collection.items().is_empty());
        assert_eq!(collection.links.len(), 1);
    }
}
