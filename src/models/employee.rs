// Employee domain model - the record exposed by the API

//! # Employee Model
//!
//! An [`Employee`] is a plain record: an identifier assigned by storage plus
//! three free-form strings. There is deliberately no validation here; empty
//! names and odd roles are stored exactly as received.
//!
//! ## Rust Learning Notes:
//!
//! ### Serde Renaming
//! `#[serde(rename_all = "camelCase")]` maps `first_name` to `firstName` on
//! the wire, so Rust code keeps snake_case while JSON clients see camelCase.
//!
//! ### Option for "not yet assigned"
//! `id: Option<i64>` is `None` until the record is saved for the first time.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A single employee record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Identifier assigned by storage on first save
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub first_name: String,
    pub last_name: String,
    pub role: String,
}

impl Employee {
    /// Create an unsaved employee (no identifier yet)
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            role: role.into(),
        }
    }

    /// Create an employee that already carries an identifier
    pub fn with_id(
        id: i64,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(id),
            ..Self::new(first_name, last_name, role)
        }
    }
}

/// Renders as `Employee(id=1, firstName=Frodo, lastName=Baggins, role=ring bearer)`.
///
/// This is the form used in 400 responses, so operators can tell which
/// record a failed link belonged to.
impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = match self.id {
            Some(id) => id.to_string(),
            None => "null".to_string(),
        };
        write!(
            f,
            "Employee(id={}, firstName={}, lastName={}, role={})",
            id, self.first_name, self.last_name, self.role
        )
    }
}

/// Request body accepted by create and update
///
/// Any `id` sent by the client is ignored: create lets storage pick one and
/// update takes it from the path. Missing or `null` fields are stored as
/// empty strings; the body is not validated beyond being JSON.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePayload {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub first_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub last_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub role: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl EmployeePayload {
    /// Turn the payload into a record, optionally pinned to an identifier
    pub fn into_employee(self, id: Option<i64>) -> Employee {
        Employee {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            role: self.role,
        }
    }
}
