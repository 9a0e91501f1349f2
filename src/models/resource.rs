// HAL resource envelopes - records decorated with hypermedia links

//! # Resource Envelopes
//!
//! This module defines the representation layer that sits between stored
//! records and the JSON sent to clients:
//! - `Link`: A single `{ "href": ... }` pointer
//! - `Links`: An ordered relation → link map, rendered under `_links`
//! - `EmployeeResource`: One employee plus its links
//! - `EmployeeCollection`: Embedded employees plus a collection `self` link
//!
//! Envelopes are built fresh for every response and never stored.
//!
//! ## Wire Format
//!
//! ```json
//! {
//!   "_embedded": {
//!     "employees": [
//!       {
//!         "id": 1,
//!         "firstName": "Frodo",
//!         "lastName": "Baggins",
//!         "role": "ring bearer",
//!         "_links": {
//!           "self": { "href": "http://localhost/employees/1" },
//!           "employees": { "href": "http://localhost/employees" }
//!         }
//!       }
//!     ]
//!   },
//!   "_links": { "self": { "href": "http://localhost/employees" } }
//! }
//! ```
//!
//! ## Rust Learning Notes:
//!
//! ### Custom Serialize
//! `Links` keeps its entries in a `Vec` to preserve insertion order, then
//! implements `Serialize` by hand so the `Vec` is written out as a JSON object.
//!
//! ### Flattening
//! `#[serde(flatten)]` inlines the employee's fields next to `_links` instead
//! of nesting them under a separate key.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::employee::Employee;

/// Relation name for a resource's own URL
pub const REL_SELF: &str = "self";

/// Relation name pointing back at the employee collection
pub const REL_EMPLOYEES: &str = "employees";

/// A single hypermedia link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub href: String,
}

impl Link {
    pub fn new(href: impl Into<String>) -> Self {
        Self { href: href.into() }
    }
}

/// Ordered set of named links
///
/// Relations are unique: inserting a relation that already exists replaces
/// its link but keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Links {
    entries: Vec<(String, Link)>,
}

impl Links {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, rel: impl Into<String>, href: impl Into<String>) -> Self {
        self.insert(rel, href);
        self
    }

    /// Add or replace the link for `rel`
    pub fn insert(&mut self, rel: impl Into<String>, href: impl Into<String>) {
        let rel = rel.into();
        let link = Link::new(href);

        match self.entries.iter_mut().find(|(existing, _)| *existing == rel) {
            Some((_, current)) => *current = link,
            None => self.entries.push((rel, link)),
        }
    }

    pub fn get(&self, rel: &str) -> Option<&Link> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == rel)
            .map(|(_, link)| link)
    }

    /// The `self` link, if one has been added
    pub fn self_link(&self) -> Option<&Link> {
        self.get(REL_SELF)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Links {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (rel, link) in &self.entries {
            map.serialize_entry(rel, link)?;
        }
        map.end()
    }
}

/// One employee rendered with its links
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeResource {
    #[serde(flatten)]
    pub employee: Employee,

    #[serde(rename = "_links")]
    pub links: Links,
}

impl EmployeeResource {
    /// Href of the `self` link, if present
    pub fn self_href(&self) -> Option<&str> {
        self.links.self_link().map(|link| link.href.as_str())
    }
}

/// Holder for the `_embedded` section of a collection
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EmbeddedEmployees {
    pub employees: Vec<EmployeeResource>,
}

/// All employees rendered as a HAL collection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeCollection {
    #[serde(rename = "_embedded")]
    pub embedded: EmbeddedEmployees,

    #[serde(rename = "_links")]
    pub links: Links,
}

impl EmployeeCollection {
    pub fn items(&self) -> &[EmployeeResource] {
        &self.embedded.employees
    }

    /// Number of `self` links in the envelope: one per item plus the collection's own
    pub fn self_link_count(&self) -> usize {
        let item_links = self
            .items()
            .iter()
            .filter(|item| item.links.self_link().is_some())
            .count();
        item_links + usize::from(self.links.self_link().is_some())
    }
}
