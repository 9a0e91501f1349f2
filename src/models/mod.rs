// Core domain models for the employee API

//! # Domain Models Module
//!
//! Two kinds of types live here:
//! - the stored record ([`Employee`]) and the body clients send to create or
//!   update one ([`EmployeePayload`]);
//! - the HAL envelopes returned to clients ([`EmployeeResource`],
//!   [`EmployeeCollection`]) and the [`Links`] they carry.
//!
//! ## Rust Learning Notes:
//!
//! ### Module Organization
//! This `mod.rs` file is the entry point of the `models` directory. Each
//! `pub mod` below pulls in the `.rs` file of the same name, and the
//! `pub use` lines flatten the most common types into `crate::models`.

// Employee record and request payload
pub mod employee;

// HAL envelopes and links
pub mod resource;

pub use employee::{Employee, EmployeePayload};

pub use resource::{
    EmbeddedEmployees, EmployeeCollection, EmployeeResource, Link, Links, REL_EMPLOYEES, REL_SELF,
};
