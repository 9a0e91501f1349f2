// Employee HAL - Rust Edition
// A small hypermedia-driven REST API for employee records

//! # Employee HAL Library
//!
//! This is the library crate behind the employee server. It exposes a single
//! REST resource, `/employees`, and renders every response as HAL JSON: each
//! employee comes back decorated with navigational links so clients can walk
//! the API instead of building URLs by hand.
//!
//! ## Core Components
//!
//! ### Domain Models
//! - [`Employee`]: The record itself - an identifier plus three strings
//! - [`EmployeeResource`] / [`EmployeeCollection`]: HAL envelopes around records
//! - [`Links`]: Ordered relation → link map rendered under `_links`
//!
//! ### Engine
//! - [`EmployeeStorage`]: Persistence boundary (save, find by id, find all)
//! - [`InMemoryStorage`]: Default storage backend
//! - [`EmployeeResourceAssembler`]: Turns records into HAL envelopes
//! - [`load_seed_data`]: Startup loader for the two demo employees
//!
//! ### API
//! - [`EmployeeApiServer`] / [`EmployeeApiServerBuilder`]: Router + server wiring
//! - [`Settings`]: Layered configuration (defaults, file, environment, CLI)
//!
//! ## Request Flow
//!
//! ```text
//! HTTP request
//!   ↓ axum router
//! Request handler
//!   ↓ storage call
//! Employee record(s)
//!   ↓ resource assembler
//! HAL envelope
//!   ↓ serialized as application/hal+json
//! HTTP response
//! ```
//!
//! ## Rust Learning Notes:
//!
//! ### Re-exports
//! `pub use` statements create shortcuts so users don't need to know the internal
//! module structure. Instead of `use employee_hal::models::employee::Employee`,
//! users can write `use employee_hal::Employee`.

// Core domain models
pub mod models;

// Storage, link assembly and seed data
pub mod engine;

// HTTP surface: handlers, router and server builder
pub mod api;

// Layered configuration for the server binary
pub mod settings;

pub use models::{
    Employee,           // The employee record
    EmployeeCollection, // HAL collection envelope
    EmployeeResource,   // HAL single-resource envelope
    Link,               // A single hypermedia link
    Links,              // Ordered relation → link map
};

pub use engine::{
    assembler::{CollectionBase, EmployeeResourceAssembler},
    seed::load_seed_data,
    storage::{EmployeeStorage, InMemoryStorage},
};

pub use api::{
    create_default_server, EmployeeApiConfig, EmployeeApiServer, EmployeeApiServerBuilder,
};

pub use settings::{Args, Settings};

// Core error types
use thiserror::Error;

/// Custom error types for employee API operations
///
/// ## Rust Learning Notes:
///
/// ### The `thiserror` Crate
/// - `#[derive(Error)]` implements the `std::error::Error` trait
/// - `#[error("...")]` provides human-readable error messages
/// - `#[from]` enables automatic conversion from other error types
///
/// The HTTP mapping of each variant lives in `api::handlers`, next to the
/// handlers that produce them.
#[derive(Error, Debug)]
pub enum EmployeeApiError {
    /// No employee is stored under the requested identifier
    #[error("Employee not found: {id}")]
    NotFound { id: i64 },

    /// A computed link could not be turned into an absolute URI
    #[error("{message}")]
    MalformedLink { message: String },

    /// Storage backend failures
    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),

    /// Configuration could not be loaded or deserialized
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Type alias for Results that use our custom error type
pub type Result<T> = std::result::Result<T, EmployeeApiError>;
