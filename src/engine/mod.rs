// Employee engine
// Storage, link assembly and seed data

//! # Engine Module
//!
//! The engine is the layer between the domain models and the HTTP surface.
//!
//! ## Engine Components
//!
//! ### Storage (`storage` module)
//! - `EmployeeStorage` trait: save (upsert), find by id, find all
//! - `InMemoryStorage`: default backend, ids assigned from a sequence
//!
//! ### Resource Assembler (`assembler` module)
//! - Builds `self` / `employees` links from a collection base URL
//! - Wraps single records and whole collections into HAL envelopes
//!
//! ### Seed Data (`seed` module)
//! - Loads the two demo employees at startup
//!
//! ## Rust Learning Notes:
//!
//! ### Re-exports for API Design
//! The `pub use` statements flatten the hierarchy so callers can write
//! `engine::InMemoryStorage` instead of `engine::storage::InMemoryStorage`.

pub mod assembler;
pub mod seed;
pub mod storage;

pub use assembler::{CollectionBase, EmployeeResourceAssembler};
pub use seed::{load_seed_data, seed_employees};
pub use storage::{EmployeeStorage, InMemoryStorage};
