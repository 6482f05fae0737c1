//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! customer directory test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built customers and request bodies
//! - `builders`: Builder patterns for test data construction
//! - `database`: PostgreSQL container management
//! - `assertions`: Assertion helpers for customer values
//! - `generators`: Property-based and faker-backed data generators

pub mod fixtures;
pub mod builders;
pub mod database;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use database::*;
pub use assertions::*;
pub use generators::*;
