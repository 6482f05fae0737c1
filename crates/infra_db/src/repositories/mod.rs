//! Repository implementations for domain entities
//!
//! Repositories own the SQL text and bind parameters positionally. Queries
//! are checked at runtime so the crate builds without a live database.

pub mod customer;

pub use customer::CustomerRepository;
