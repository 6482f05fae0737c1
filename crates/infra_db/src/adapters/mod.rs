//! Domain Adapters
//!
//! Adapter implementations connecting domain ports to PostgreSQL. Each
//! adapter implements the port trait, delegates SQL to a repository, and
//! translates database errors into port errors.

pub mod customer;

pub use customer::PostgresCustomerDao;
