//! Infrastructure Database Layer
//!
//! PostgreSQL persistence for the customer directory using SQLx: pool
//! management, embedded migrations, the customer repository, and the adapter
//! that exposes it through the `CustomerDao` port.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, run_migrations, DatabaseConfig, PostgresCustomerDao};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/customer")).await?;
//! run_migrations(&pool).await?;
//! let dao = PostgresCustomerDao::new(pool);
//! ```

pub mod pool;
pub mod error;
pub mod row_mapper;
pub mod repositories;
pub mod adapters;

pub use pool::{DatabasePool, create_pool, create_pool_from_url, run_migrations, DatabaseConfig};
pub use error::DatabaseError;
pub use row_mapper::{CustomerRow, CustomerRowMapper};
pub use repositories::CustomerRepository;
pub use adapters::PostgresCustomerDao;
