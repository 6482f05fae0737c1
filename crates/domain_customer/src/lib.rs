//! Customer Directory Domain
//!
//! This crate holds the customer model, the data access port with its
//! in-memory adapter, and the service that enforces the directory's rules.
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use domain_customer::{CustomerDto, CustomerService, InMemoryCustomerDao};
//!
//! # tokio_test_block(async {
//! let service = CustomerService::new(Arc::new(InMemoryCustomerDao::new()));
//! service
//!     .add_customer(CustomerDto::new("Alex", "alex@gmail.com", 21, None))
//!     .await
//!     .unwrap();
//! assert_eq!(service.get_all_customers().await.unwrap().len(), 1);
//! # });
//! # fn tokio_test_block<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Runtime::new().unwrap().block_on(f)
//! # }
//! ```

pub mod customer;
pub mod error;
pub mod validation;
pub mod ports;
pub mod adapters;
pub mod service;

pub use customer::{Customer, CustomerDto, CustomerUpdate, Gender, UnknownGender};
pub use error::{CustomerError, CustomerErrorKind, CustomerResult};
pub use validation::{CustomerValidator, ValidationResult};
pub use ports::CustomerDao;
#[cfg(any(test, feature = "mock"))]
pub use ports::mock::{DaoCall, MockCustomerDao};
pub use adapters::InMemoryCustomerDao;
pub use service::CustomerService;
