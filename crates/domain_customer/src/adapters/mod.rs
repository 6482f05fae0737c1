//! Adapters for the customer domain
//!
//! The SQL adapter lives in `infra_db`; this module holds the adapter that
//! needs nothing beyond the process itself.
//!
//! - **InMemoryCustomerDao**: instance-owned list for demos and tests
//! - **MockCustomerDao**: scripted double (re-exported from the ports module)

pub mod in_memory;

pub use in_memory::InMemoryCustomerDao;
