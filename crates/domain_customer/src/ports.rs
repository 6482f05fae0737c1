//! Customer Domain Ports
//!
//! This module defines the data access port for the customer domain. The
//! service depends only on [`CustomerDao`]; which adapter sits behind it is
//! decided once at startup.
//!
//! # Adapters
//!
//! - **SQL Adapter**: PostgreSQL via sqlx (infra_db)
//! - **In-Memory Adapter**: instance-owned list for demos and tests
//!   ([`crate::adapters::InMemoryCustomerDao`])
//! - **Mock Adapter**: scripted answers and a call log for service tests
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_customer::{CustomerDao, CustomerService};
//! use std::sync::Arc;
//!
//! let dao: Arc<dyn CustomerDao> = match config.customer_store {
//!     CustomerStore::Postgres => Arc::new(PostgresCustomerDao::new(pool)),
//!     CustomerStore::Memory => Arc::new(InMemoryCustomerDao::new()),
//! };
//! let service = CustomerService::new(dao);
//! ```

use async_trait::async_trait;

use core_kernel::{CustomerId, DomainPort, HealthCheckable, PortError};

use crate::customer::{Customer, CustomerUpdate};

/// Data access port for customer records
///
/// Adapters perform no validation. Absence is reported as `None` or `false`,
/// never as an error; every failure is a [`PortError`].
#[async_trait]
pub trait CustomerDao: DomainPort + HealthCheckable {
    /// Lists every customer in the store's natural scan order
    async fn select_all_customers(&self) -> Result<Vec<Customer>, PortError>;

    /// Looks up one customer
    ///
    /// # Returns
    ///
    /// The customer if found, or `None`
    async fn select_customer_by_id(&self, id: CustomerId) -> Result<Option<Customer>, PortError>;

    /// Persists a new customer; the store assigns its id
    ///
    /// A duplicate email that reaches the store surfaces as
    /// `PortError::Conflict`.
    async fn insert_customer(&self, customer: Customer) -> Result<(), PortError>;

    /// Removes a customer; a missing id is a no-op
    async fn delete_person_by_id(&self, id: CustomerId) -> Result<(), PortError>;

    /// Writes exactly the changed fields of one customer
    async fn update_person(&self, update: CustomerUpdate) -> Result<(), PortError>;

    /// Case-sensitive email probe
    async fn exists_person_with_email(&self, email: &str) -> Result<bool, PortError>;

    /// Id probe
    async fn exists_person_with_id(&self, id: CustomerId) -> Result<bool, PortError>;
}

/// Mock implementation for testing
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::{BTreeMap, HashSet};
    use std::sync::Arc;
    use tokio::sync::RwLock;

    use core_kernel::HealthCheckResult;

    /// One call received by [`MockCustomerDao`]
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum DaoCall {
        SelectAll,
        SelectById(CustomerId),
        Insert(Customer),
        Delete(CustomerId),
        Update(CustomerUpdate),
        ExistsEmail(String),
        ExistsId(CustomerId),
    }

    /// Scripted data access double
    ///
    /// Reads answer from the scripted customers and taken emails. Writes are
    /// only recorded; they do not change what later reads return.
    #[derive(Debug, Default, Clone)]
    pub struct MockCustomerDao {
        customers: Arc<RwLock<BTreeMap<CustomerId, Customer>>>,
        taken_emails: Arc<RwLock<HashSet<String>>>,
        calls: Arc<RwLock<Vec<DaoCall>>>,
        failure: Arc<RwLock<Option<String>>>,
    }

    impl MockCustomerDao {
        /// Creates an empty mock
        pub fn new() -> Self {
            Self::default()
        }

        /// Scripts a customer for id lookups and listings
        ///
        /// The customer's email is not marked as taken.
        pub async fn with_customer(self, customer: Customer) -> Self {
            if let Some(id) = customer.id {
                self.customers.write().await.insert(id, customer);
            }
            self
        }

        /// Scripts `exists_person_with_email` to answer true for `email`
        pub async fn with_taken_email(self, email: impl Into<String>) -> Self {
            self.taken_emails.write().await.insert(email.into());
            self
        }

        /// Makes every subsequent call fail with a connection error
        pub async fn failing(self, message: impl Into<String>) -> Self {
            *self.failure.write().await = Some(message.into());
            self
        }

        /// Returns every call received so far, oldest first
        pub async fn calls(&self) -> Vec<DaoCall> {
            self.calls.read().await.clone()
        }

        /// Returns the customers passed to `insert_customer`
        pub async fn inserted(&self) -> Vec<Customer> {
            self.calls
                .read()
                .await
                .iter()
                .filter_map(|c| match c {
                    DaoCall::Insert(customer) => Some(customer.clone()),
                    _ => None,
                })
                .collect()
        }

        /// Returns the updates passed to `update_person`
        pub async fn updates(&self) -> Vec<CustomerUpdate> {
            self.calls
                .read()
                .await
                .iter()
                .filter_map(|c| match c {
                    DaoCall::Update(update) => Some(update.clone()),
                    _ => None,
                })
                .collect()
        }

        /// True when no write call was received
        pub async fn no_writes(&self) -> bool {
            !self.calls.read().await.iter().any(|c| {
                matches!(c, DaoCall::Insert(_) | DaoCall::Delete(_) | DaoCall::Update(_))
            })
        }

        async fn record(&self, call: DaoCall) -> Result<(), PortError> {
            self.calls.write().await.push(call);
            match self.failure.read().await.as_ref() {
                Some(message) => Err(PortError::connection(message.clone())),
                None => Ok(()),
            }
        }
    }

    impl DomainPort for MockCustomerDao {}

    #[async_trait]
    impl HealthCheckable for MockCustomerDao {
        async fn health_check(&self) -> HealthCheckResult {
            match self.failure.read().await.as_ref() {
                Some(message) => HealthCheckResult::unhealthy("mock-customer-dao", 0, message.clone()),
                None => HealthCheckResult::healthy("mock-customer-dao", 0),
            }
        }
    }

    #[async_trait]
    impl CustomerDao for MockCustomerDao {
        async fn select_all_customers(&self) -> Result<Vec<Customer>, PortError> {
            self.record(DaoCall::SelectAll).await?;
            Ok(self.customers.read().await.values().cloned().collect())
        }

        async fn select_customer_by_id(&self, id: CustomerId) -> Result<Option<Customer>, PortError> {
            self.record(DaoCall::SelectById(id)).await?;
            Ok(self.customers.read().await.get(&id).cloned())
        }

        async fn insert_customer(&self, customer: Customer) -> Result<(), PortError> {
            self.record(DaoCall::Insert(customer)).await
        }

        async fn delete_person_by_id(&self, id: CustomerId) -> Result<(), PortError> {
            self.record(DaoCall::Delete(id)).await
        }

        async fn update_person(&self, update: CustomerUpdate) -> Result<(), PortError> {
            self.record(DaoCall::Update(update)).await
        }

        async fn exists_person_with_email(&self, email: &str) -> Result<bool, PortError> {
            self.record(DaoCall::ExistsEmail(email.to_string())).await?;
            Ok(self.taken_emails.read().await.contains(email))
        }

        async fn exists_person_with_id(&self, id: CustomerId) -> Result<bool, PortError> {
            self.record(DaoCall::ExistsId(id)).await?;
            Ok(self.customers.read().await.contains_key(&id))
        }
    }

}
