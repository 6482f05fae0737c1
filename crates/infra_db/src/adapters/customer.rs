//! PostgreSQL Customer Adapter
//!
//! Implements the `CustomerDao` port on top of [`CustomerRepository`].
//!
//! # Error Handling
//!
//! Database errors are translated to `PortError` variants:
//! - `DatabaseError::DuplicateEntry` -> `PortError::Conflict`
//! - connection and pool failures -> `PortError::Connection`
//! - undecodable rows -> `PortError::Transformation`
//! - Other errors -> `PortError::Internal`
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::adapters::PostgresCustomerDao;
//! use domain_customer::CustomerDao;
//! use std::sync::Arc;
//!
//! let dao: Arc<dyn CustomerDao> = Arc::new(PostgresCustomerDao::new(pool));
//! let customers = dao.select_all_customers().await?;
//! ```

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use core_kernel::{CustomerId, DomainPort, HealthCheckResult, HealthCheckable, PortError};
use domain_customer::{Customer, CustomerDao, CustomerUpdate};

use crate::repositories::CustomerRepository;

const ADAPTER_ID: &str = "postgres-customer-dao";

/// PostgreSQL-backed implementation of the CustomerDao port
#[derive(Debug, Clone)]
pub struct PostgresCustomerDao {
    repository: CustomerRepository,
}

impl PostgresCustomerDao {
    /// Creates a new PostgreSQL customer adapter
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CustomerRepository::new(pool),
        }
    }
}

impl DomainPort for PostgresCustomerDao {}

#[async_trait]
impl HealthCheckable for PostgresCustomerDao {
    /// Runs `SELECT 1` against the pool
    async fn health_check(&self) -> HealthCheckResult {
        let start = std::time::Instant::now();
        let result = self.repository.ping().await;
        let latency_ms = start.elapsed().as_millis() as u64;

        match result {
            Ok(()) => HealthCheckResult::healthy(ADAPTER_ID, latency_ms),
            Err(e) => HealthCheckResult::unhealthy(ADAPTER_ID, latency_ms, format!("Database error: {}", e)),
        }
    }
}

#[async_trait]
impl CustomerDao for PostgresCustomerDao {
    #[instrument(skip(self))]
    async fn select_all_customers(&self) -> Result<Vec<Customer>, PortError> {
        let customers = self.repository.find_all().await?;
        debug!(count = customers.len(), "Selected customers");
        Ok(customers)
    }

    #[instrument(skip(self), fields(customer_id = %id))]
    async fn select_customer_by_id(&self, id: CustomerId) -> Result<Option<Customer>, PortError> {
        Ok(self.repository.find_by_id(id).await?)
    }

    #[instrument(skip(self, customer))]
    async fn insert_customer(&self, customer: Customer) -> Result<(), PortError> {
        self.repository.insert(&customer).await?;
        debug!("Inserted customer");
        Ok(())
    }

    #[instrument(skip(self), fields(customer_id = %id))]
    async fn delete_person_by_id(&self, id: CustomerId) -> Result<(), PortError> {
        let removed = self.repository.delete_by_id(id).await?;
        debug!(removed, "Deleted customer");
        Ok(())
    }

    #[instrument(skip(self, update), fields(customer_id = %update.id, columns = ?update.changed_fields()))]
    async fn update_person(&self, update: CustomerUpdate) -> Result<(), PortError> {
        self.repository.update(&update).await?;
        Ok(())
    }

    #[instrument(skip(self, email))]
    async fn exists_person_with_email(&self, email: &str) -> Result<bool, PortError> {
        Ok(self.repository.count_by_email(email).await? > 0)
    }

    #[instrument(skip(self), fields(customer_id = %id))]
    async fn exists_person_with_id(&self, id: CustomerId) -> Result<bool, PortError> {
        Ok(self.repository.count_by_id(id).await? > 0)
    }
}
