//! In-memory customer store
//!
//! An instance-owned, insertion-ordered list behind a tokio `RwLock`: reads
//! share the lock, writes take it exclusively. Intended for demos and tests.

use async_trait::async_trait;
use std::time::Instant;
use tokio::sync::RwLock;
use tracing::debug;

use core_kernel::{CustomerId, DomainPort, HealthCheckResult, HealthCheckable, PortError};

use crate::customer::{Customer, CustomerUpdate};
use crate::ports::CustomerDao;

const ADAPTER_ID: &str = "in-memory-customer-dao";

/// Customer store held entirely in process memory
#[derive(Debug, Default)]
pub struct InMemoryCustomerDao {
    customers: RwLock<Vec<Customer>>,
}

impl InMemoryCustomerDao {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given customers, in order
    pub fn with_customers(customers: Vec<Customer>) -> Self {
        Self {
            customers: RwLock::new(customers),
        }
    }

    /// Creates a store holding the two demo customers (ids 1 and 2)
    pub fn with_demo_customers() -> Self {
        Self::with_customers(vec![
            Customer::new("Alex", "alex@gmail.com", 21, None).with_id(CustomerId::new(1)),
            Customer::new("Jamila", "jamila@gmail.com", 19, None).with_id(CustomerId::new(2)),
        ])
    }

    /// Number of stored customers
    pub async fn len(&self) -> usize {
        self.customers.read().await.len()
    }

    /// True when the store holds no customers
    pub async fn is_empty(&self) -> bool {
        self.customers.read().await.is_empty()
    }

    fn next_id(customers: &[Customer]) -> Result<CustomerId, PortError> {
        match customers.iter().filter_map(|c| c.id).max() {
            Some(max) => max
                .next()
                .ok_or_else(|| PortError::internal("customer id sequence exhausted")),
            None => Ok(CustomerId::new(1)),
        }
    }
}

impl DomainPort for InMemoryCustomerDao {}

#[async_trait]
impl HealthCheckable for InMemoryCustomerDao {
    async fn health_check(&self) -> HealthCheckResult {
        let start = Instant::now();
        let _guard = self.customers.read().await;
        HealthCheckResult::healthy(ADAPTER_ID, start.elapsed().as_millis() as u64)
    }
}

#[async_trait]
impl CustomerDao for InMemoryCustomerDao {
    async fn select_all_customers(&self) -> Result<Vec<Customer>, PortError> {
        Ok(self.customers.read().await.clone())
    }

    async fn select_customer_by_id(&self, id: CustomerId) -> Result<Option<Customer>, PortError> {
        Ok(self
            .customers
            .read()
            .await
            .iter()
            .find(|c| c.id == Some(id))
            .cloned())
    }

    async fn insert_customer(&self, mut customer: Customer) -> Result<(), PortError> {
        let mut customers = self.customers.write().await;
        // Caller-assigned ids are kept as-is
        if customer.id.is_none() {
            customer.id = Some(Self::next_id(&customers)?);
        }
        debug!(customer_id = ?customer.id, "Inserting customer in memory");
        customers.push(customer);
        Ok(())
    }

    async fn delete_person_by_id(&self, id: CustomerId) -> Result<(), PortError> {
        let mut customers = self.customers.write().await;
        if let Some(pos) = customers.iter().position(|c| c.id == Some(id)) {
            customers.remove(pos);
        }
        Ok(())
    }

    async fn update_person(&self, update: CustomerUpdate) -> Result<(), PortError> {
        let mut customers = self.customers.write().await;
        match customers.iter_mut().find(|c| c.id == Some(update.id)) {
            Some(customer) => {
                debug!(customer_id = %update.id, fields = ?update.changed_fields(), "Updating customer in memory");
                update.apply_to(customer);
            }
            None => debug!(customer_id = %update.id, "Update targeted a missing customer"),
        }
        Ok(())
    }

    async fn exists_person_with_email(&self, email: &str) -> Result<bool, PortError> {
        Ok(self.customers.read().await.iter().any(|c| c.email == email))
    }

    async fn exists_person_with_id(&self, id: CustomerId) -> Result<bool, PortError> {
        Ok(self.customers.read().await.iter().any(|c| c.id == Some(id)))
    }
}
