//! Startup wiring
//!
//! Picks the customer store named in [`ApiConfig`] and optionally seeds one
//! generated customer.

use std::sync::Arc;

use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;
use thiserror::Error;
use tracing::{debug, info};

use domain_customer::{CustomerDao, CustomerDto, CustomerError, CustomerErrorKind, CustomerService, InMemoryCustomerDao};
use infra_db::{create_pool, run_migrations, DatabaseConfig, DatabaseError, PostgresCustomerDao};

use crate::config::{ApiConfig, CustomerStore};

/// Failures while bringing the service up
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("Database setup failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Demo data seeding failed: {0}")]
    Seed(#[from] CustomerError),
}

/// Builds the customer service on top of the configured store
pub async fn build_service(config: &ApiConfig) -> Result<CustomerService, BootstrapError> {
    let dao: Arc<dyn CustomerDao> = match config.customer_store {
        CustomerStore::Postgres => {
            info!("Connecting to database...");
            let pool = create_pool(DatabaseConfig::new(config.database_url.clone())).await?;
            run_migrations(&pool).await?;
            info!("Database ready");
            Arc::new(PostgresCustomerDao::new(pool))
        }
        CustomerStore::Memory => {
            info!("Using in-memory customer store");
            Arc::new(InMemoryCustomerDao::with_demo_customers())
        }
    };

    Ok(CustomerService::new(dao))
}

/// Registers one customer with a generated name, email and age
pub async fn seed_demo_customer(service: &CustomerService) -> Result<(), BootstrapError> {
    let name: String = Name().fake();
    let email: String = SafeEmail().fake();
    let age = (16..99).fake::<i32>();

    register_unless_taken(service, CustomerDto::new(name, email, age, None)).await
}

/// A clash with an existing email is skipped silently
async fn register_unless_taken(service: &CustomerService, dto: CustomerDto) -> Result<(), BootstrapError> {
    let email = dto.email.clone().unwrap_or_default();
    match service.add_customer(dto).await {
        Ok(()) => {
            info!(%email, "Seeded demo customer");
            Ok(())
        }
        Err(e) if e.kind() == CustomerErrorKind::Duplicate => {
            debug!(%email, "Demo customer already present");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_config() -> ApiConfig {
        ApiConfig {
            customer_store: CustomerStore::Memory,
            ..ApiConfig::default()
        }
    }

    #[tokio::test]
    async fn test_memory_store_starts_with_demo_customers() {
        let service = build_service(&memory_config()).await.unwrap();
        let customers = service.get_all_customers().await.unwrap();

        let names: Vec<_> = customers.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Alex", "Jamila"]);
    }

    #[tokio::test]
    async fn test_seed_adds_one_customer() {
        let service = build_service(&memory_config()).await.unwrap();

        seed_demo_customer(&service).await.unwrap();

        let customers = service.get_all_customers().await.unwrap();
        assert_eq!(customers.len(), 3);
        let seeded = &customers[2];
        assert!((16..99).contains(&seeded.age));
        assert!(seeded.gender.is_none());
    }

    #[tokio::test]
    async fn test_seed_tolerates_taken_email() {
        let service = build_service(&memory_config()).await.unwrap();
        let taken = service.get_all_customers().await.unwrap()[0].email.clone();

        register_unless_taken(&service, CustomerDto::new("Someone", taken, 40, None))
            .await
            .unwrap();

        assert_eq!(service.get_all_customers().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_seed_reports_invalid_data() {
        let service = build_service(&memory_config()).await.unwrap();

        let result = register_unless_taken(&service, CustomerDto::new("", "x@y.z", 40, None)).await;

        assert!(matches!(result, Err(BootstrapError::Seed(_))));
    }
}
