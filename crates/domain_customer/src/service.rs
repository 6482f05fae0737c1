//! Customer service
//!
//! Orchestrates requests between the HTTP surface and whichever
//! [`CustomerDao`] was selected at startup. All domain rules live here:
//! mandatory fields on create, email uniqueness, and the field-wise partial
//! update that rejects requests which change nothing.

use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use core_kernel::{CustomerId, HealthCheckResult};

use crate::customer::{Customer, CustomerDto, CustomerUpdate};
use crate::error::{CustomerError, CustomerResult};
use crate::ports::CustomerDao;
use crate::validation::CustomerValidator;

/// Application service for the customer directory
#[derive(Clone)]
pub struct CustomerService {
    dao: Arc<dyn CustomerDao>,
}

impl CustomerService {
    /// Creates a service over the given data access adapter
    pub fn new(dao: Arc<dyn CustomerDao>) -> Self {
        Self { dao }
    }

    /// Lists every customer
    #[instrument(skip(self))]
    pub async fn get_all_customers(&self) -> CustomerResult<Vec<Customer>> {
        let customers = self.dao.select_all_customers().await?;
        debug!(count = customers.len(), "Listed customers");
        Ok(customers)
    }

    /// Fetches one customer
    ///
    /// # Errors
    ///
    /// `ResourceNotFound` ("customer with id <id> not found!") when absent
    #[instrument(skip(self), fields(customer_id = %id))]
    pub async fn get_customer(&self, id: CustomerId) -> CustomerResult<Customer> {
        self.dao
            .select_customer_by_id(id)
            .await?
            .ok_or_else(|| CustomerError::customer_not_found(id))
    }

    /// Registers a new customer
    ///
    /// # Errors
    ///
    /// - `RequestValidation` when name, email or age is missing or empty
    /// - `DuplicateResource` when the email is already taken
    #[instrument(skip(self, dto))]
    pub async fn add_customer(&self, dto: CustomerDto) -> CustomerResult<()> {
        let customer = CustomerValidator::customer_from_create(&dto)?;

        self.check_email_duplicate(&customer.email).await?;

        self.dao.insert_customer(customer).await?;
        info!("Customer registered");
        Ok(())
    }

    /// Deletes a customer
    ///
    /// # Errors
    ///
    /// `ResourceNotFound` ("Person with id <id> does not exist!") when absent
    #[instrument(skip(self), fields(customer_id = %id))]
    pub async fn delete_customer_by_id(&self, id: CustomerId) -> CustomerResult<()> {
        if !self.dao.exists_person_with_id(id).await? {
            return Err(CustomerError::person_not_found(id));
        }

        self.dao.delete_person_by_id(id).await?;
        info!("Customer deleted");
        Ok(())
    }

    /// Applies a partial update
    ///
    /// Fields are considered in the order name, email, age, gender. A field
    /// changes when the request carries it and it differs from the stored
    /// value. The email uniqueness probe runs only for a changing email.
    ///
    /// # Errors
    ///
    /// - `ResourceNotFound` when the customer does not exist
    /// - `DuplicateResource` when the new email is taken
    /// - `RequestValidation` when nothing would change or a field is empty
    #[instrument(skip(self, dto), fields(customer_id = %id))]
    pub async fn update_customer(&self, id: CustomerId, dto: CustomerDto) -> CustomerResult<()> {
        CustomerValidator::validate_update(&dto).into_result()?;

        let current = self.get_customer(id).await?;
        let mut update = CustomerUpdate::new(id);

        if let Some(name) = dto.name.filter(|n| *n != current.name) {
            update.name = Some(name);
        }

        if let Some(email) = dto.email.filter(|e| *e != current.email) {
            self.check_email_duplicate(&email).await?;
            update.email = Some(email);
        }

        if let Some(age) = dto.age.filter(|a| *a != current.age) {
            update.age = Some(age);
        }

        if let Some(gender) = dto.gender.filter(|g| Some(*g) != current.gender) {
            update.gender = Some(gender);
        }

        if update.is_empty() {
            return Err(CustomerError::no_changes());
        }

        let fields = update.changed_fields();
        self.dao.update_person(update).await?;
        info!(?fields, "Customer updated");
        Ok(())
    }

    /// Reports the health of the underlying store
    pub async fn health_check(&self) -> HealthCheckResult {
        self.dao.health_check().await
    }

    async fn check_email_duplicate(&self, email: &str) -> CustomerResult<()> {
        if self.dao.exists_person_with_email(email).await? {
            warn!("Rejected duplicate email");
            return Err(CustomerError::email_taken());
        }
        Ok(())
    }
}

impl std::fmt::Debug for CustomerService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomerService").finish_non_exhaustive()
    }
}
