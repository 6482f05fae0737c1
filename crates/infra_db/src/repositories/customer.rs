//! Customer repository implementation
//!
//! Parameterized statements against the `customer` table. Partial updates
//! are written as one dynamic UPDATE of the dirty columns, atomic on its own.
//!
//! The service's read, email check and write are separate statements. Two
//! writers racing onto one email are stopped by `customer_email_unique`,
//! which surfaces as `DuplicateEntry`.

use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::debug;

use core_kernel::CustomerId;
use domain_customer::{Customer, CustomerUpdate};

use crate::error::DatabaseError;
use crate::row_mapper::CustomerRowMapper;

const SELECT_ALL: &str = "SELECT id, name, email, age, gender FROM customer";
const SELECT_BY_ID: &str = "SELECT id, name, email, age, gender FROM customer WHERE id = $1";
const INSERT: &str = "INSERT INTO customer(name, email, age, gender) VALUES ($1, $2, $3, $4)";
const DELETE_BY_ID: &str = "DELETE FROM customer WHERE id = $1";
const COUNT_BY_EMAIL: &str = "SELECT count(id) FROM customer WHERE email = $1";
const COUNT_BY_ID: &str = "SELECT count(id) FROM customer WHERE id = $1";

/// Repository for the `customer` table
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    pool: PgPool,
}

impl CustomerRepository {
    /// Creates a new CustomerRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lists every customer in scan order
    pub async fn find_all(&self) -> Result<Vec<Customer>, DatabaseError> {
        let rows = sqlx::query(SELECT_ALL).fetch_all(&self.pool).await?;
        CustomerRowMapper::map_rows(&rows)
    }

    /// Looks up one customer
    pub async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, DatabaseError> {
        let row = sqlx::query(SELECT_BY_ID)
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(CustomerRowMapper::map_row).transpose()
    }

    /// Inserts a customer; the sequence assigns the id
    ///
    /// # Errors
    ///
    /// `DuplicateEntry` when the email violates `customer_email_unique`
    pub async fn insert(&self, customer: &Customer) -> Result<(), DatabaseError> {
        sqlx::query(INSERT)
            .bind(&customer.name)
            .bind(&customer.email)
            .bind(customer.age)
            .bind(customer.gender.map(|g| g.as_str()))
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Deletes a customer, returning the number of rows removed
    pub async fn delete_by_id(&self, id: CustomerId) -> Result<u64, DatabaseError> {
        let result = sqlx::query(DELETE_BY_ID)
            .bind(id.value())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Writes the changed columns of one customer
    ///
    /// Returns the number of rows touched; an empty update issues no query.
    pub async fn update(&self, update: &CustomerUpdate) -> Result<u64, DatabaseError> {
        let Some(mut builder) = Self::update_statement(update) else {
            return Ok(0);
        };

        let result = builder.build().execute(&self.pool).await?;

        debug!(customer_id = %update.id, rows = result.rows_affected(), "Customer row updated");
        Ok(result.rows_affected())
    }

    /// Counts customers holding `email`
    pub async fn count_by_email(&self, email: &str) -> Result<i64, DatabaseError> {
        let count: Option<i64> = sqlx::query_scalar(COUNT_BY_EMAIL)
            .bind(email)
            .fetch_one(&self.pool)
            .await?;
        Ok(count.unwrap_or(0))
    }

    /// Counts customers with `id`
    pub async fn count_by_id(&self, id: CustomerId) -> Result<i64, DatabaseError> {
        let count: Option<i64> = sqlx::query_scalar(COUNT_BY_ID)
            .bind(id.value())
            .fetch_one(&self.pool)
            .await?;
        Ok(count.unwrap_or(0))
    }

    /// Pings the database
    pub async fn ping(&self) -> Result<(), DatabaseError> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await?;
        Ok(())
    }

    /// Builds `UPDATE customer SET <dirty columns> WHERE id = $n`
    ///
    /// Columns appear in the order name, email, age, gender.
    pub(crate) fn update_statement(update: &CustomerUpdate) -> Option<QueryBuilder<'static, Postgres>> {
        if update.is_empty() {
            return None;
        }

        let mut builder = QueryBuilder::<Postgres>::new("UPDATE customer SET ");
        let mut columns = builder.separated(", ");
        if let Some(name) = &update.name {
            columns.push("name = ").push_bind_unseparated(name.clone());
        }
        if let Some(email) = &update.email {
            columns.push("email = ").push_bind_unseparated(email.clone());
        }
        if let Some(age) = update.age {
            columns.push("age = ").push_bind_unseparated(age);
        }
        if let Some(gender) = update.gender {
            columns.push("gender = ").push_bind_unseparated(gender.as_str());
        }
        builder.push(" WHERE id = ").push_bind(update.id.value());

        Some(builder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_customer::Gender;

    #[test]
    fn test_empty_update_builds_nothing() {
        assert!(CustomerRepository::update_statement(&CustomerUpdate::new(CustomerId::new(1))).is_none());
    }

    #[test]
    fn test_update_statement_lists_dirty_columns_in_order() {
        let mut update = CustomerUpdate::new(CustomerId::new(9));
        update.age = Some(100);
        update.name = Some("Faa".to_string());
        update.gender = Some(Gender::Male);

        let builder = CustomerRepository::update_statement(&update).unwrap();
        assert_eq!(
            builder.sql(),
            "UPDATE customer SET name = $1, age = $2, gender = $3 WHERE id = $4"
        );
    }

    #[test]
    fn test_single_column_update() {
        let mut update = CustomerUpdate::new(CustomerId::new(9));
        update.email = Some("faa@bar.io".to_string());

        let builder = CustomerRepository::update_statement(&update).unwrap();
        assert_eq!(builder.sql(), "UPDATE customer SET email = $1 WHERE id = $2");
    }
}
