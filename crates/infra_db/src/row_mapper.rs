//! Projection of `customer` rows into the domain model
//!
//! Every SELECT the repository issues reads `id, name, email, age, gender`
//! in that order. Decoding is split in two so the gender conversion can be
//! tested without a database.

use sqlx::postgres::PgRow;
use sqlx::FromRow;

use core_kernel::CustomerId;
use domain_customer::{Customer, Gender};

use crate::error::DatabaseError;

/// Raw `customer` row as stored
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct CustomerRow {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub age: i32,
    pub gender: Option<String>,
}

impl TryFrom<CustomerRow> for Customer {
    type Error = DatabaseError;

    fn try_from(row: CustomerRow) -> Result<Self, Self::Error> {
        let gender = row
            .gender
            .as_deref()
            .map(str::parse::<Gender>)
            .transpose()
            .map_err(|e| DatabaseError::SerializationError(e.to_string()))?;

        Ok(Customer {
            id: Some(CustomerId::new(row.id)),
            name: row.name,
            email: row.email,
            age: row.age,
            gender,
        })
    }
}

/// Maps result rows to customers
pub struct CustomerRowMapper;

impl CustomerRowMapper {
    /// Maps one row
    ///
    /// # Errors
    ///
    /// `SerializationError` for a missing column or an unknown gender token
    pub fn map_row(row: &PgRow) -> Result<Customer, DatabaseError> {
        let raw = CustomerRow::from_row(row)
            .map_err(|e| DatabaseError::SerializationError(e.to_string()))?;
        Customer::try_from(raw)
    }

    /// Maps every row, failing on the first bad one
    pub fn map_rows(rows: &[PgRow]) -> Result<Vec<Customer>, DatabaseError> {
        rows.iter().map(Self::map_row).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(gender: Option<&str>) -> CustomerRow {
        CustomerRow {
            id: 9,
            name: "Foo".to_string(),
            email: "foo@bar.com".to_string(),
            age: 90,
            gender: gender.map(str::to_string),
        }
    }

    #[test]
    fn test_maps_every_column() {
        let customer = Customer::try_from(row(Some("FEMALE"))).unwrap();
        assert_eq!(
            customer,
            Customer::new("Foo", "foo@bar.com", 90, Some(Gender::Female)).with_id(CustomerId::new(9))
        );
    }

    #[test]
    fn test_null_gender_maps_to_none() {
        let customer = Customer::try_from(row(None)).unwrap();
        assert_eq!(customer.gender, None);
    }

    #[test]
    fn test_unknown_gender_fails() {
        let err = Customer::try_from(row(Some("OTHER"))).unwrap_err();
        assert!(matches!(err, DatabaseError::SerializationError(ref m) if m.contains("OTHER")));
    }

    mod projection {
        use super::*;
        use proptest::prelude::*;
        use test_utils::{customer_id_strategy, customer_strategy};

        proptest! {
            #[test]
            fn stored_columns_map_back_to_an_equal_customer(
                customer in customer_strategy(),
                id in customer_id_strategy(),
            ) {
                let expected = customer.with_id(id);
                let raw = CustomerRow {
                    id: id.value(),
                    name: expected.name.clone(),
                    email: expected.email.clone(),
                    age: expected.age,
                    gender: expected.gender.map(|g| g.as_str().to_string()),
                };

                prop_assert_eq!(Customer::try_from(raw).unwrap(), expected);
            }
        }
    }
}
