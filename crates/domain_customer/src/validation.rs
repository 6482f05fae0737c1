//! Customer request validation
//!
//! # Validation Rules
//!
//! ## Create
//! - `name`, `email` and `age` must be present
//! - `name` and `email` must not be empty
//! - `gender` may be absent
//!
//! ## Update
//! - every field is optional
//! - a present `name` or `email` must not be empty
//!
//! Email format and age range are not checked.

use validator::Validate;

use crate::customer::{Customer, CustomerDto};
use crate::error::CustomerError;

/// Result of validating a customer request
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether the request is valid
    pub is_valid: bool,
    /// List of validation errors
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Creates a successful validation result
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    /// Adds an error to the result
    pub fn add_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
        self.is_valid = false;
    }

    /// Converts a failed result into a `RequestValidation` error
    pub fn into_result(self) -> Result<(), CustomerError> {
        if self.is_valid {
            Ok(())
        } else {
            Err(CustomerError::invalid(self.errors.join("; ")))
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}

/// Validator for customer request envelopes
pub struct CustomerValidator;

impl CustomerValidator {
    /// Validates a create request
    ///
    /// # Arguments
    ///
    /// * `dto` - The request body
    ///
    /// # Returns
    ///
    /// A `ValidationResult` listing every missing or empty field
    pub fn validate_create(dto: &CustomerDto) -> ValidationResult {
        let mut result = ValidationResult::ok();

        if dto.name.is_none() {
            result.add_error("name is required");
        }
        if dto.email.is_none() {
            result.add_error("email is required");
        }
        if dto.age.is_none() {
            result.add_error("age is required");
        }
        Self::validate_lengths(dto, &mut result);

        result
    }

    /// Validates an update request
    pub fn validate_update(dto: &CustomerDto) -> ValidationResult {
        let mut result = ValidationResult::ok();
        Self::validate_lengths(dto, &mut result);
        result
    }

    /// Builds an unpersisted customer from a create request
    ///
    /// Fails with `RequestValidation` when a mandatory field is missing.
    pub fn customer_from_create(dto: &CustomerDto) -> Result<Customer, CustomerError> {
        Self::validate_create(dto).into_result()?;

        match (&dto.name, &dto.email, dto.age) {
            (Some(name), Some(email), Some(age)) => {
                Ok(Customer::new(name.clone(), email.clone(), age, dto.gender))
            }
            _ => Err(CustomerError::invalid("name, email and age are required")),
        }
    }

    fn validate_lengths(dto: &CustomerDto, result: &mut ValidationResult) {
        if let Err(errors) = dto.validate() {
            let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
            fields.sort_by_key(|(field, _)| *field);
            for (field, errs) in fields {
                for e in errs {
                    match &e.message {
                        Some(m) => result.add_error(m.to_string()),
                        None => result.add_error(format!("{} is invalid", field)),
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customer::Gender;

    #[test]
    fn test_create_requires_name_email_age() {
        let result = CustomerValidator::validate_create(&CustomerDto::default());
        assert!(!result.is_valid);
        assert_eq!(
            result.errors,
            vec!["name is required", "email is required", "age is required"]
        );
    }

    #[test]
    fn test_create_allows_missing_gender() {
        let dto = CustomerDto::new("Alex", "alex@gmail.com", 21, None);
        assert!(CustomerValidator::validate_create(&dto).is_valid);

        let customer = CustomerValidator::customer_from_create(&dto).unwrap();
        assert_eq!(customer.id, None);
        assert_eq!(customer.gender, None);
    }

    #[test]
    fn test_create_rejects_empty_name() {
        let dto = CustomerDto::new("", "alex@gmail.com", 21, Some(Gender::Male));
        let err = CustomerValidator::customer_from_create(&dto).unwrap_err();
        assert_eq!(err, CustomerError::invalid("name must not be empty"));
    }

    #[test]
    fn test_update_accepts_all_absent() {
        assert!(CustomerValidator::validate_update(&CustomerDto::default()).is_valid);
    }

    #[test]
    fn test_update_rejects_empty_email() {
        let result = CustomerValidator::validate_update(&CustomerDto::email_only(""));
        assert_eq!(result.errors, vec!["email must not be empty"]);
    }
}
