//! Custom Test Assertions
//!
//! Assertion helpers for customers and customer errors that print both sides
//! in full when they fail.

use domain_customer::{Customer, CustomerDto, CustomerError, CustomerErrorKind};

/// Asserts that a persisted customer carries the content of a request body
///
/// Identity is ignored. Fields absent from the body are not compared.
pub fn assert_customer_matches_dto(actual: &Customer, expected: &CustomerDto) {
    if let Some(name) = &expected.name {
        assert_eq!(&actual.name, name, "name mismatch for {:?}", actual);
    }
    if let Some(email) = &expected.email {
        assert_eq!(&actual.email, email, "email mismatch for {:?}", actual);
    }
    if let Some(age) = expected.age {
        assert_eq!(actual.age, age, "age mismatch for {:?}", actual);
    }
    if expected.gender.is_some() {
        assert_eq!(actual.gender, expected.gender, "gender mismatch for {:?}", actual);
    }
}

/// Asserts that two customers hold the same content, ignoring identity
pub fn assert_same_content(actual: &Customer, expected: &Customer) {
    assert!(
        actual.same_content(expected),
        "Customers differ: actual={:?}, expected={:?}",
        actual,
        expected
    );
}

/// Asserts that a list contains a customer with the given email and returns it
///
/// # Panics
///
/// Panics if no customer in `customers` has `email`
pub fn assert_contains_email<'a>(customers: &'a [Customer], email: &str) -> &'a Customer {
    customers
        .iter()
        .find(|c| c.email == email)
        .unwrap_or_else(|| panic!("No customer with email {} in {:?}", email, customers))
}

/// Asserts the kind and exact message of a customer error
pub fn assert_customer_error<T: std::fmt::Debug>(
    result: Result<T, CustomerError>,
    kind: CustomerErrorKind,
    message: &str,
) {
    match result {
        Ok(value) => panic!("Expected {:?} error, got Ok({:?})", kind, value),
        Err(err) => {
            assert_eq!(err.kind(), kind, "Unexpected error kind: {:?}", err);
            assert_eq!(err.message(), message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::CustomerFixtures;

    #[test]
    fn test_assert_contains_email() {
        let customers = vec![CustomerFixtures::alex(), CustomerFixtures::jamila()];
        let found = assert_contains_email(&customers, "jamila@gmail.com");
        assert_eq!(found.name, "Jamila");
    }

    #[test]
    #[should_panic(expected = "Expected NotFound error")]
    fn test_assert_customer_error_on_ok() {
        assert_customer_error(Ok(()), CustomerErrorKind::NotFound, "x");
    }
}
