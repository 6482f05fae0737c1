//! Customer domain errors
//!
//! Every failure the customer service can report falls into one of four
//! kinds. The display text of each variant is the exact message returned to
//! clients, so constructors below are the only place those strings live.

use thiserror::Error;

use core_kernel::PortError;

/// Errors raised by the customer service
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CustomerError {
    /// A lookup or update targeted a customer that does not exist
    #[error("{0}")]
    ResourceNotFound(String),

    /// The requested email belongs to another customer
    #[error("{0}")]
    DuplicateResource(String),

    /// The request was malformed, empty, or changed nothing
    #[error("{0}")]
    RequestValidation(String),

    /// The store failed in a way the client cannot fix
    #[error("{0}")]
    Internal(String),
}

/// Classification used by the HTTP layer to pick a status code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerErrorKind {
    NotFound,
    Duplicate,
    Validation,
    Internal,
}

impl CustomerError {
    /// Raised by `get_customer` and `update_customer` for an unknown id
    pub fn customer_not_found(id: impl std::fmt::Display) -> Self {
        CustomerError::ResourceNotFound(format!("customer with id {} not found!", id))
    }

    /// Raised by `delete_customer_by_id` for an unknown id
    pub fn person_not_found(id: impl std::fmt::Display) -> Self {
        CustomerError::ResourceNotFound(format!("Person with id {} does not exist!", id))
    }

    /// Raised when the email is already in use
    pub fn email_taken() -> Self {
        CustomerError::DuplicateResource("Email already taken!".to_string())
    }

    /// Raised when an update would not change any field
    pub fn no_changes() -> Self {
        CustomerError::RequestValidation("No data changes found.".to_string())
    }

    /// Creates a RequestValidation error with a message
    pub fn invalid(message: impl Into<String>) -> Self {
        CustomerError::RequestValidation(message.into())
    }

    /// Creates an Internal error with a message
    pub fn internal(message: impl Into<String>) -> Self {
        CustomerError::Internal(message.into())
    }

    /// Returns the kind of this error
    pub fn kind(&self) -> CustomerErrorKind {
        match self {
            CustomerError::ResourceNotFound(_) => CustomerErrorKind::NotFound,
            CustomerError::DuplicateResource(_) => CustomerErrorKind::Duplicate,
            CustomerError::RequestValidation(_) => CustomerErrorKind::Validation,
            CustomerError::Internal(_) => CustomerErrorKind::Internal,
        }
    }

    /// Returns the client-facing message
    pub fn message(&self) -> &str {
        match self {
            CustomerError::ResourceNotFound(m)
            | CustomerError::DuplicateResource(m)
            | CustomerError::RequestValidation(m)
            | CustomerError::Internal(m) => m,
        }
    }
}

/// A unique-constraint violation that slipped past the service's own check
/// is still a duplicate email; anything else from the store is internal.
impl From<PortError> for CustomerError {
    fn from(err: PortError) -> Self {
        match err {
            PortError::Conflict { .. } => CustomerError::email_taken(),
            other => CustomerError::Internal(other.to_string()),
        }
    }
}

/// Result type for customer operations
pub type CustomerResult<T> = Result<T, CustomerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_messages() {
        assert_eq!(
            CustomerError::customer_not_found(10).to_string(),
            "customer with id 10 not found!"
        );
        assert_eq!(
            CustomerError::person_not_found(10).to_string(),
            "Person with id 10 does not exist!"
        );
        assert_eq!(CustomerError::email_taken().to_string(), "Email already taken!");
        assert_eq!(CustomerError::no_changes().to_string(), "No data changes found.");
    }

    #[test]
    fn test_kinds() {
        assert_eq!(CustomerError::customer_not_found(1).kind(), CustomerErrorKind::NotFound);
        assert_eq!(CustomerError::email_taken().kind(), CustomerErrorKind::Duplicate);
        assert_eq!(CustomerError::no_changes().kind(), CustomerErrorKind::Validation);
        assert_eq!(CustomerError::internal("x").kind(), CustomerErrorKind::Internal);
    }

    #[test]
    fn test_port_conflict_becomes_duplicate() {
        let err: CustomerError = PortError::conflict("customer_email_unique").into();
        assert_eq!(err, CustomerError::email_taken());
    }

    #[test]
    fn test_port_connection_becomes_internal() {
        let err: CustomerError = PortError::connection("refused").into();
        assert_eq!(err.kind(), CustomerErrorKind::Internal);
        assert!(err.message().contains("refused"));
    }
}
