//! API error handling
//!
//! Domain failures keep their message verbatim; only the status code is
//! chosen here.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

use domain_customer::{CustomerError, CustomerErrorKind};

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ApiError {
    /// Status code and machine-readable kind
    pub fn status(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            ApiError::Conflict(_) => (StatusCode::CONFLICT, "conflict"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = self.status();
        if status.is_server_error() {
            error!(error = %self, "Request failed");
        }

        let body = ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<CustomerError> for ApiError {
    fn from(err: CustomerError) -> Self {
        let message = err.message().to_string();
        match err.kind() {
            CustomerErrorKind::NotFound => ApiError::NotFound(message),
            CustomerErrorKind::Duplicate => ApiError::Conflict(message),
            CustomerErrorKind::Validation => ApiError::BadRequest(message),
            CustomerErrorKind::Internal => ApiError::Internal(message),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (CustomerError::customer_not_found(1), StatusCode::NOT_FOUND),
            (CustomerError::email_taken(), StatusCode::CONFLICT),
            (CustomerError::no_changes(), StatusCode::BAD_REQUEST),
            (CustomerError::internal("db down"), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (domain, expected) in cases {
            assert_eq!(ApiError::from(domain).status().0, expected);
        }
    }

    #[test]
    fn test_message_is_preserved() {
        let api = ApiError::from(CustomerError::person_not_found(18));
        assert_eq!(api.to_string(), "Person with id 18 does not exist!");
    }

    #[test]
    fn test_response_status() {
        let response = ApiError::from(CustomerError::email_taken()).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}
