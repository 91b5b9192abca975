// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// Application-specific error types
/// DOCUMENTATION: Each variant maps to an HTTP status code and error response
#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("File storage error: {0}")]
    FileStorageError(String),

    #[error("Internal server error")]
    #[allow(dead_code)]
    InternalError,
}

/// Convert InventoryError to HTTP response
/// DOCUMENTATION: Maps error types to HTTP status codes and JSON responses.
/// NotFound responds with an empty body (clients only check the status);
/// everything else carries a structured error envelope.
impl ResponseError for InventoryError {
    fn error_response(&self) -> HttpResponse {
        if let InventoryError::NotFound(_) = self {
            return HttpResponse::NotFound().finish();
        }

        let (status, error_code) = match self {
            InventoryError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            InventoryError::DatabaseError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "DATABASE_ERROR")
            }
            InventoryError::InvalidInput(_) => (StatusCode::BAD_REQUEST, "INVALID_INPUT"),
            InventoryError::ValidationError(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            InventoryError::FileStorageError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "FILE_STORAGE_ERROR")
            }
            InventoryError::InternalError => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let body = json!({
            "error": {
                "code": error_code,
                "message": self.to_string(),
                "timestamp": chrono::Utc::now().to_rfc3339()
            }
        });

        HttpResponse::build(status).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            InventoryError::NotFound(_) => StatusCode::NOT_FOUND,
            InventoryError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            InventoryError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            InventoryError::ValidationError(_) => StatusCode::BAD_REQUEST,
            InventoryError::FileStorageError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            InventoryError::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            InventoryError::NotFound("Item".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            InventoryError::ValidationError("name required".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            InventoryError::FileStorageError("disk full".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_not_found_has_empty_body() {
        let resp = InventoryError::NotFound("Address".into()).error_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
