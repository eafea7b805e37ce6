//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic HTTP response conversion.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// MongoDB server code for a duplicate key on a unique index
const MONGO_DUPLICATE_KEY: i32 = 11000;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Resource errors
    #[error("{0}")]
    NotFound(String),

    // Validation
    #[error("{0}")]
    Validation(String),

    // Storage adapter errors, passed through untouched
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Document store error: {0}")]
    Document(#[from] mongodb::error::Error),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorResponse {
    status_code: u16,
    error: &'static str,
    message: String,
}

impl AppError {
    /// Get error code for client
    fn code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Validation(_) => "VALIDATION_ERROR",
            _ if self.constraint_violation().is_some() => "CONSTRAINT_VIOLATION",
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Document(_) => "DOCUMENT_STORE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            _ if self.constraint_violation().is_some() => StatusCode::CONFLICT,
            AppError::Database(_) | AppError::Document(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Adapter message when the store rejected a write on a unique constraint
    pub fn constraint_violation(&self) -> Option<String> {
        match self {
            AppError::Database(e) => match e.sql_err() {
                Some(sea_orm::SqlErr::UniqueConstraintViolation(msg)) => Some(msg),
                _ => None,
            },
            AppError::Document(e) if is_duplicate_key(e) => Some(e.to_string()),
            _ => None,
        }
    }

    /// Get user-facing message (hides internal details)
    fn user_message(&self) -> String {
        if let Some(detail) = self.constraint_violation() {
            return detail;
        }

        match self {
            AppError::NotFound(msg) | AppError::Validation(msg) => msg.clone(),

            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            }
            AppError::Document(e) => {
                tracing::error!("Document store error: {:?}", e);
                "A database error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
        }
    }
}

/// Duplicate key reports arrive as a write error from inserts and as a
/// command error from find-and-modify.
fn is_duplicate_key(e: &mongodb::error::Error) -> bool {
    use mongodb::error::{ErrorKind, WriteFailure};

    match e.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write)) => write.code == MONGO_DUPLICATE_KEY,
        ErrorKind::Command(command) => command.code == MONGO_DUPLICATE_KEY,
        _ => false,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            status_code: status.as_u16(),
            error: self.code(),
            message: self.user_message(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    /// Not-found error for a user lookup by id
    pub fn user_not_found(id: &str) -> Self {
        AppError::NotFound(format!("User with id \"{}\" not found", id))
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
