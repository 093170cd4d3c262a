use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::application::errors::ClientUseCaseError;
use crate::application::ports::RepositoryError;

/// Body of every error response
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// What the request was trying to do
    pub message: String,
    /// Why it failed
    pub error: String,
}

/// API error response
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    error: String,
}

impl ApiError {
    pub fn new(
        status: StatusCode,
        message: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            status,
            message: message.into(),
            error: error.into(),
        }
    }

    pub fn bad_request(error: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Invalid request", error)
    }

    pub fn not_found(error: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, "Client not found", error)
    }

    pub fn internal_error(error: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error", error)
    }

    /// Replace the message with the operation that failed
    pub fn context(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            message: self.message,
            error: self.error,
        });

        (self.status, body).into_response()
    }
}

impl From<ClientUseCaseError> for ApiError {
    fn from(err: ClientUseCaseError) -> Self {
        match err {
            ClientUseCaseError::Domain(e) => ApiError::bad_request(e.to_string()),
            ClientUseCaseError::NotFound(msg) => ApiError::not_found(msg),
            ClientUseCaseError::Repository(e) => e.into(),
        }
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::ConstraintViolation(detail) => {
                error!(error = %detail, "constraint_violation");
                ApiError::bad_request("Constraint violation")
            }
            RepositoryError::Database(e) => {
                error!(error = %e, "database_error");
                ApiError::internal_error(sanitize_db_error(&e))
            }
            RepositoryError::SerializationError(msg) => {
                error!(error = %msg, "row_mapping_error");
                ApiError::internal_error("Stored data could not be read")
            }
        }
    }
}

/// Sanitize database error messages to prevent information leakage
pub fn sanitize_db_error(error: &sqlx::Error) -> String {
    match error {
        sqlx::Error::Configuration(_) => "Database configuration error".to_string(),
        sqlx::Error::Database(_) => "Database operation error".to_string(),
        sqlx::Error::Io(_) => "Database connection error".to_string(),
        sqlx::Error::Tls(_) => "Database TLS error".to_string(),
        sqlx::Error::Protocol(_) => "Database protocol error".to_string(),
        sqlx::Error::RowNotFound => "Record not found".to_string(),
        sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
            "Database decode error".to_string()
        }
        sqlx::Error::PoolTimedOut => "Database timeout".to_string(),
        sqlx::Error::PoolClosed => "Database connection closed".to_string(),
        _ => "Database error".to_string(),
    }
}
