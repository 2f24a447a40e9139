//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic HTTP response conversion. Error bodies follow the
//! `{"error": "<mensaje>"}` shape the dashboard expects.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::config::MENSAJE_ERROR_INTERNO;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// No row matched the requested id
    #[error("{0}")]
    NotFound(String),

    /// Unique constraint violated (duplicate dni, duplicate codigo)
    #[error("{0}")]
    Conflict(String),

    /// Missing or malformed request fields
    #[error("{0}")]
    Validation(String),

    /// Persistence failure, detail logged server-side only
    #[error("database error")]
    Database(#[from] sea_orm::DbErr),

    #[error("{0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

impl AppError {
    /// Get HTTP status code
    fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            // Conflicts surface as 400 with a specific message, matching the
            // original API contract rather than 409.
            AppError::Conflict(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    fn mensaje(&self) -> String {
        match self {
            AppError::NotFound(msg) | AppError::Conflict(msg) | AppError::Validation(msg) => {
                msg.clone()
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                MENSAJE_ERROR_INTERNO.to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                MENSAJE_ERROR_INTERNO.to_string()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: self.mensaje(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self, mensaje: &str) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, mensaje: &str) -> AppResult<T> {
        self.ok_or_else(|| AppError::NotFound(mensaje.to_string()))
    }
}

/// Convenience constructors
impl AppError {
    pub fn not_found(mensaje: impl Into<String>) -> Self {
        AppError::NotFound(mensaje.into())
    }

    pub fn conflict(mensaje: impl Into<String>) -> Self {
        AppError::Conflict(mensaje.into())
    }

    pub fn validation(mensaje: impl Into<String>) -> Self {
        AppError::Validation(mensaje.into())
    }

    pub fn internal(mensaje: impl Into<String>) -> Self {
        AppError::Internal(mensaje.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_the_api_contract() {
        assert_eq!(
            AppError::not_found("Cliente no encontrado").status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::conflict("El DNI ya está registrado").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::validation("Faltan campos obligatorios").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::internal("boom").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn internal_errors_never_leak_detail() {
        let err = AppError::internal("connection refused on 10.0.0.5");
        assert_eq!(err.mensaje(), MENSAJE_ERROR_INTERNO);
    }

    #[test]
    fn option_ext_maps_none_to_not_found() {
        let missing: Option<i64> = None;
        let err = missing.ok_or_not_found("Caso no encontrado").unwrap_err();
        assert!(matches!(err, AppError::NotFound(m) if m == "Caso no encontrado"));
    }
}
