//! Application error type mapping to HTTP status codes and envelope format.

use axum::response::{IntoResponse, Response};
use uuid::Uuid;

use campus_types::error::SessionError;

use crate::http::response::ApiResponse;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Session store errors.
    Session(SessionError),
    /// Request validation error.
    Validation(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (code, message) = match self {
            AppError::Session(SessionError::NotFound) => {
                ("SESSION_NOT_FOUND", "Session not found".to_string())
            }
            AppError::Session(SessionError::InvalidId(id)) => {
                ("VALIDATION_ERROR", format!("Invalid session id: '{id}'"))
            }
            AppError::Validation(msg) => ("VALIDATION_ERROR", msg),
        };

        ApiResponse::error(code, &message, Uuid::now_v7().to_string(), 0).into_response()
    }
}
