//! API handlers for the holidays REST endpoints

pub mod health;
pub mod holidays;
pub mod openapi;

use axum::extract::rejection::JsonRejection;

use crate::error::AppError;

/// Malformed request bodies surface through the same error type as
/// everything else, so all handlers share one status mapping.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}
