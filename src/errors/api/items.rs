use poem_openapi::{payload::Json, ApiResponse};

use crate::errors::api::ErrorBody;
use crate::errors::internal::{InternalError, TokenError};

/// Error responses for the item endpoints
#[derive(ApiResponse, Debug)]
pub enum ItemsError {
    /// Request body failed validation
    #[oai(status = 400)]
    ValidationFailed(Json<ErrorBody>),

    /// Missing, malformed or expired bearer token
    #[oai(status = 401)]
    Unauthorized(Json<ErrorBody>),

    /// Item does not exist
    #[oai(status = 404)]
    NotFound(Json<ErrorBody>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ErrorBody>),
}

impl ItemsError {
    pub fn validation_failed(message: impl Into<String>) -> Self {
        ItemsError::ValidationFailed(Json(ErrorBody::new("validation_failed", message, 400)))
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        ItemsError::Unauthorized(Json(ErrorBody::new("unauthorized", message, 401)))
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ItemsError::NotFound(Json(ErrorBody::new("not_found", message, 404)))
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        ItemsError::InternalError(Json(ErrorBody::new("internal_error", message, 500)))
    }
}

impl From<TokenError> for ItemsError {
    fn from(e: TokenError) -> Self {
        ItemsError::unauthorized(e.to_string())
    }
}

impl From<InternalError> for ItemsError {
    fn from(e: InternalError) -> Self {
        match e {
            InternalError::Token(t) => t.into(),
            other => ItemsError::internal_error(other.to_string()),
        }
    }
}
