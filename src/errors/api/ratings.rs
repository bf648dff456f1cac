use poem_openapi::{payload::Json, ApiResponse};

use crate::errors::api::ErrorBody;
use crate::errors::internal::{InternalError, TokenError};

/// Error responses for the rating endpoints
#[derive(ApiResponse, Debug)]
pub enum RatingsError {
    /// Request body failed validation
    #[oai(status = 400)]
    ValidationFailed(Json<ErrorBody>),

    /// Missing, malformed or expired bearer token
    #[oai(status = 401)]
    Unauthorized(Json<ErrorBody>),

    /// Rated item does not exist
    #[oai(status = 404)]
    NotFound(Json<ErrorBody>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ErrorBody>),
}

impl RatingsError {
    pub fn validation_failed(message: impl Into<String>) -> Self {
        RatingsError::ValidationFailed(Json(ErrorBody::new("validation_failed", message, 400)))
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        RatingsError::Unauthorized(Json(ErrorBody::new("unauthorized", message, 401)))
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        RatingsError::NotFound(Json(ErrorBody::new("not_found", message, 404)))
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        RatingsError::InternalError(Json(ErrorBody::new("internal_error", message, 500)))
    }
}

impl From<TokenError> for RatingsError {
    fn from(e: TokenError) -> Self {
        RatingsError::unauthorized(e.to_string())
    }
}

impl From<InternalError> for RatingsError {
    fn from(e: InternalError) -> Self {
        match e {
            InternalError::Token(t) => t.into(),
            other => RatingsError::internal_error(other.to_string()),
        }
    }
}
