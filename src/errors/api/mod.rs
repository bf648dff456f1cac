// API-facing error types - one ApiResponse enum per resource
pub mod items;
pub mod ratings;
pub mod requests;

pub use items::ItemsError;
pub use ratings::RatingsError;
pub use requests::RequestsError;

use poem_openapi::Object;

/// Standardized JSON error body returned by every endpoint
#[derive(Object, Debug)]
pub struct ErrorBody {
    /// Error code identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code
    pub status_code: u16,
}

impl ErrorBody {
    pub fn new(error: &str, message: impl Into<String>, status_code: u16) -> Self {
        Self {
            error: error.to_string(),
            message: message.into(),
            status_code,
        }
    }
}
