// Errors layer - Error type definitions
pub mod api;
pub mod internal;

// Re-exports for convenience
pub use api::{ItemsError, RatingsError, RequestsError};
pub use internal::InternalError;
