use thiserror::Error;

pub mod database;
pub mod lifecycle;
pub mod notification;
pub mod token;

pub use database::DatabaseError;
pub use lifecycle::LifecycleError;
pub use notification::NotificationError;
pub use token::TokenError;

/// Internal error type for store and service operations
///
/// Hybrid design separates infrastructure errors (shared) from domain errors
/// (component-specific). Not exposed via API - endpoints must convert to the
/// per-resource API error types.
#[derive(Error, Debug)]
pub enum InternalError {
    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),

    #[error(transparent)]
    Notification(#[from] NotificationError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

impl InternalError {
    pub fn database(operation: &str, source: sea_orm::DbErr) -> InternalError {
        InternalError::Database(DatabaseError::Operation {
            operation: operation.to_string(),
            source,
        })
    }
}
