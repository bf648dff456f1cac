use thiserror::Error;

use crate::types::db::item::ItemStatus;
use crate::types::db::request::RequestStatus;

/// Domain errors raised by the request lifecycle manager.
///
/// Conflict-class variants are reported distinctly so the API layer can
/// explain the business reason instead of a generic failure.
#[derive(Error, Debug)]
pub enum LifecycleError {
    #[error("Request not found: {0}")]
    RequestNotFound(String),

    #[error("Item not found: {0}")]
    ItemNotFound(String),

    #[error("User {user_id} does not own the item targeted by request {request_id}")]
    NotItemOwner { request_id: String, user_id: String },

    #[error("Item {item_id} is not available (current status: {status:?})")]
    ItemNotAvailable { item_id: String, status: ItemStatus },

    #[error("Request {request_id} cannot move from {from:?} to {to:?}")]
    InvalidTransition {
        request_id: String,
        from: RequestStatus,
        to: RequestStatus,
    },

    #[error("Item {item_id} already has an approved or completed request")]
    ApprovalConflict { item_id: String },

    #[error("Validation failed: {0}")]
    Validation(String),
}
