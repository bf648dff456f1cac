use poem_openapi::Object;

use crate::types::db::item::{self, ItemStatus};
use crate::types::db::request::{self, PreferredContact, RequestStatus};
use crate::types::dto::common::to_rfc3339;

/// Request model for submitting a pickup request against an item
///
/// The acting user comes from the bearer token, and owner contact details are
/// read from the item row server-side, so neither appears in the body.
#[derive(Object, Debug)]
pub struct CreateRequestRequest {
    pub item_id: String,

    /// Message to the item owner (minimum 10 characters)
    #[oai(validator(min_length = 10, max_length = 2000))]
    pub message: String,

    pub preferred_contact: PreferredContact,

    /// Name shown to the item owner
    #[oai(validator(min_length = 1, max_length = 100))]
    pub requester_name: String,

    /// Email the owner's notification replies to
    #[oai(validator(min_length = 3, max_length = 200))]
    pub requester_email: String,
}

/// Body for the owner-driven status transition endpoint
#[derive(Object, Debug)]
pub struct UpdateRequestStatusRequest {
    /// Desired new status (Approved, Rejected or Completed)
    pub status: RequestStatus,
}

/// Response model representing a pickup request
#[derive(Object, Debug)]
pub struct RequestResponse {
    pub id: String,
    pub item_id: String,
    pub requester_id: String,
    pub requester_name: String,
    pub requester_email: String,
    pub message: String,
    pub preferred_contact: PreferredContact,
    pub status: RequestStatus,

    /// Timestamp when the request was created (ISO 8601 format)
    pub created_at: String,
}

impl From<request::Model> for RequestResponse {
    fn from(m: request::Model) -> Self {
        Self {
            id: m.id,
            item_id: m.item_id,
            requester_id: m.requester_id,
            requester_name: m.requester_name,
            requester_email: m.requester_email,
            message: m.message,
            preferred_contact: m.preferred_contact,
            status: m.status,
            created_at: to_rfc3339(m.created_at),
        }
    }
}

/// Outcome of a status transition
#[derive(Object, Debug)]
pub struct TransitionResponse {
    pub request: RequestResponse,

    /// Item status after reconciliation
    pub item_status: ItemStatus,

    /// Number of sibling Pending requests auto-rejected by an approval
    pub rejected_siblings: u64,
}

/// A request joined with the title/image of the item it targets.
///
/// View model for the "my requests" and "requests received" listings;
/// assembled by the read side, never by the lifecycle manager.
#[derive(Object, Debug)]
pub struct RequestWithItemResponse {
    pub id: String,
    pub item_id: String,
    pub requester_id: String,
    pub requester_name: String,
    pub requester_email: String,
    pub message: String,
    pub preferred_contact: PreferredContact,
    pub status: RequestStatus,
    pub created_at: String,
    pub item_title: Option<String>,
    pub item_image_url: Option<String>,
}

impl From<(request::Model, Option<item::Model>)> for RequestWithItemResponse {
    fn from((req, item): (request::Model, Option<item::Model>)) -> Self {
        let (item_title, item_image_url) = match item {
            Some(i) => (Some(i.title), i.image_url),
            None => (None, None),
        };
        Self {
            id: req.id,
            item_id: req.item_id,
            requester_id: req.requester_id,
            requester_name: req.requester_name,
            requester_email: req.requester_email,
            message: req.message,
            preferred_contact: req.preferred_contact,
            status: req.status,
            created_at: to_rfc3339(req.created_at),
            item_title,
            item_image_url,
        }
    }
}
