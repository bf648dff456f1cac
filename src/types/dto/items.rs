use poem_openapi::Object;

use crate::types::db::item::{self, ItemCategory, ItemCondition, ItemStatus};
use crate::types::dto::common::to_rfc3339;

/// Request model for posting a new item
#[derive(Object, Debug)]
pub struct CreateItemRequest {
    /// Title of the item (1-100 characters)
    #[oai(validator(min_length = 1, max_length = 100))]
    pub title: String,

    /// Description of the item
    #[oai(validator(min_length = 1, max_length = 2000))]
    pub description: String,

    pub category: ItemCategory,

    pub condition: ItemCondition,

    /// 5-digit postcode of the pickup location
    #[oai(validator(pattern = "^[0-9]{5}$"))]
    pub postcode: String,

    /// City matching the postcode
    #[oai(validator(min_length = 1, max_length = 100))]
    pub city: String,

    /// URL of the uploaded item photo, if any
    pub image_url: Option<String>,

    /// Contact name shown to an approved requester
    #[oai(validator(min_length = 1, max_length = 100))]
    pub contact_name: String,

    #[oai(validator(min_length = 1, max_length = 30))]
    pub contact_phone: String,

    #[oai(validator(min_length = 3, max_length = 200))]
    pub contact_email: String,
}

/// Response model representing an item listing
#[derive(Object, Debug)]
pub struct ItemResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: ItemCategory,
    pub condition: ItemCondition,
    pub postcode: String,
    pub city: String,
    pub image_url: Option<String>,
    pub contact_name: String,
    pub contact_phone: String,
    pub contact_email: String,
    pub user_id: String,
    pub status: ItemStatus,

    /// Timestamp when the item was created (ISO 8601 format)
    pub created_at: String,
}

impl From<item::Model> for ItemResponse {
    fn from(m: item::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            description: m.description,
            category: m.category,
            condition: m.condition,
            postcode: m.postcode,
            city: m.city,
            image_url: m.image_url,
            contact_name: m.contact_name,
            contact_phone: m.contact_phone,
            contact_email: m.contact_email,
            user_id: m.user_id,
            status: m.status,
            created_at: to_rfc3339(m.created_at),
        }
    }
}

/// Dashboard counts of a user's posted items by status
#[derive(Object, Debug)]
pub struct ItemStatsResponse {
    pub total: u64,
    pub available: u64,
    pub reserved: u64,
    pub collected: u64,
}

/// Read-side filter for the public item listing.
///
/// All fields are optional and combine with AND; listing always restricts to
/// Available items.
#[derive(Debug, Default, Clone)]
pub struct ItemFilter {
    /// Substring match against title or description
    pub query: Option<String>,
    pub category: Option<ItemCategory>,
    /// Substring match against city or postcode
    pub location: Option<String>,
}
