use poem_openapi::{Enum, Object};

use crate::types::db::rating;
use crate::types::dto::common::to_rfc3339;

/// Which side of the hand-over the rater was on
#[derive(Enum, Debug, Clone, Copy, PartialEq, Eq)]
#[oai(rename_all = "lowercase")]
pub enum TransactionType {
    Donor,
    Requester,
}

impl TransactionType {
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionType::Donor => "donor",
            TransactionType::Requester => "requester",
        }
    }
}

/// Request model for rating a completed hand-over
#[derive(Object, Debug)]
pub struct CreateRatingRequest {
    pub item_id: String,

    /// Star rating, 1 to 5
    #[oai(validator(minimum(value = "1"), maximum(value = "5")))]
    pub rating: i32,

    #[oai(validator(max_length = 1000))]
    pub comment: Option<String>,

    pub transaction_type: TransactionType,
}

/// Response model representing a stored rating
#[derive(Object, Debug)]
pub struct RatingResponse {
    pub id: i32,
    pub item_id: String,
    pub rater_id: String,
    pub rating: i32,
    pub comment: Option<String>,
    pub transaction_type: String,
    pub created_at: String,
}

impl From<rating::Model> for RatingResponse {
    fn from(m: rating::Model) -> Self {
        Self {
            id: m.id,
            item_id: m.item_id,
            rater_id: m.rater_id,
            rating: m.rating,
            comment: m.comment,
            transaction_type: m.transaction_type,
            created_at: to_rfc3339(m.created_at),
        }
    }
}
