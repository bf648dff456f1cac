use chrono::Utc;
use sea_orm::{ActiveModelTrait, ConnectionTrait, Set};

use crate::errors::InternalError;
use crate::types::db::rating;
use crate::types::dto::ratings::CreateRatingRequest;

/// Repository for hand-over ratings.
#[derive(Default)]
pub struct RatingStore;

impl RatingStore {
    pub fn new() -> Self {
        Self
    }

    pub async fn insert<C: ConnectionTrait>(
        &self,
        conn: &C,
        rater_id: &str,
        input: &CreateRatingRequest,
    ) -> Result<rating::Model, InternalError> {
        let comment = input
            .comment
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string);

        let model = rating::ActiveModel {
            id: sea_orm::ActiveValue::NotSet,
            item_id: Set(input.item_id.clone()),
            rater_id: Set(rater_id.to_string()),
            rating: Set(input.rating),
            comment: Set(comment),
            transaction_type: Set(input.transaction_type.as_str().to_string()),
            created_at: Set(Utc::now().timestamp()),
        };

        model
            .insert(conn)
            .await
            .map_err(|e| InternalError::database("insert_rating", e))
    }
}
