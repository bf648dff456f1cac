use std::sync::Arc;

use poem_openapi::{payload::Json, OpenApi, Tags};
use sea_orm::DatabaseConnection;

use crate::api::helpers::{authenticate, BearerAuth};
use crate::errors::RatingsError;
use crate::services::TokenService;
use crate::stores::{ItemStore, RatingStore};
use crate::types::dto::ratings::{CreateRatingRequest, RatingResponse};

/// Hand-over rating endpoints
pub struct RatingsApi {
    db: DatabaseConnection,
    items: Arc<ItemStore>,
    ratings: Arc<RatingStore>,
    tokens: Arc<TokenService>,
}

impl RatingsApi {
    pub fn new(
        db: DatabaseConnection,
        items: Arc<ItemStore>,
        ratings: Arc<RatingStore>,
        tokens: Arc<TokenService>,
    ) -> Self {
        Self {
            db,
            items,
            ratings,
            tokens,
        }
    }
}

/// API tags for rating endpoints
#[derive(Tags)]
enum RatingTags {
    /// Rating endpoints
    Ratings,
}

#[OpenApi(prefix_path = "/ratings")]
impl RatingsApi {
    /// Rate a completed hand-over (1-5 stars)
    #[oai(path = "/", method = "post", tag = "RatingTags::Ratings")]
    async fn create_rating(
        &self,
        auth: BearerAuth,
        body: Json<CreateRatingRequest>,
    ) -> Result<Json<RatingResponse>, RatingsError> {
        let ctx = authenticate(&self.tokens, &auth)?;

        let item = self.items.find_by_id(&self.db, &body.item_id).await?;
        if item.is_none() {
            return Err(RatingsError::not_found(format!(
                "Item not found: {}",
                body.item_id
            )));
        }

        let rating = self.ratings.insert(&self.db, &ctx.user_id, &body).await?;
        Ok(Json(rating.into()))
    }
}
