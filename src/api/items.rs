use std::sync::Arc;

use poem_openapi::{
    param::{Path, Query},
    payload::Json,
    OpenApi, Tags,
};
use sea_orm::DatabaseConnection;

use crate::api::helpers::{authenticate, BearerAuth};
use crate::errors::ItemsError;
use crate::services::TokenService;
use crate::stores::ItemStore;
use crate::types::db::item::ItemCategory;
use crate::types::dto::items::{CreateItemRequest, ItemFilter, ItemResponse, ItemStatsResponse};

/// Item listing endpoints
pub struct ItemsApi {
    db: DatabaseConnection,
    items: Arc<ItemStore>,
    tokens: Arc<TokenService>,
}

impl ItemsApi {
    pub fn new(db: DatabaseConnection, items: Arc<ItemStore>, tokens: Arc<TokenService>) -> Self {
        Self { db, items, tokens }
    }
}

/// API tags for item endpoints
#[derive(Tags)]
enum ItemTags {
    /// Item management endpoints
    Items,
}

#[OpenApi(prefix_path = "/items")]
impl ItemsApi {
    /// Post a new item
    ///
    /// Accepts item details and returns the created listing with generated
    /// id and timestamps. New items always start Available.
    #[oai(path = "/", method = "post", tag = "ItemTags::Items")]
    async fn create_item(
        &self,
        auth: BearerAuth,
        body: Json<CreateItemRequest>,
    ) -> Result<Json<ItemResponse>, ItemsError> {
        let ctx = authenticate(&self.tokens, &auth)?;
        let item = self.items.insert(&self.db, &ctx.user_id, &body).await?;
        Ok(Json(item.into()))
    }

    /// Browse Available items
    ///
    /// Read-side projection for the listing pages: only Available items,
    /// optionally narrowed by free-text, category and city/postcode filters.
    #[oai(path = "/", method = "get", tag = "ItemTags::Items")]
    async fn list_items(
        &self,
        q: Query<Option<String>>,
        category: Query<Option<ItemCategory>>,
        location: Query<Option<String>>,
    ) -> Result<Json<Vec<ItemResponse>>, ItemsError> {
        let filter = ItemFilter {
            query: q.0,
            category: category.0,
            location: location.0,
        };
        let items = self.items.list_available(&self.db, &filter).await?;
        Ok(Json(items.into_iter().map(Into::into).collect()))
    }

    /// Dashboard counts of the authenticated user's items by status
    #[oai(path = "/stats", method = "get", tag = "ItemTags::Items")]
    async fn item_stats(&self, auth: BearerAuth) -> Result<Json<ItemStatsResponse>, ItemsError> {
        let ctx = authenticate(&self.tokens, &auth)?;
        let stats = self.items.stats_for_user(&self.db, &ctx.user_id).await?;
        Ok(Json(stats))
    }

    /// Fetch a single item by id
    #[oai(path = "/:item_id", method = "get", tag = "ItemTags::Items")]
    async fn get_item(&self, item_id: Path<String>) -> Result<Json<ItemResponse>, ItemsError> {
        let item = self
            .items
            .find_by_id(&self.db, &item_id)
            .await?
            .ok_or_else(|| ItemsError::not_found(format!("Item not found: {}", item_id.0)))?;
        Ok(Json(item.into()))
    }
}
