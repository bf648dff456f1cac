use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, FromQueryResult,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use crate::errors::InternalError;
use crate::types::db::item::{self, Entity as Item, ItemStatus};
use crate::types::dto::items::{CreateItemRequest, ItemFilter, ItemStatsResponse};

/// Repository for item rows.
///
/// Methods are generic over `ConnectionTrait` so the same queries run against
/// the pooled connection or inside an open transaction.
#[derive(Default)]
pub struct ItemStore;

impl ItemStore {
    pub fn new() -> Self {
        Self
    }

    /// Insert a new item posted by `user_id`; new items always start Available
    pub async fn insert<C: ConnectionTrait>(
        &self,
        conn: &C,
        user_id: &str,
        input: &CreateItemRequest,
    ) -> Result<item::Model, InternalError> {
        let now = Utc::now().timestamp();
        let model = item::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            title: Set(input.title.clone()),
            description: Set(input.description.clone()),
            category: Set(input.category),
            condition: Set(input.condition),
            postcode: Set(input.postcode.clone()),
            city: Set(input.city.clone()),
            image_url: Set(input.image_url.clone()),
            contact_name: Set(input.contact_name.clone()),
            contact_phone: Set(input.contact_phone.clone()),
            contact_email: Set(input.contact_email.clone()),
            user_id: Set(user_id.to_string()),
            status: Set(ItemStatus::Available),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model
            .insert(conn)
            .await
            .map_err(|e| InternalError::database("insert_item", e))?;

        Ok(inserted)
    }

    pub async fn find_by_id<C: ConnectionTrait>(
        &self,
        conn: &C,
        item_id: &str,
    ) -> Result<Option<item::Model>, InternalError> {
        Item::find_by_id(item_id)
            .one(conn)
            .await
            .map_err(|e| InternalError::database("find_item_by_id", e))
    }

    /// List Available items for the public browse pages, newest first.
    ///
    /// Optional filters: substring match on title/description, category
    /// equality, substring match on city/postcode.
    pub async fn list_available<C: ConnectionTrait>(
        &self,
        conn: &C,
        filter: &ItemFilter,
    ) -> Result<Vec<item::Model>, InternalError> {
        let mut cond = Condition::all().add(item::Column::Status.eq(ItemStatus::Available));

        if let Some(q) = filter.query.as_deref().filter(|q| !q.trim().is_empty()) {
            cond = cond.add(
                Condition::any()
                    .add(item::Column::Title.contains(q))
                    .add(item::Column::Description.contains(q)),
            );
        }

        if let Some(category) = filter.category {
            cond = cond.add(item::Column::Category.eq(category));
        }

        if let Some(loc) = filter.location.as_deref().filter(|l| !l.trim().is_empty()) {
            cond = cond.add(
                Condition::any()
                    .add(item::Column::City.contains(loc))
                    .add(item::Column::Postcode.contains(loc)),
            );
        }

        Item::find()
            .filter(cond)
            .order_by_desc(item::Column::CreatedAt)
            .all(conn)
            .await
            .map_err(|e| InternalError::database("list_available_items", e))
    }

    /// Unconditionally set an item's status
    pub async fn set_status<C: ConnectionTrait>(
        &self,
        conn: &C,
        item_id: &str,
        status: ItemStatus,
    ) -> Result<(), InternalError> {
        Item::update_many()
            .col_expr(item::Column::Status, Expr::value(status))
            .col_expr(item::Column::UpdatedAt, Expr::value(Utc::now().timestamp()))
            .filter(item::Column::Id.eq(item_id))
            .exec(conn)
            .await
            .map_err(|e| InternalError::database("set_item_status", e))?;
        Ok(())
    }

    /// Conditionally set an item's status: the write only lands if the row
    /// still holds `expected`. Returns whether a row changed, which is the
    /// atomic check-and-set used to serialize competing approvals.
    pub async fn set_status_if<C: ConnectionTrait>(
        &self,
        conn: &C,
        item_id: &str,
        expected: ItemStatus,
        status: ItemStatus,
    ) -> Result<bool, InternalError> {
        let result = Item::update_many()
            .col_expr(item::Column::Status, Expr::value(status))
            .col_expr(item::Column::UpdatedAt, Expr::value(Utc::now().timestamp()))
            .filter(item::Column::Id.eq(item_id))
            .filter(item::Column::Status.eq(expected))
            .exec(conn)
            .await
            .map_err(|e| InternalError::database("set_item_status_if", e))?;

        Ok(result.rows_affected == 1)
    }

    /// Dashboard counts of a user's posted items by status
    pub async fn stats_for_user<C: ConnectionTrait>(
        &self,
        conn: &C,
        user_id: &str,
    ) -> Result<ItemStatsResponse, InternalError> {
        #[derive(FromQueryResult)]
        struct StatusCount {
            status: ItemStatus,
            count: i64,
        }

        let rows: Vec<StatusCount> = Item::find()
            .select_only()
            .column(item::Column::Status)
            .column_as(item::Column::Id.count(), "count")
            .filter(item::Column::UserId.eq(user_id))
            .group_by(item::Column::Status)
            .into_model::<StatusCount>()
            .all(conn)
            .await
            .map_err(|e| InternalError::database("item_stats_for_user", e))?;

        let mut stats = ItemStatsResponse {
            total: 0,
            available: 0,
            reserved: 0,
            collected: 0,
        };
        for row in rows {
            let count = row.count.max(0) as u64;
            stats.total += count;
            match row.status {
                ItemStatus::Available => stats.available += count,
                ItemStatus::Reserved => stats.reserved += count,
                ItemStatus::Collected => stats.collected += count,
                ItemStatus::Expired => {}
            }
        }
        Ok(stats)
    }

    /// Number of items currently holding `status` (test and ops helper)
    pub async fn count_with_status<C: ConnectionTrait>(
        &self,
        conn: &C,
        status: ItemStatus,
    ) -> Result<u64, InternalError> {
        Item::find()
            .filter(item::Column::Status.eq(status))
            .count(conn)
            .await
            .map_err(|e| InternalError::database("count_items_with_status", e))
    }
}
