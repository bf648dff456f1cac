use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use crate::errors::InternalError;
use crate::types::db::item;
use crate::types::db::request::{self, Entity as Request, PreferredContact, RequestStatus};

/// Repository for pickup request rows.
#[derive(Default)]
pub struct RequestStore;

pub struct NewRequest<'a> {
    pub item_id: &'a str,
    pub requester_id: &'a str,
    pub requester_name: &'a str,
    pub requester_email: &'a str,
    pub message: &'a str,
    pub preferred_contact: PreferredContact,
}

impl RequestStore {
    pub fn new() -> Self {
        Self
    }

    /// Insert a new request; requests always start Pending
    pub async fn insert<C: ConnectionTrait>(
        &self,
        conn: &C,
        new: NewRequest<'_>,
    ) -> Result<request::Model, InternalError> {
        let now = Utc::now().timestamp();
        let model = request::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            item_id: Set(new.item_id.to_string()),
            requester_id: Set(new.requester_id.to_string()),
            requester_name: Set(new.requester_name.to_string()),
            requester_email: Set(new.requester_email.to_string()),
            message: Set(new.message.to_string()),
            preferred_contact: Set(new.preferred_contact),
            status: Set(RequestStatus::Pending),
            created_at: Set(now),
            updated_at: Set(now),
        };

        model
            .insert(conn)
            .await
            .map_err(|e| InternalError::database("insert_request", e))
    }

    pub async fn find_by_id<C: ConnectionTrait>(
        &self,
        conn: &C,
        request_id: &str,
    ) -> Result<Option<request::Model>, InternalError> {
        Request::find_by_id(request_id)
            .one(conn)
            .await
            .map_err(|e| InternalError::database("find_request_by_id", e))
    }

    /// Conditionally move a request to `status`: the write only lands while
    /// the row still holds one of `expected`. Returns whether a row changed.
    pub async fn set_status_if<C: ConnectionTrait>(
        &self,
        conn: &C,
        request_id: &str,
        expected: &[RequestStatus],
        status: RequestStatus,
    ) -> Result<bool, InternalError> {
        let result = Request::update_many()
            .col_expr(request::Column::Status, Expr::value(status))
            .col_expr(request::Column::UpdatedAt, Expr::value(Utc::now().timestamp()))
            .filter(request::Column::Id.eq(request_id))
            .filter(request::Column::Status.is_in(expected.iter().copied()))
            .exec(conn)
            .await
            .map_err(|e| InternalError::database("set_request_status_if", e))?;

        Ok(result.rows_affected == 1)
    }

    /// First-owner-choice cascade: reject every other Pending request on the
    /// item. Returns how many siblings were rejected.
    pub async fn reject_pending_siblings<C: ConnectionTrait>(
        &self,
        conn: &C,
        item_id: &str,
        keep_request_id: &str,
    ) -> Result<u64, InternalError> {
        let result = Request::update_many()
            .col_expr(request::Column::Status, Expr::value(RequestStatus::Rejected))
            .col_expr(request::Column::UpdatedAt, Expr::value(Utc::now().timestamp()))
            .filter(request::Column::ItemId.eq(item_id))
            .filter(request::Column::Status.eq(RequestStatus::Pending))
            .filter(request::Column::Id.ne(keep_request_id))
            .exec(conn)
            .await
            .map_err(|e| InternalError::database("reject_pending_siblings", e))?;

        Ok(result.rows_affected)
    }

    /// Whether any other request on the item holds one of `statuses`
    pub async fn has_sibling_with_status<C: ConnectionTrait>(
        &self,
        conn: &C,
        item_id: &str,
        exclude_request_id: &str,
        statuses: &[RequestStatus],
    ) -> Result<bool, InternalError> {
        let count = Request::find()
            .filter(request::Column::ItemId.eq(item_id))
            .filter(request::Column::Id.ne(exclude_request_id))
            .filter(request::Column::Status.is_in(statuses.iter().copied()))
            .count(conn)
            .await
            .map_err(|e| InternalError::database("has_sibling_with_status", e))?;

        Ok(count > 0)
    }

    /// Requests made by `requester_id`, joined with their item, newest first
    pub async fn list_by_requester<C: ConnectionTrait>(
        &self,
        conn: &C,
        requester_id: &str,
    ) -> Result<Vec<(request::Model, Option<item::Model>)>, InternalError> {
        Request::find()
            .find_also_related(item::Entity)
            .filter(request::Column::RequesterId.eq(requester_id))
            .order_by_desc(request::Column::CreatedAt)
            .all(conn)
            .await
            .map_err(|e| InternalError::database("list_requests_by_requester", e))
    }

    /// Requests targeting items owned by `owner_id`, joined with their item,
    /// newest first
    pub async fn list_for_owner<C: ConnectionTrait>(
        &self,
        conn: &C,
        owner_id: &str,
    ) -> Result<Vec<(request::Model, Option<item::Model>)>, InternalError> {
        Request::find()
            .find_also_related(item::Entity)
            .filter(item::Column::UserId.eq(owner_id))
            .order_by_desc(request::Column::CreatedAt)
            .all(conn)
            .await
            .map_err(|e| InternalError::database("list_requests_for_owner", e))
    }
}
