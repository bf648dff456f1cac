use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use crate::errors::InternalError;
use crate::types::db::notification::{self, Entity as Notification, NotificationStatus};

/// Repository for the outbound email outbox.
///
/// Lifecycle operations enqueue rows inside their own transaction; the
/// dispatcher drains Pending rows and records the outcome.
#[derive(Default)]
pub struct NotificationStore;

impl NotificationStore {
    pub fn new() -> Self {
        Self
    }

    pub async fn enqueue<C: ConnectionTrait>(
        &self,
        conn: &C,
        kind: &str,
        recipient: &str,
        subject: &str,
        body: &str,
    ) -> Result<(), InternalError> {
        let model = notification::ActiveModel {
            id: sea_orm::ActiveValue::NotSet,
            kind: Set(kind.to_string()),
            recipient: Set(recipient.to_string()),
            subject: Set(subject.to_string()),
            body: Set(body.to_string()),
            status: Set(NotificationStatus::Pending),
            attempts: Set(0),
            last_error: Set(None),
            created_at: Set(Utc::now().timestamp()),
            sent_at: Set(None),
        };

        model
            .insert(conn)
            .await
            .map_err(|e| InternalError::database("enqueue_notification", e))?;

        Ok(())
    }

    /// Fetch the oldest Pending rows, up to `limit`
    pub async fn fetch_pending<C: ConnectionTrait>(
        &self,
        conn: &C,
        limit: u64,
    ) -> Result<Vec<notification::Model>, InternalError> {
        Notification::find()
            .filter(notification::Column::Status.eq(NotificationStatus::Pending))
            .order_by_asc(notification::Column::Id)
            .limit(limit)
            .all(conn)
            .await
            .map_err(|e| InternalError::database("fetch_pending_notifications", e))
    }

    pub async fn mark_sent<C: ConnectionTrait>(
        &self,
        conn: &C,
        row: notification::Model,
    ) -> Result<(), InternalError> {
        let attempts = row.attempts + 1;
        let mut active: notification::ActiveModel = row.into();
        active.status = Set(NotificationStatus::Sent);
        active.attempts = Set(attempts);
        active.last_error = Set(None);
        active.sent_at = Set(Some(Utc::now().timestamp()));

        active
            .update(conn)
            .await
            .map_err(|e| InternalError::database("mark_notification_sent", e))?;

        Ok(())
    }

    /// Record a failed attempt. The row stays Pending until `max_attempts`
    /// is reached, after which it is parked as Failed.
    pub async fn mark_failed<C: ConnectionTrait>(
        &self,
        conn: &C,
        row: notification::Model,
        error: &str,
        max_attempts: i32,
    ) -> Result<(), InternalError> {
        let attempts = row.attempts + 1;
        let mut active: notification::ActiveModel = row.into();
        active.attempts = Set(attempts);
        active.last_error = Set(Some(error.to_string()));
        active.status = Set(if attempts >= max_attempts {
            NotificationStatus::Failed
        } else {
            NotificationStatus::Pending
        });

        active
            .update(conn)
            .await
            .map_err(|e| InternalError::database("mark_notification_failed", e))?;

        Ok(())
    }
}
