use std::sync::Arc;
use std::time::Duration;

use sea_orm::DatabaseConnection;
use tokio::task::JoinHandle;

use crate::errors::InternalError;
use crate::services::mailer::EmailClient;
use crate::stores::NotificationStore;

const BATCH_SIZE: u64 = 20;
const MAX_ATTEMPTS: i32 = 3;

/// Drains the notification outbox and hands messages to the email client.
///
/// Runs decoupled from the lifecycle transactions that enqueue rows: a slow
/// or failing provider delays email, never status transitions. Failures are
/// logged and retried up to `MAX_ATTEMPTS`, then parked as Failed.
pub struct NotificationDispatcher {
    db: DatabaseConnection,
    store: Arc<NotificationStore>,
    mailer: Arc<dyn EmailClient>,
}

impl NotificationDispatcher {
    pub fn new(
        db: DatabaseConnection,
        store: Arc<NotificationStore>,
        mailer: Arc<dyn EmailClient>,
    ) -> Self {
        Self { db, store, mailer }
    }

    /// Send one batch of pending notifications. Returns how many were sent.
    pub async fn dispatch_pending(&self) -> Result<usize, InternalError> {
        let pending = self.store.fetch_pending(&self.db, BATCH_SIZE).await?;
        let mut sent = 0;

        for row in pending {
            let id = row.id;
            let kind = row.kind.clone();
            match self.mailer.send(&row.recipient, &row.subject, &row.body).await {
                Ok(()) => {
                    tracing::info!(notification_id = id, kind = %kind, "notification sent");
                    self.store.mark_sent(&self.db, row).await?;
                    sent += 1;
                }
                Err(e) => {
                    tracing::warn!(
                        notification_id = id,
                        kind = %kind,
                        error = %e,
                        "notification send failed"
                    );
                    self.store
                        .mark_failed(&self.db, row, &e.to_string(), MAX_ATTEMPTS)
                        .await?;
                }
            }
        }

        Ok(sent)
    }

    /// Run the dispatch loop on a fixed interval until the process exits
    pub fn spawn(self: Arc<Self>, interval: Duration) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                ticker.tick().await;
                if let Err(e) = self.dispatch_pending().await {
                    tracing::error!(error = %e, "notification dispatch cycle failed");
                }
            }
        })
    }
}
