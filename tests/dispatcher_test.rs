mod common;

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use sea_orm::EntityTrait;

use common::setup;
use reusela_backend::errors::internal::NotificationError;
use reusela_backend::services::{EmailClient, NotificationDispatcher};
use reusela_backend::types::db::notification::{self, NotificationStatus};

/// Captures every send instead of talking to a provider
struct RecordingMailer {
    sent: Mutex<Vec<(String, String)>>,
}

impl RecordingMailer {
    fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl EmailClient for RecordingMailer {
    async fn send(&self, to: &str, subject: &str, _text: &str) -> Result<(), NotificationError> {
        self.sent
            .lock()
            .unwrap()
            .push((to.to_string(), subject.to_string()));
        Ok(())
    }
}

struct FailingMailer;

#[async_trait]
impl EmailClient for FailingMailer {
    async fn send(&self, _to: &str, _subject: &str, _text: &str) -> Result<(), NotificationError> {
        Err(NotificationError::Provider {
            status: 503,
            body: "service unavailable".to_string(),
        })
    }
}

#[tokio::test]
async fn dispatch_sends_pending_notifications_and_marks_them_sent() {
    let env = setup().await;

    env.notifications
        .enqueue(&env.db, "owner_new_request", "owner@example.com", "New request", "Hello")
        .await
        .unwrap();
    env.notifications
        .enqueue(&env.db, "request_approved", "alice@example.com", "Approved", "Good news")
        .await
        .unwrap();

    let mailer = Arc::new(RecordingMailer::new());
    let dispatcher =
        NotificationDispatcher::new(env.db.clone(), env.notifications.clone(), mailer.clone());

    let sent = dispatcher.dispatch_pending().await.unwrap();
    assert_eq!(sent, 2);

    let recorded = mailer.sent.lock().unwrap();
    assert_eq!(recorded.len(), 2);
    assert_eq!(recorded[0].0, "owner@example.com");
    assert_eq!(recorded[1].0, "alice@example.com");
    drop(recorded);

    let rows = notification::Entity::find().all(&env.db).await.unwrap();
    assert!(rows
        .iter()
        .all(|r| r.status == NotificationStatus::Sent && r.sent_at.is_some() && r.attempts == 1));

    // Nothing left for the next cycle
    let remaining = env.notifications.fetch_pending(&env.db, 10).await.unwrap();
    assert!(remaining.is_empty());
}

#[tokio::test]
async fn failed_sends_are_retried_then_parked_as_failed() {
    let env = setup().await;

    env.notifications
        .enqueue(&env.db, "owner_new_request", "owner@example.com", "New request", "Hello")
        .await
        .unwrap();

    let dispatcher =
        NotificationDispatcher::new(env.db.clone(), env.notifications.clone(), Arc::new(FailingMailer));

    // First two failures keep the row Pending for retry
    for expected_attempts in [1, 2] {
        let sent = dispatcher.dispatch_pending().await.unwrap();
        assert_eq!(sent, 0);

        let rows = notification::Entity::find().all(&env.db).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].status, NotificationStatus::Pending);
        assert_eq!(rows[0].attempts, expected_attempts);
        assert!(rows[0]
            .last_error
            .as_deref()
            .unwrap_or_default()
            .contains("503"));
    }

    // Third failure exhausts the retry budget
    dispatcher.dispatch_pending().await.unwrap();
    let rows = notification::Entity::find().all(&env.db).await.unwrap();
    assert_eq!(rows[0].status, NotificationStatus::Failed);
    assert_eq!(rows[0].attempts, 3);

    // Failed rows are no longer picked up
    let sent = dispatcher.dispatch_pending().await.unwrap();
    assert_eq!(sent, 0);
    let rows = notification::Entity::find().all(&env.db).await.unwrap();
    assert_eq!(rows[0].attempts, 3);
}

#[tokio::test]
async fn a_failing_row_does_not_block_the_rest_of_the_batch() {
    let env = setup().await;

    env.notifications
        .enqueue(&env.db, "owner_new_request", "owner@example.com", "New request", "Hello")
        .await
        .unwrap();

    // Fails every row, then a recording run confirms the row is still eligible
    let failing =
        NotificationDispatcher::new(env.db.clone(), env.notifications.clone(), Arc::new(FailingMailer));
    failing.dispatch_pending().await.unwrap();

    let mailer = Arc::new(RecordingMailer::new());
    let recovering =
        NotificationDispatcher::new(env.db.clone(), env.notifications.clone(), mailer.clone());
    let sent = recovering.dispatch_pending().await.unwrap();
    assert_eq!(sent, 1);

    let rows = notification::Entity::find().all(&env.db).await.unwrap();
    assert_eq!(rows[0].status, NotificationStatus::Sent);
    assert_eq!(rows[0].attempts, 2);
}
