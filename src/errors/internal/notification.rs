use thiserror::Error;

/// Errors from the email provider or the outbox dispatcher.
///
/// Always caught and logged; never surfaced as a failure of the lifecycle
/// operation that enqueued the notification.
#[derive(Error, Debug)]
pub enum NotificationError {
    #[error("Email transport error: {0}")]
    Transport(String),

    #[error("Email provider rejected the message ({status}): {body}")]
    Provider { status: u16, body: String },
}
