use async_trait::async_trait;
use serde_json::json;

use crate::errors::internal::NotificationError;

const RESEND_ENDPOINT: &str = "https://api.resend.com/emails";

/// Outbound email seam.
///
/// The dispatcher only sees this trait, so tests swap in a recording
/// implementation and deployments without a provider key fall back to
/// logging.
#[async_trait]
pub trait EmailClient: Send + Sync {
    async fn send(&self, to: &str, subject: &str, text: &str) -> Result<(), NotificationError>;
}

/// Email client backed by the Resend transactional email API
pub struct ResendClient {
    http: reqwest::Client,
    api_key: String,
    from: String,
}

impl ResendClient {
    pub fn new(api_key: String, from: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            from,
        }
    }
}

#[async_trait]
impl EmailClient for ResendClient {
    async fn send(&self, to: &str, subject: &str, text: &str) -> Result<(), NotificationError> {
        let response = self
            .http
            .post(RESEND_ENDPOINT)
            .bearer_auth(&self.api_key)
            .json(&json!({
                "from": self.from,
                "to": [to],
                "subject": subject,
                "text": text,
            }))
            .send()
            .await
            .map_err(|e| NotificationError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NotificationError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}

/// Fallback used when no provider key is configured: the message is logged
/// instead of sent.
pub struct LogOnlyMailer;

#[async_trait]
impl EmailClient for LogOnlyMailer {
    async fn send(&self, to: &str, subject: &str, _text: &str) -> Result<(), NotificationError> {
        tracing::info!(to = %to, subject = %subject, "email provider not configured - message logged only");
        Ok(())
    }
}
