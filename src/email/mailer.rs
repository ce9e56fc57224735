use crate::config::EmailConfig;
use crate::errors::{AppError, Result};
use async_trait::async_trait;

/// A rendered email ready for dispatch
#[derive(Debug, Clone)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Outbound email dispatch seam
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: &EmailMessage) -> Result<()>;
}

/// Mailer backed by a transactional email provider's HTTP API.
///
/// When dispatch is disabled in configuration the send is logged and
/// reported as successful, which is the development posture: the contact
/// endpoint stays exercisable without an upstream provider.
pub struct HttpMailer {
    client: reqwest::Client,
    config: EmailConfig,
}

impl HttpMailer {
    pub fn new(config: EmailConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl Mailer for HttpMailer {
    async fn send(&self, message: &EmailMessage) -> Result<()> {
        if !self.config.enabled {
            tracing::info!(
                to = %message.to,
                subject = %message.subject,
                "Email dispatch disabled, skipping send"
            );
            return Ok(());
        }

        let payload = serde_json::json!({
            "from": self.config.from,
            "to": message.to,
            "subject": message.subject,
            "html": message.html,
        });

        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| AppError::EmailDelivery(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::EmailDelivery(format!(
                "Provider returned status {}",
                response.status()
            )));
        }

        tracing::info!(to = %message.to, subject = %message.subject, "Email sent");

        Ok(())
    }
}
