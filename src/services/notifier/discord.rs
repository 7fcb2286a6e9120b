use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

use super::{DeliveryError, NotificationSink};
use crate::modules::validator::WebhookMessage;

const WEBHOOK_TIMEOUT_SECS: u64 = 10;

/// Discord webhook client
pub struct DiscordNotifier {
    client: Client,
    webhook_url: String,
}

impl DiscordNotifier {
    pub fn new(webhook_url: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(WEBHOOK_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();

        Self {
            client,
            webhook_url,
        }
    }
}

#[async_trait]
impl NotificationSink for DiscordNotifier {
    async fn notify(&self, message: &str) -> Result<(), DeliveryError> {
        let response = self
            .client
            .post(&self.webhook_url)
            .json(&WebhookMessage { content: message })
            .send()
            .await
            .map_err(|e| DeliveryError::Network(e.to_string()))?;

        // Discord answers 204 for webhooks without ?wait=true
        match response.status() {
            StatusCode::OK | StatusCode::NO_CONTENT => {
                tracing::info!(content = message, "Sent Discord alert");
                Ok(())
            }
            other => Err(DeliveryError::Status(other.as_u16())),
        }
    }
}
