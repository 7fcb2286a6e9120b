pub mod discord;

pub use discord::*;

use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Webhook returned status: {0}")]
    Status(u16),
}

/// Outbound channel for alert text.
///
/// Delivery is best effort. Callers log a failure and move on; nothing is retried.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    async fn notify(&self, message: &str) -> Result<(), DeliveryError>;
}
