use async_trait::async_trait;
use reqwest::Client;
use std::time::{Duration, Instant};

use super::{select_validator, FetchError, StatusSource};
use crate::modules::validator::{SummariesRequest, ValidatorStatus};

/// Validator summaries client
/// Posts the summaries query and picks out the monitored validator
pub struct HttpStatusSource {
    client: Client,
    endpoint: String,
}

impl HttpStatusSource {
    pub fn new(endpoint: String, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
            endpoint,
        }
    }

    /// Fetch every validator summary from the endpoint.
    pub async fn fetch_all(&self) -> Result<Vec<ValidatorStatus>, FetchError> {
        let start = Instant::now();

        let response = self
            .client
            .post(&self.endpoint)
            .json(&SummariesRequest::default())
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(map_transport_error)?;
        let validators: Vec<ValidatorStatus> =
            serde_json::from_slice(&body).map_err(|e| FetchError::Parse(e.to_string()))?;

        tracing::info!(
            count = validators.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "API returned validator summaries"
        );

        Ok(validators)
    }
}

#[async_trait]
impl StatusSource for HttpStatusSource {
    async fn fetch(&self, address: &str) -> Result<ValidatorStatus, FetchError> {
        let validators = self.fetch_all().await?;
        select_validator(validators, address)
    }
}

fn map_transport_error(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::Network(e.to_string())
    }
}
