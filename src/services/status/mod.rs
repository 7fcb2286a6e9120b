pub mod client;

pub use client::*;

use async_trait::async_trait;

use crate::modules::validator::ValidatorStatus;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("API request failed: {0}")]
    Network(String),
    #[error("API request timed out")]
    Timeout,
    #[error("API returned non-success status: {0}")]
    Status(u16),
    #[error("error parsing API response: {0}")]
    Parse(String),
    #[error("validator with address '{address}' not found among {total} validators")]
    NotFound { address: String, total: usize },
}

/// Source of validator status snapshots.
#[async_trait]
pub trait StatusSource: Send + Sync {
    async fn fetch(&self, address: &str) -> Result<ValidatorStatus, FetchError>;
}

/// Pick the entry matching `address`, ignoring letter case.
pub fn select_validator(
    validators: Vec<ValidatorStatus>,
    address: &str,
) -> Result<ValidatorStatus, FetchError> {
    let total = validators.len();
    validators
        .into_iter()
        .find(|v| v.matches_address(address))
        .ok_or_else(|| FetchError::NotFound {
            address: address.to_string(),
            total,
        })
}
