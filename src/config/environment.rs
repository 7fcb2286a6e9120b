use std::env;
use std::time::Duration;

use super::interval::parse_interval;

const DEFAULT_INTERVAL: &str = "1m";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("ENV variable {0} is required")]
    Missing(&'static str),
    #[error("Invalid CRON_INTERVAL '{value}': {reason}")]
    InvalidInterval { value: String, reason: String },
    #[error("Invalid {var} '{value}': expected a positive integer")]
    InvalidNumber { var: &'static str, value: String },
}

/// Environment configuration
/// Loads and validates environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub api_endpoint: String,
    pub validator_address: String,
    pub discord_webhook: String,
    pub interval: Duration,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let api_endpoint = required("API_ENDPOINT")?;
        let validator_address = required("VALIDATOR_ADDRESS")?;
        let discord_webhook = required("DISCORD_WEBHOOK")?;

        let interval = optional("CRON_INTERVAL").unwrap_or_else(|| DEFAULT_INTERVAL.to_string());
        let interval = parse_interval(&interval)?;

        let request_timeout = match optional("REQUEST_TIMEOUT_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::InvalidNumber {
                        var: "REQUEST_TIMEOUT_SECS",
                        value: raw,
                    })
                }
            },
            None => Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        };

        Ok(Self {
            api_endpoint,
            validator_address,
            discord_webhook,
            interval,
            request_timeout,
        })
    }
}

fn optional(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn required(key: &'static str) -> Result<String, ConfigError> {
    optional(key).ok_or(ConfigError::Missing(key))
}
