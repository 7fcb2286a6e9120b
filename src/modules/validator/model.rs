use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of one validator as returned by the summaries endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatorStatus {
    /// On-chain address of the validator
    pub validator: String,
    #[serde(default)]
    pub name: String,
    pub is_jailed: bool,
    pub is_active: bool,
    #[serde(default)]
    pub commission: String,
    /// Epoch milliseconds after which the validator may unjail (only set while jailed)
    #[serde(default)]
    pub unjailable_after: Option<i64>,
}

impl ValidatorStatus {
    /// Case-insensitive address match
    pub fn matches_address(&self, address: &str) -> bool {
        self.validator.eq_ignore_ascii_case(address)
    }

    /// Unjail eligibility as a UTC timestamp, if the record carries one.
    pub fn unjailable_at(&self) -> Option<DateTime<Utc>> {
        let millis = self.unjailable_after?;
        DateTime::from_timestamp(millis.div_euclid(1000), 0)
    }

    /// Unjail eligibility rendered as RFC3339 (second precision, `Z` suffix).
    pub fn unjailable_at_rfc3339(&self) -> Option<String> {
        self.unjailable_at()
            .map(|at| at.to_rfc3339_opts(SecondsFormat::Secs, true))
    }

    /// Name used for display: the record's name, else a truncated address.
    /// Never used for matching.
    pub fn display_name(&self, configured_address: &str) -> String {
        if !self.name.is_empty() {
            return self.name.clone();
        }
        let prefix: String = configured_address.chars().take(10).collect();
        format!("{}...", prefix)
    }

    /// Identifier used in every alert message: `name (address)`.
    pub fn identifier(&self, configured_address: &str) -> String {
        format_identifier(&self.display_name(configured_address), configured_address)
    }
}

/// `"<name> (<address>)"` when a name is known, otherwise the bare address.
pub fn format_identifier(name: &str, address: &str) -> String {
    if name.is_empty() {
        address.to_string()
    } else {
        format!("{} ({})", name, address)
    }
}
