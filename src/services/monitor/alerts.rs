use std::time::Duration;

use super::backoff::AlertKind;
use super::state::Transition;
use crate::config::format_interval;

/// A notification the monitor decided to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alert {
    Jailed { unjailable_after: Option<String> },
    Inactive,
    RecoveredFromJailed,
    BecameActive,
}

impl Alert {
    /// Throttling bucket this alert is accounted against.
    pub fn kind(&self) -> AlertKind {
        match self {
            Self::Jailed { .. } => AlertKind::Jailed,
            Self::Inactive => AlertKind::Inactive,
            Self::RecoveredFromJailed | Self::BecameActive => AlertKind::Recovery,
        }
    }

    pub fn render(&self, identifier: &str) -> String {
        match self {
            Self::Jailed { unjailable_after } => {
                let suffix = unjailable_after
                    .as_deref()
                    .map(|at| format!(" (unjailable after {})", at))
                    .unwrap_or_default();
                format!("🚨 Validator {} is JAILED{}", identifier, suffix)
            }
            Self::Inactive => format!("🚨 Validator {} is INACTIVE", identifier),
            Self::RecoveredFromJailed => {
                format!("✅ Validator {} has RECOVERED from jailed state", identifier)
            }
            Self::BecameActive => format!("✅ Validator {} is now ACTIVE", identifier),
        }
    }
}

impl From<Transition> for Alert {
    fn from(transition: Transition) -> Self {
        match transition {
            Transition::RecoveredFromJailed => Self::RecoveredFromJailed,
            Transition::BecameActive => Self::BecameActive,
        }
    }
}

/// One-off message sent before the first poll.
pub fn startup_message(address: &str, interval: Duration) -> String {
    format!(
        "🔄 Validator monitoring started for {} (checking every {})",
        address,
        format_interval(interval)
    )
}
