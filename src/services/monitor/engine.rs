use std::sync::Arc;
use std::time::{Duration, Instant};

use super::alerts::{startup_message, Alert};
use super::backoff::{AlertKind, BackoffTimer};
use super::state::ObservedState;
use crate::config::format_interval;
use crate::modules::validator::ValidatorStatus;
use crate::services::notifier::NotificationSink;
use crate::services::status::{FetchError, StatusSource};

/// Everything the monitor remembers between polls.
#[derive(Debug, Clone, Default)]
pub struct MonitorContext {
    pub observed: ObservedState,
    pub backoff: BackoffTimer,
}

impl MonitorContext {
    pub fn new(backoff: BackoffTimer) -> Self {
        Self {
            observed: ObservedState::default(),
            backoff,
        }
    }
}

/// Polls one validator and turns status changes into throttled alerts.
pub struct MonitorEngine {
    source: Arc<dyn StatusSource>,
    sink: Arc<dyn NotificationSink>,
    address: String,
    interval: Duration,
    context: MonitorContext,
}

impl MonitorEngine {
    pub fn new(
        source: Arc<dyn StatusSource>,
        sink: Arc<dyn NotificationSink>,
        address: String,
        interval: Duration,
    ) -> Self {
        Self {
            source,
            sink,
            address,
            interval,
            context: MonitorContext::default(),
        }
    }

    /// Replace the default 1m/15m backoff policy.
    pub fn with_backoff(mut self, backoff: BackoffTimer) -> Self {
        self.context = MonitorContext::new(backoff);
        self
    }

    pub fn context(&self) -> &MonitorContext {
        &self.context
    }

    /// Announce startup, then poll forever. Fetch failures only skip the current cycle.
    pub async fn run(&mut self) {
        self.announce_startup().await;

        loop {
            if let Err(e) = self.run_check(Instant::now()).await {
                tracing::error!(error = %e, "Error fetching validator data");
            }

            tracing::info!(
                interval = %format_interval(self.interval),
                "Sleeping before next check"
            );
            tokio::time::sleep(self.interval).await;
        }
    }

    /// Unconditional startup message; does not touch any backoff bucket.
    pub async fn announce_startup(&self) {
        let message = startup_message(&self.address, self.interval);
        self.deliver(&message).await;
    }

    /// One poll cycle evaluated at `now`. Returns the alerts that were sent.
    ///
    /// On a fetch failure nothing is sent and no state changes.
    pub async fn run_check(&mut self, now: Instant) -> Result<Vec<Alert>, FetchError> {
        let started = Instant::now();
        tracing::info!(address = %self.address, "Fetching validator status");

        let status = self.source.fetch(&self.address).await?;
        let identifier = status.identifier(&self.address);

        tracing::info!(
            validator = %identifier,
            active = status.is_active,
            jailed = status.is_jailed,
            commission = %status.commission,
            "Validator status"
        );

        let mut sent = self.process_recoveries(&status, &identifier, now).await;
        self.context.observed.update(&status);
        sent.extend(self.process_alerts(&status, &identifier, now).await);

        tracing::info!(
            validator = %identifier,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Validator monitor check complete"
        );

        Ok(sent)
    }

    async fn process_recoveries(
        &mut self,
        status: &ValidatorStatus,
        identifier: &str,
        now: Instant,
    ) -> Vec<Alert> {
        let mut sent = Vec::new();

        for transition in self.context.observed.transitions(status) {
            let alert = Alert::from(transition);
            tracing::info!(validator = %identifier, ?transition, "Recovery detected");

            if self.context.backoff.permits(AlertKind::Recovery, now) {
                self.deliver(&alert.render(identifier)).await;
                self.context.backoff.record(AlertKind::Recovery, now);
                sent.push(alert);
            } else {
                tracing::debug!(validator = %identifier, ?transition, "Recovery alert throttled");
            }

            // a fresh transition is never throttled by an earlier one
            self.context.backoff.reset(AlertKind::Recovery);
        }

        sent
    }

    async fn process_alerts(
        &mut self,
        status: &ValidatorStatus,
        identifier: &str,
        now: Instant,
    ) -> Vec<Alert> {
        let mut sent = Vec::new();

        let jailed = status.is_jailed.then(|| Alert::Jailed {
            unjailable_after: status.unjailable_at_rfc3339(),
        });
        let inactive = (!status.is_active).then_some(Alert::Inactive);

        for (kind, alert) in [(AlertKind::Jailed, jailed), (AlertKind::Inactive, inactive)] {
            let Some(alert) = alert else {
                self.context.backoff.reset(kind);
                continue;
            };

            if !self.context.backoff.permits(kind, now) {
                tracing::debug!(
                    validator = %identifier,
                    kind = kind.as_str(),
                    wait_secs = self.context.backoff.wait(kind).as_secs(),
                    "Alert throttled"
                );
                continue;
            }

            let message = alert.render(identifier);
            tracing::warn!(validator = %identifier, kind = kind.as_str(), "Alert: {}", message);
            self.deliver(&message).await;
            self.context.backoff.record(kind, now);
            sent.push(alert);
        }

        sent
    }

    /// Best-effort send: failures are logged and otherwise ignored.
    async fn deliver(&self, message: &str) {
        if let Err(e) = self.sink.notify(message).await {
            tracing::error!(error = %e, "Failed to send notification");
        }
    }
}
