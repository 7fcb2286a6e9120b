use std::time::{Duration, Instant};

/// Base wait between repeated alerts of one kind.
pub const BASE_INTERVAL: Duration = Duration::from_secs(60);
/// Upper bound on the wait between repeated alerts of one kind.
pub const MAX_INTERVAL: Duration = Duration::from_secs(15 * 60);

/// Independent throttling bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlertKind {
    Jailed,
    Inactive,
    /// Shared by both recovery transitions (unjailed, became active).
    Recovery,
}

impl AlertKind {
    pub const ALL: [AlertKind; 3] = [AlertKind::Jailed, AlertKind::Inactive, AlertKind::Recovery];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Jailed => "jailed",
            Self::Inactive => "inactive",
            Self::Recovery => "recovery",
        }
    }

    fn index(self) -> usize {
        match self {
            Self::Jailed => 0,
            Self::Inactive => 1,
            Self::Recovery => 2,
        }
    }
}

/// Throttle bookkeeping for one alert kind.
///
/// `multiplier == 0` means nothing has been sent since the last reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BackoffState {
    pub last_sent: Option<Instant>,
    pub multiplier: u32,
}

/// Exponential backoff over the three alert kinds.
///
/// Wait before the next alert of a kind = multiplier × base, capped at max.
#[derive(Debug, Clone)]
pub struct BackoffTimer {
    base: Duration,
    max: Duration,
    states: [BackoffState; 3],
}

impl Default for BackoffTimer {
    fn default() -> Self {
        Self::new(BASE_INTERVAL, MAX_INTERVAL)
    }
}

impl BackoffTimer {
    pub fn new(base: Duration, max: Duration) -> Self {
        Self {
            base,
            max: max.max(base),
            states: [BackoffState::default(); 3],
        }
    }

    /// Multiplier ceiling: `max / base`, never below 1.
    pub fn max_multiplier(&self) -> u32 {
        let ratio = self.max.as_nanos() / self.base.as_nanos().max(1);
        ratio.clamp(1, u32::MAX as u128) as u32
    }

    pub fn state(&self, kind: AlertKind) -> &BackoffState {
        &self.states[kind.index()]
    }

    /// Current minimum wait before another alert of `kind` may go out.
    pub fn wait(&self, kind: AlertKind) -> Duration {
        self.base * self.state(kind).multiplier
    }

    /// True if nothing was sent for `kind` yet, or its wait has elapsed by `now`.
    pub fn permits(&self, kind: AlertKind, now: Instant) -> bool {
        match self.state(kind).last_sent {
            None => true,
            Some(sent) => now.saturating_duration_since(sent) >= self.wait(kind),
        }
    }

    /// Account for an alert of `kind` sent at `now`: 0 -> 1, otherwise double up to the cap.
    pub fn record(&mut self, kind: AlertKind, now: Instant) {
        let ceiling = self.max_multiplier();
        let state = &mut self.states[kind.index()];
        state.last_sent = Some(now);
        state.multiplier = match state.multiplier {
            0 => 1,
            m => m.saturating_mul(2).min(ceiling),
        };
    }

    /// Forget everything about `kind`. Idempotent.
    pub fn reset(&mut self, kind: AlertKind) {
        self.states[kind.index()] = BackoffState::default();
    }
}
