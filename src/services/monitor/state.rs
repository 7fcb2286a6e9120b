use crate::modules::validator::ValidatorStatus;

/// Bad-to-good change between two consecutive polls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    RecoveredFromJailed,
    BecameActive,
}

/// Flags seen on the previous completed poll.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservedState {
    pub is_jailed: bool,
    pub is_active: bool,
    /// False until the first poll has been processed; never goes back.
    pub has_baseline: bool,
}

impl ObservedState {
    /// Transitions from the stored flags to `current`. Empty on the first poll.
    pub fn transitions(&self, current: &ValidatorStatus) -> Vec<Transition> {
        let mut found = Vec::new();
        if !self.has_baseline {
            return found;
        }

        if self.is_jailed && !current.is_jailed {
            found.push(Transition::RecoveredFromJailed);
        }
        if !self.is_active && current.is_active {
            found.push(Transition::BecameActive);
        }
        found
    }

    /// Overwrite the stored flags with `current` and mark the baseline as taken.
    pub fn update(&mut self, current: &ValidatorStatus) {
        self.is_jailed = current.is_jailed;
        self.is_active = current.is_active;
        self.has_baseline = true;
    }
}
