pub mod alerts;
pub mod backoff;
pub mod engine;
pub mod state;

pub use alerts::{startup_message, Alert};
pub use backoff::{AlertKind, BackoffState, BackoffTimer, BASE_INTERVAL, MAX_INTERVAL};
pub use engine::{MonitorContext, MonitorEngine};
pub use state::{ObservedState, Transition};
