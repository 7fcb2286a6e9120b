pub mod monitor;
pub mod notifier;
pub mod status;
