pub mod environment;
pub mod interval;

pub use environment::{Config, ConfigError};
pub use interval::{format_interval, parse_interval};
