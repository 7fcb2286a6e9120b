pub mod config;
pub mod modules;
pub mod services;
