use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use validator_monitor::config::{format_interval, Config};
use validator_monitor::services::monitor::MonitorEngine;
use validator_monitor::services::notifier::DiscordNotifier;
use validator_monitor::services::status::HttpStatusSource;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "validator_monitor=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Validator Monitor starting up...");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load environment configuration");
            std::process::exit(1);
        }
    };

    tracing::info!(
        api = %config.api_endpoint,
        address = %config.validator_address,
        interval = %format_interval(config.interval),
        "Configuration loaded"
    );

    let source = Arc::new(HttpStatusSource::new(
        config.api_endpoint.clone(),
        config.request_timeout,
    ));
    let sink = Arc::new(DiscordNotifier::new(config.discord_webhook.clone()));

    let mut engine = MonitorEngine::new(
        source,
        sink,
        config.validator_address.clone(),
        config.interval,
    );

    tokio::select! {
        _ = engine.run() => {}
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received, stopping monitor");
        }
    }
}
