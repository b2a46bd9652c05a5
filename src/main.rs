#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(warnings)]

use auth_service::infrastructure::{config::Settings, http::start_server};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Configuration errors abort startup; no partial service start
    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {e}");
        e
    })?;

    init_tracing(&settings);

    info!("Starting Authentication Service");
    info!("Configuration loaded: server will bind to {}", settings.socket_addr());
    if let Err(e) = start_server(settings).await {
        error!("Server error: {}", e);
        return Err(e);
    }

    Ok(())
}

/// Initialize structured logging; `RUST_LOG` overrides the configured level.
fn init_tracing(settings: &Settings) {
    let default_filter = format!("auth_service={},tower_http=info", settings.log_level);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();
}
