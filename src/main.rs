//! Redcouch greeting service.
//!
//! Main entry point. Initializes logging, loads configuration, resolves
//! database credentials, and runs the HTTP server until shutdown.

use std::{sync::Arc, time::Duration};

use anyhow::{Context, Result};
use redcouch_api::{config::mask_dsn, secrets, AppState, Config};
use redcouch_core::{GreetingStore, PgGreetingStore, RealClock};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;
    init_tracing(&config.rust_log);

    info!(version = env!("CARGO_PKG_VERSION"), "Starting redcouch greeting service");

    let recorder = build_recorder(&config).await?;
    let state = AppState::new(recorder, Arc::new(RealClock::new()));

    let addr = config.parse_server_addr()?;
    info!(%addr, "redcouch is ready to receive requests");

    redcouch_api::start_server(state, addr, Duration::from_secs(config.request_timeout))
        .await
        .context("Server failed")?;

    info!("redcouch shutdown complete");
    Ok(())
}

/// Initializes tracing with environment-based configuration.
fn init_tracing(default_filter: &str) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry().with(filter).with(fmt::layer().with_target(true)).init();
}

/// Resolves the greeting recorder from configuration.
///
/// Priority: explicit `DATABASE_URL`, then the one-shot secret fetch.
/// With neither, the dispatcher runs without a recorder.
async fn build_recorder(config: &Config) -> Result<Option<Arc<dyn GreetingStore>>> {
    let dsn = match (&config.database_url, &config.database_secret_url) {
        (Some(url), _) => Some(url.clone()),
        (None, Some(secret_url)) => Some(
            secrets::fetch_database_url(
                secret_url,
                Duration::from_secs(config.secret_timeout_seconds),
            )
            .await
            .context("Database credential retrieval failed")?,
        ),
        (None, None) => None,
    };

    match dsn {
        Some(dsn) => {
            let store = PgGreetingStore::new(dsn.clone());
            store.ping().await.context("Database connection check failed")?;
            info!(database_url = %mask_dsn(&dsn), "Greeting recorder enabled");
            Ok(Some(Arc::new(store)))
        },
        None => {
            info!("No database configured, greeting recorder disabled");
            Ok(None)
        },
    }
}
