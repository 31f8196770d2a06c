// NovaNest - Web Server
// Serves the facility API on NOVANEST_HOST:NOVANEST_PORT (default 0.0.0.0:4000)

use anyhow::{Context, Result};
use novanest::{app, AppState, FacilityRepository, FacilityStore, ServerConfig};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "novanest=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    tracing::info!("Starting NovaNest backend v{}", novanest::VERSION);

    let config = ServerConfig::from_env().context("Invalid server configuration")?;
    tracing::info!(
        host = %config.host,
        port = config.port,
        rate_per_kwh = config.rate_per_kwh,
        "Configuration loaded"
    );

    let store = FacilityStore::with_sample_data();
    tracing::info!(
        residents = store.residents().len(),
        devices = store.devices().len(),
        alerts = store.alerts().len(),
        "Sample data loaded"
    );

    let state = AppState::new(Arc::new(store), config.rate_per_kwh);
    let app = app(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    tracing::info!("NovaNest backend running on http://{}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
