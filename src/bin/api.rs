use anyhow::{Context, Result};
use reviewlens::{
    app_state::AppState,
    config::{Config, LogFormat},
    routes::create_router,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format() {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }

    let state = AppState::new(config.fetch_timeout()).context("Failed to build HTTP client")?;
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_addr()))?;
    info!(
        addr = config.bind_addr(),
        fetch_timeout_secs = config.fetch_timeout().as_secs(),
        "reviewlens listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
