use anyhow::Context;
use axum::http::HeaderValue;
use finance_tracker_backend::{
    config::{Config, StorageConfig},
    context::AppContext,
    create_router,
    storage::{Connection, InMemoryEntryStorage},
    AppState,
};
use tower_http::services::ServeDir;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;

    match &config.storage {
        StorageConfig::Sheets(credentials) => {
            info!("Setting up Google Sheets storage");
            let context = AppContext::initialize(credentials, &config.sheets)?;
            let result = serve(context.connection(), &config).await;
            context.shutdown().await;
            result
        }
        StorageConfig::Memory => {
            warn!("Using in-memory storage; entries are lost on exit");
            serve(InMemoryEntryStorage::new(), &config).await
        }
    }
}

async fn serve<C: Connection>(connection: C, config: &Config) -> anyhow::Result<()> {
    let frontend_origin = config
        .frontend_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid FRONTEND_ORIGIN {:?}", config.frontend_origin))?;

    let app = create_router(AppState::new(connection), frontend_origin)
        .fallback_service(ServeDir::new(&config.frontend_dist));

    info!("Starting server on {}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
