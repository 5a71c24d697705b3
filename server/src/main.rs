#![recursion_limit = "256"]

mod config;
mod db;
mod routes;
mod services;
mod state;

use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "info,server=debug,tower_http=info";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env is fine; real deployments set the environment directly.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)))
        .init();

    let config = config::ServerConfig::from_env().inspect_err(|e| tracing::error!(error = %e, "invalid configuration"))?;

    let pool = db::init_pool(&config.database_url, config.db_max_connections)
        .await
        .inspect_err(|e| tracing::error!(error = %e, "database init failed"))?;

    let state = state::AppState::new(pool);
    let app = routes::app(state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    tracing::info!(port = config.port, "clinic admin listening");
    axum::serve(listener, app).await?;
    Ok(())
}
