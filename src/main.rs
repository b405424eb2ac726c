use crate::config::PersonwebConfig;
use crate::database::sqlite::SqliteRepository;
use crate::database::PersonRepository;
use anyhow::Context;
use axum::Router;
use std::sync::Arc;

pub mod config;
mod database;
mod domain;
mod error;
mod features;
mod logging;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn PersonRepository>,
    pub config: Arc<PersonwebConfig>,
}

/// The full application router with request tracing.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(features::people::people_router())
        .layer(logging::http_trace_layer())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // determine environment variables
    dotenv::dotenv().ok();
    logging::init_logging();

    if let Err(e) = run().await {
        tracing::error!("{:#}", e);
        return Err(e);
    }

    Ok(())
}

async fn run() -> anyhow::Result<()> {
    let config = PersonwebConfig::from_env().context("Invalid configuration")?;
    let addr = config.socket_addr()?;

    // connect to our db; any failure here ends the process
    let repo = SqliteRepository::connect(&config).await?;

    let app_state = AppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app(app_state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        // without a signal handler, keep serving until killed
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
