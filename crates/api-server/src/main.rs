//! API server for accessibility test results
//!
//! Serves the results of recorded accessibility-check tasks over REST.

mod config;
mod routes;
mod state;

use anyhow::Context;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use a11y_core::task::TaskRepository;

use crate::config::ServiceConfig;
use crate::state::AppState;

fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .merge(routes::task::router())
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api_server=debug,a11y_core=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServiceConfig::from_env();
    tracing::info!("Using data directory: {:?}", config.data_dir);
    tracing::info!(
        "Default results window: {} days",
        config.query.default_window_days()
    );

    let state = AppState::new(&config)
        .await
        .context("Failed to initialize application state")?;

    let task_count = state.task_store().list().await?.len();
    let result_count = state.result_store().len().await;
    tracing::info!("Loaded {} tasks and {} results", task_count, result_count);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    tracing::info!("REST API listening on {}", config.bind_addr);

    axum::serve(listener, app(state)).await?;
    Ok(())
}
