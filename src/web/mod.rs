//! HTTP server and embedded UI
//!
//! One axum router: the single-page UI at `/`, the explanation API at
//! `POST /api/explain`, and a health endpoint. Each API request runs the
//! pipeline linearly to completion or first failure.

pub mod handlers;

use crate::config::AppConfig;
use crate::llm::{GeminiClient, GenerateText};
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

/// Shared application context passed to all handlers.
///
/// Read-only after startup; there is no mutable state between requests.
#[derive(Clone)]
pub struct AppContext {
    pub http: reqwest::Client,
    pub generator: Arc<dyn GenerateText>,
}

/// Build the application router.
pub fn router(ctx: AppContext) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/api/explain", post(handlers::explain))
        .layer(CorsLayer::permissive())
        .with_state(ctx)
}

/// Run the HTTP server until the process is terminated.
pub async fn run(config: AppConfig) -> anyhow::Result<()> {
    let ctx = AppContext {
        http: reqwest::Client::new(),
        generator: Arc::new(GeminiClient::new(config.llm.clone())),
    };

    let app = router(ctx);
    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!("serving on http://{} (model: {})", config.bind, config.llm.model);

    axum::serve(listener, app).await?;
    Ok(())
}
