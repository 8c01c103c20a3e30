// Web server: Axum-based JSON API.
//
// Three routes: a health probe at `/`, `POST /analyze` for caller-supplied
// content, and `GET /demo` over a built-in sample. CORS is wide open so
// any browser frontend can call the API directly.

use std::sync::Arc;

use anyhow::Result;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::analyzer::traits::ContentAnalyzer;
use crate::config::Config;

pub mod handlers;

/// Shared application state threaded through all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<dyn ContentAnalyzer>,
}

impl AppState {
    pub fn new(analyzer: Arc<dyn ContentAnalyzer>) -> Self {
        Self { analyzer }
    }
}

/// Start the Axum web server and block until it exits.
pub async fn run_server(config: &Config, analyzer: Arc<dyn ContentAnalyzer>) -> Result<()> {
    let model = analyzer.model_id().to_string();
    let app = build_router(AppState::new(analyzer));

    let addr = config.listen_addr();
    info!(model = %model, "LieLens API listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::health::health_check))
        .route("/health", get(handlers::health::health_check))
        .route("/analyze", post(handlers::analyze::analyze_content))
        .route("/demo", get(handlers::demo::demo_analysis))
        .fallback(not_found)
        .layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found() -> Response {
    api_error(StatusCode::NOT_FOUND, "Not found")
}

/// Typed JSON error response helper.
pub fn api_error(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(serde_json::json!({ "error": message }))).into_response()
}
