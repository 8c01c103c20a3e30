// GET /demo: a report over the built-in sample, for frontend testing.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use tracing::error;

use super::respond_with_report;
use crate::input::normalize_content;
use crate::report::templates::DEMO_CONTENT;
use crate::web::{api_error, AppState};

/// GET /demo: same pipeline and schema as /analyze, fixed input.
pub async fn demo_analysis(State(state): State<AppState>) -> Response {
    match normalize_content(DEMO_CONTENT) {
        Ok(content) => respond_with_report(&state, &content).await,
        Err(e) => {
            error!(error = %e, "Built-in demo content failed the input gate");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}
