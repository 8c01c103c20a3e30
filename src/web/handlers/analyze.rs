// POST /analyze: score caller-supplied content.
//
// Returns 200 with the full report on success.
// Returns 4xx if the body is not valid JSON or has the wrong shape,
// 422 if the content is outside the accepted length window,
// and 500 (no details) if the analyzer itself fails.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use tracing::{info, warn};

use super::respond_with_report;
use crate::input::AnalysisInput;
use crate::web::{api_error, AppState};

/// POST /analyze: run the input gate, then the analyzer.
pub async fn analyze_content(
    State(state): State<AppState>,
    payload: Result<Json<AnalysisInput>, JsonRejection>,
) -> Response {
    let Json(input) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            warn!(error = %rejection, "Rejected malformed analysis request");
            return api_error(rejection.status(), &rejection.body_text());
        }
    };

    let content = match input.normalize() {
        Ok(content) => content,
        Err(e) => {
            warn!(error = %e, "Rejected analysis request");
            return api_error(StatusCode::UNPROCESSABLE_ENTITY, &e.to_string());
        }
    };

    let chars = content.chars().count();
    info!(
        content_type = input.content_type.resolve(&content).as_str(),
        user_id = input.user_id.as_deref().unwrap_or("-"),
        "Analyzing content in demo mode ({chars} chars)"
    );

    respond_with_report(&state, &content).await
}
