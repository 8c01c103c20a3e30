// Route handlers, one module per endpoint.

pub mod analyze;
pub mod demo;
pub mod health;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use tracing::{error, info};

use crate::report::AnalysisReport;
use crate::web::{api_error, AppState};

/// Run the analyzer over already-normalized content and render the
/// report, or an opaque 500 if the analyzer fails.
pub(crate) async fn respond_with_report(state: &AppState, content: &str) -> Response {
    match AnalysisReport::analyze(state.analyzer.as_ref(), content, Utc::now()).await {
        Ok(report) => {
            info!(
                risk_score = report.analysis_summary.risk_score.value(),
                risk_level = %report.analysis_summary.risk_level,
                "Demo analysis completed successfully"
            );
            Json(report).into_response()
        }
        Err(e) => {
            error!(error = %e, "Unexpected error during content analysis");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}
