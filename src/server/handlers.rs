use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

use crate::report::{validate_input, MarketReport, MISSING_INPUT};

use super::state::AppState;
use super::static_files;

// ─── Error response ──────────────────────────────────────────────

#[derive(Serialize)]
struct ApiErrorBody {
    error: String,
    code: u16,
}

pub(super) struct ApiError(StatusCode, String);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiErrorBody {
            error: self.1,
            code: self.0.as_u16(),
        };
        (self.0, Json(body)).into_response()
    }
}

fn api_error(status: StatusCode, msg: impl Into<String>) -> ApiError {
    ApiError(status, msg.into())
}

// ─── Static page ─────────────────────────────────────────────────

pub async fn index() -> Html<&'static str> {
    Html(static_files::INDEX_HTML)
}

// ─── GET /api/analyze ────────────────────────────────────────────

#[derive(Deserialize)]
pub struct AnalyzeQuery {
    pub location: Option<String>,
    pub category: Option<String>,
    /// Set to false to skip the text-generation step.
    pub analysis: Option<bool>,
}

pub async fn analyze(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AnalyzeQuery>,
) -> Result<Response, ApiError> {
    let start = Instant::now();

    let location = params.location.unwrap_or_default();
    let category = params.category.unwrap_or_default();
    let Some((location, category)) = validate_input(&location, &category) else {
        return Err(api_error(StatusCode::BAD_REQUEST, MISSING_INPUT));
    };
    let (location, category) = (location.to_string(), category.to_string());
    let with_analysis = params.analysis.unwrap_or(true);

    // The pipeline blocks on upstream I/O; give each request its own thread.
    let report = tokio::task::spawn_blocking(move || {
        let analyst = with_analysis.then(|| state.analyst.as_ref());
        MarketReport::generate(&state.pipeline, analyst, &location, &category)
    })
    .await
    .map_err(|e| {
        tracing::error!(error = %e, "analysis task failed");
        api_error(StatusCode::INTERNAL_SERVER_ERROR, "analysis task failed")
    })?;

    tracing::info!(
        location = %report.location,
        category = %report.category,
        status = report.status,
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "GET /api/analyze"
    );

    let status = if report.is_error() {
        StatusCode::BAD_GATEWAY
    } else {
        StatusCode::OK
    };
    Ok((status, Json(report)).into_response())
}
