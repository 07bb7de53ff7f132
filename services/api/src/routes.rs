use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use prompt_rater::error::AppError;
use prompt_rater::report::{CorpusSummaryView, MemoryReportSink, RatingRecord, ReportSink};
use prompt_rater::scoring::{rate_all, summarize_with_limit, Document, DEFAULT_SLICE_LEN};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

#[derive(Debug, Deserialize)]
pub(crate) struct PromptPayload {
    pub(crate) name: String,
    pub(crate) content: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RatingRequest {
    pub(crate) documents: Vec<PromptPayload>,
    #[serde(default)]
    pub(crate) top: Option<usize>,
    #[serde(default)]
    pub(crate) include_markdown: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct RatingResponse {
    pub(crate) ratings: Vec<RatingRecord>,
    pub(crate) summary: CorpusSummaryView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) markdown: Option<String>,
}

pub(crate) fn rating_routes() -> axum::Router {
    axum::Router::new()
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route("/api/v1/ratings", axum::routing::post(ratings_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Rates the submitted documents off the async runtime and returns them
/// ranked, with the corpus summary.
pub(crate) async fn ratings_endpoint(
    Json(payload): Json<RatingRequest>,
) -> Result<Json<RatingResponse>, AppError> {
    let RatingRequest {
        documents,
        top,
        include_markdown,
    } = payload;

    let documents: Vec<Document> = documents
        .into_iter()
        .map(|document| Document::new(document.name, document.content))
        .collect();
    let slice_len = top.unwrap_or(DEFAULT_SLICE_LEN);

    let (ratings, report) = tokio::task::spawn_blocking(move || {
        let ratings = rate_all(&documents);
        let report = summarize_with_limit(&ratings, slice_len);
        (ratings, report)
    })
    .await?;
    info!(count = report.count, "rating request served");

    let markdown = if include_markdown {
        let sink = MemoryReportSink::default();
        sink.publish(&report, &ratings)?;
        sink.latest().map(|rendered| rendered.markdown)
    } else {
        None
    };

    Ok(Json(RatingResponse {
        ratings: ratings.iter().map(RatingRecord::from).collect(),
        summary: CorpusSummaryView::from(&report),
        markdown,
    }))
}
