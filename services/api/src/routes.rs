use crate::infra::AppState;
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::Utc;
use faceguard::error::AppError;
use faceguard::skincare::progress::{ComparisonResult, ScanStatistics};
use faceguard::skincare::{
    Disclaimers, ProgressReport, ScanAnalysisService, ScanId, ScanOutcome, ScanRepository,
    ScanSubmission, UserId, DISCLAIMERS,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ScanResponse {
    #[serde(flatten)]
    pub(crate) outcome: ScanOutcome,
    pub(crate) disclaimers: Disclaimers,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ProgressQuery {
    #[serde(default)]
    pub(crate) weeks: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CompareQuery {
    pub(crate) previous: String,
    pub(crate) current: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StatisticsResponse {
    pub(crate) user_id: UserId,
    pub(crate) statistics: Option<ScanStatistics>,
}

pub(crate) fn scan_router<R>(service: Arc<ScanAnalysisService<R>>) -> Router
where
    R: ScanRepository + 'static,
{
    Router::new()
        .route("/api/v1/scans", post(submit_scan_handler::<R>))
        .route(
            "/api/v1/users/:user_id/progress",
            get(progress_handler::<R>),
        )
        .route("/api/v1/users/:user_id/compare", get(compare_handler::<R>))
        .route(
            "/api/v1/users/:user_id/statistics",
            get(statistics_handler::<R>),
        )
        .with_state(service)
}

pub(crate) fn with_scan_routes<R>(service: Arc<ScanAnalysisService<R>>) -> Router
where
    R: ScanRepository + 'static,
{
    scan_router(service)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
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

pub(crate) async fn submit_scan_handler<R>(
    State(service): State<Arc<ScanAnalysisService<R>>>,
    Json(submission): Json<ScanSubmission>,
) -> Result<(StatusCode, Json<ScanResponse>), AppError>
where
    R: ScanRepository + 'static,
{
    let outcome = service.process_scan(submission, Utc::now())?;
    Ok((
        StatusCode::CREATED,
        Json(ScanResponse {
            outcome,
            disclaimers: DISCLAIMERS,
        }),
    ))
}

pub(crate) async fn progress_handler<R>(
    State(service): State<Arc<ScanAnalysisService<R>>>,
    Path(user_id): Path<String>,
    Query(query): Query<ProgressQuery>,
) -> Result<Json<ProgressReport>, AppError>
where
    R: ScanRepository + 'static,
{
    let report = service.progress_report(&UserId(user_id), query.weeks, Utc::now())?;
    Ok(Json(report))
}

pub(crate) async fn compare_handler<R>(
    State(service): State<Arc<ScanAnalysisService<R>>>,
    Path(user_id): Path<String>,
    Query(query): Query<CompareQuery>,
) -> Result<Json<ComparisonResult>, AppError>
where
    R: ScanRepository + 'static,
{
    let result = service.compare_scans(
        &UserId(user_id),
        &ScanId(query.previous),
        &ScanId(query.current),
        None,
    )?;
    Ok(Json(result))
}

pub(crate) async fn statistics_handler<R>(
    State(service): State<Arc<ScanAnalysisService<R>>>,
    Path(user_id): Path<String>,
) -> Result<Json<StatisticsResponse>, AppError>
where
    R: ScanRepository + 'static,
{
    let user_id = UserId(user_id);
    let statistics = service.statistics(&user_id)?;
    Ok(Json(StatisticsResponse {
        user_id,
        statistics,
    }))
}
