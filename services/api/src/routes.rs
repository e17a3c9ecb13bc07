use crate::infra::AppState;
use crate::printable::render_footprint_report;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use chrono::Local;
use footprint_quiz::error::AppError;
use footprint_quiz::quiz::{footprint_router, FootprintService, ScoreRequest};
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_footprint_routes(service: Arc<FootprintService>) -> axum::Router {
    footprint_router(service.clone())
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/footprint/report",
            axum::routing::post(printable_report_endpoint),
        )
        .layer(Extension(service))
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

/// Scores the answers and returns the report as printable text.
pub(crate) async fn printable_report_endpoint(
    Extension(service): Extension<Arc<FootprintService>>,
    Json(request): Json<ScoreRequest>,
) -> Result<impl IntoResponse, AppError> {
    let profile = request.profile.clone();
    let response = service.score(request)?;
    let text = render_footprint_report(&response, profile.as_ref(), Local::now().date_naive())?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        text,
    ))
}
