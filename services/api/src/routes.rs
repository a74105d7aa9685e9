use crate::infra::AppState;
use applicant_portal::applicants::{
    applicant_router, ApplicantProfileService, ApplicantRepository, FileStorage,
};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_applicant_routes<R, S>(
    service: Arc<ApplicantProfileService<R, S>>,
) -> axum::Router
where
    R: ApplicantRepository + 'static,
    S: FileStorage + 'static,
{
    applicant_router(service)
        .route("/", axum::routing::get(landing))
        .route("/home/index", axum::routing::get(landing))
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn landing() -> Json<serde_json::Value> {
    Json(json!({
        "service": "applicant-portal",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "ok",
    }))
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
