use crate::api::models::*;
use crate::storage::{checks, Health, Metrics};
use axum::{extract::State, http::StatusCode, Json};

/// Health failures are reported in the body, never as `AppError`.
pub async fn healthz_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    match checks::check_health(&state.db).await {
        Health::Healthy => (StatusCode::OK, Json(HealthResponse::healthy())),
        Health::Unhealthy(reason) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(HealthResponse::unhealthy(reason)),
        ),
    }
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<Json<Metrics>, AppError> {
    let metrics = checks::collect_metrics(&state.db).await?;
    Ok(Json(metrics))
}
