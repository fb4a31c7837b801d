use crate::api::models::AppState;
use crate::api::status::handlers::{healthz_handler, metrics_handler};
use axum::{routing::get, Router};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/healthz", get(healthz_handler))
        .route("/metrics", get(metrics_handler))
}
