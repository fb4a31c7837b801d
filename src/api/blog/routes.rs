use crate::api::blog::handlers::*;
use crate::api::models::AppState;
use axum::{routing::get, Router};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index_handler))
        .route("/about", get(about_handler))
        .route("/create", get(create_form_handler).post(create_post_handler))
        .route("/{id}", get(post_handler))
}
