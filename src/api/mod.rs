pub mod blog;
pub mod models;
pub mod status;
pub mod views;

// Re-exports
pub use models::*;

use axum::Router;

/// All routes, with the 404 page as fallback for anything unmatched.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(status::routes())
        .merge(blog::routes())
        .fallback(blog::handlers::not_found_handler)
        .with_state(state)
}
