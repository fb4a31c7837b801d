use crate::api::views;
use crate::storage::{Database, PostRepository, StorageError};
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

/// Application state, cloned into every handler
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub posts: PostRepository,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        let posts = PostRepository::new(db.clone());
        Self { db, posts }
    }
}

/// Form submitted to `POST /create`. Missing fields arrive as empty strings.
#[derive(Debug, Default, Deserialize)]
pub struct CreatePostForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

impl CreatePostForm {
    /// Presence check only; the title is stored as typed.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.title.is_empty() {
            return Err("Title is required!");
        }
        Ok(())
    }
}

/// Body of `/healthz`
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub result: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            result: "OK - healthy",
            details: None,
        }
    }

    pub fn unhealthy(details: String) -> Self {
        Self {
            result: "ERROR - unhealthy",
            details: Some(details),
        }
    }
}

/// Failures that escape a handler. Rendered as a generic 500 page.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!(error = %self, "Internal error");
        (StatusCode::INTERNAL_SERVER_ERROR, Html(views::server_error())).into_response()
    }
}
