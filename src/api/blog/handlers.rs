use crate::api::models::*;
use crate::api::views;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Form,
};
use tracing::{error, info};

pub async fn index_handler(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let posts = state.posts.list_posts().await?;
    Ok(Html(views::index(&posts)))
}

/// Digits only: no sign, no whitespace. Out-of-range values are not ids either.
fn parse_post_id(raw: &str) -> Option<i64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// `GET /{id}`. Ids that are not plain digit strings 404 just like unknown ones.
pub async fn post_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Response, AppError> {
    let Some(post_id) = parse_post_id(&raw_id) else {
        return Ok(not_found_handler().await.into_response());
    };

    match state.posts.get_post(post_id).await? {
        Some(post) => {
            info!(post_id, title = %post.title, "Article retrieved");
            Ok(Html(views::post(&post)).into_response())
        }
        None => {
            error!(post_id, "Article does not exist");
            Ok(not_found_handler().await.into_response())
        }
    }
}

pub async fn about_handler() -> Html<String> {
    info!("About Us page retrieved");
    Html(views::about())
}

pub async fn create_form_handler() -> Html<String> {
    Html(views::create(None, &CreatePostForm::default()))
}

/// Empty title re-renders the form with a warning; otherwise the post is
/// stored and the client is sent back to the listing.
pub async fn create_post_handler(
    State(state): State<AppState>,
    Form(form): Form<CreatePostForm>,
) -> Result<Response, AppError> {
    if let Err(warning) = form.validate() {
        info!("Rejected post without a title");
        return Ok(Html(views::create(Some(warning), &form)).into_response());
    }

    let post_id = state.posts.create_post(&form.title, &form.content).await?;
    info!(post_id, title = %form.title, "Article created");

    Ok((StatusCode::FOUND, [(header::LOCATION, "/")]).into_response())
}

pub async fn not_found_handler() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html(views::not_found()))
}
