use axum::{
    extract::{Query, State},
    http::header::{CACHE_CONTROL, CONTENT_TYPE},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::Utc;
use folio_core::{FeedResponse, Theme};
use serde::Deserialize;
use tracing::info;

use super::AppState;
use crate::error::ApiError;

/// Shared caches keep a feed for a day and may serve it stale for two more.
pub const FEED_CACHE_CONTROL: &str = "public, max-age=86400, stale-while-revalidate=172800";

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/contribution-feed", get(contribution_feed))
        .route("/contribution-feed/theme", get(theme))
}

#[derive(Debug, Deserialize)]
struct FeedQuery {
    username: Option<String>,
}

async fn contribution_feed(
    State(state): State<AppState>,
    Query(query): Query<FeedQuery>,
) -> Result<Response, ApiError> {
    let username = query
        .username
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .ok_or_else(|| ApiError::InvalidRequest("username is required".into()))?;

    let feed = state
        .feeds
        .fetch(username, Utc::now())
        .await
        .ok_or(ApiError::Unavailable)?;

    let response = FeedResponse::new(username, feed);
    let body = serde_json::to_vec(&response).map_err(|e| ApiError::Internal(e.to_string()))?;
    info!(
        "served {} contribution days for {username}",
        response.contributions.len()
    );

    Ok((
        [(CONTENT_TYPE, "application/json"), (CACHE_CONTROL, FEED_CACHE_CONTROL)],
        body,
    )
        .into_response())
}

async fn theme(State(state): State<AppState>) -> Json<Theme> {
    Json(state.theme.clone())
}
