use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::FriendRequestView;
use crate::services::view_model_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/requests", get(fetch_incoming_requests))
}

pub async fn fetch_incoming_requests(
    State(state): State<AppState>,
) -> Result<Json<Vec<FriendRequestView>>, AppError> {
    info!("GET /friends/requests - Fetching incoming friend requests");
    let views = state
        .store
        .friend_requests()
        .iter()
        .map(view_model_service::to_friend_request_view)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            error!("Failed to map friend requests: {}", e);
            e
        })?;
    Ok(Json(views))
}
