use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::{
    ActivityRecord, ActivityView, FriendRequestRecord, FriendRequestView, PortfolioRecord,
    PortfolioView, StockListRecord, StockListView,
};
use crate::services::view_model_service;
use crate::state::AppState;

// Maps records fetched from the backend by the client into display shapes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/portfolio", post(map_portfolio))
        .route("/stocklist", post(map_stock_list))
        .route("/friend-request", post(map_friend_request))
        .route("/activity", post(map_activity))
}

async fn map_portfolio(
    State(state): State<AppState>,
    Json(record): Json<PortfolioRecord>,
) -> Result<Json<PortfolioView>, AppError> {
    info!("POST /views/portfolio - Mapping portfolio record");
    view_model_service::to_portfolio_view(&record, state.price_provider.as_ref())
        .map(Json)
        .map_err(|e| {
            warn!("Rejected portfolio record: {}", e);
            e
        })
}

async fn map_stock_list(
    Json(record): Json<StockListRecord>,
) -> Result<Json<StockListView>, AppError> {
    info!("POST /views/stocklist - Mapping stock list record");
    view_model_service::to_stock_list_view(&record)
        .map(Json)
        .map_err(|e| {
            warn!("Rejected stock list record: {}", e);
            e
        })
}

async fn map_friend_request(
    Json(record): Json<FriendRequestRecord>,
) -> Result<Json<FriendRequestView>, AppError> {
    info!("POST /views/friend-request - Mapping friend request record");
    view_model_service::to_friend_request_view(&record)
        .map(Json)
        .map_err(|e| {
            warn!("Rejected friend request record: {}", e);
            e
        })
}

async fn map_activity(Json(record): Json<ActivityRecord>) -> Result<Json<ActivityView>, AppError> {
    info!("POST /views/activity - Mapping activity record");
    view_model_service::to_activity_view(&record)
        .map(Json)
        .map_err(|e| {
            warn!("Rejected activity record: {}", e);
            e
        })
}
