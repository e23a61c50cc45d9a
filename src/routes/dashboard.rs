use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::DashboardView;
use crate::services::view_model_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_dashboard))
}

pub async fn get_dashboard(State(state): State<AppState>) -> Result<Json<DashboardView>, AppError> {
    info!("GET /dashboard - Building dashboard");
    let dashboard = view_model_service::to_dashboard_view(
        state.store.portfolios(),
        state.store.stock_lists(),
        state.store.friend_requests(),
        state.store.activity(),
        state.price_provider.as_ref(),
    )
    .map_err(|e| {
        error!("Failed to build dashboard: {}", e);
        e
    })?;
    Ok(Json(dashboard))
}
