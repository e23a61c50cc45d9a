use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::StockListView;
use crate::services::view_model_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(fetch_stock_lists))
}

pub async fn fetch_stock_lists(
    State(state): State<AppState>,
) -> Result<Json<Vec<StockListView>>, AppError> {
    info!("GET /stocklists - Fetching accessible stock lists");
    let views = state
        .store
        .stock_lists()
        .iter()
        .map(view_model_service::to_stock_list_view)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            error!("Failed to map stock lists: {}", e);
            e
        })?;
    Ok(Json(views))
}
