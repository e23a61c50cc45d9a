use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::{PortfolioSortField, PortfolioView, SortDirection};
use crate::services::view_model_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(fetch_portfolios))
        .route("/:id", get(get_portfolio))
}

#[derive(Debug, Deserialize)]
pub struct SortQuery {
    pub sort: Option<PortfolioSortField>,
    pub direction: Option<SortDirection>,
}

pub async fn fetch_portfolios(
    State(state): State<AppState>,
    Query(query): Query<SortQuery>,
) -> Result<Json<Vec<PortfolioView>>, AppError> {
    let field = query.sort.unwrap_or_default();
    let direction = query.direction.unwrap_or_default();
    info!(
        "GET /portfolios - Fetching all portfolios sorted by {:?} {:?}",
        field, direction
    );
    let mut views = state
        .store
        .portfolios()
        .iter()
        .map(|record| view_model_service::to_portfolio_view(record, state.price_provider.as_ref()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            error!("Failed to map portfolios: {}", e);
            e
        })?;
    view_model_service::sort_portfolio_views(&mut views, field, direction);
    Ok(Json(views))
}

pub async fn get_portfolio(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PortfolioView>, AppError> {
    info!("GET /portfolios/{} - Fetching portfolio", id);
    let record = state
        .store
        .portfolio(id)
        .ok_or_else(|| AppError::NotFound(format!("Portfolio {} not found", id)))?;
    let view = view_model_service::to_portfolio_view(record, state.price_provider.as_ref())
        .map_err(|e| {
            error!("Failed to map portfolio {}: {}", id, e);
            e
        })?;
    Ok(Json(view))
}
