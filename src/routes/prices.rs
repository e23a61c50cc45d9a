use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::{ChartView, PredictionResult, PricePoint};
use crate::state::AppState;

const DEFAULT_WINDOW_DAYS: i64 = 30;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/:symbol/history", get(get_history))
        .route("/:symbol/prediction", get(get_prediction))
        .route("/:symbol/chart", get(get_chart))
}

#[derive(Debug, Deserialize)]
struct WindowQuery {
    days: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct ChartQuery {
    history_days: Option<i64>,
    days: Option<i64>,
}

async fn get_history(
    Path(symbol): Path<String>,
    Query(params): Query<WindowQuery>,
    State(state): State<AppState>,
) -> Result<Json<Vec<PricePoint>>, AppError> {
    let days = params.days.unwrap_or(DEFAULT_WINDOW_DAYS);
    info!("GET /prices/{}/history - {} days", symbol, days);
    let points = state
        .synthesizer()
        .generate_history(&symbol, days, &mut state.rng())
        .map_err(|e| {
            error!("Failed to synthesize history for {}: {}", symbol, e);
            e
        })?;
    Ok(Json(points))
}

async fn get_prediction(
    Path(symbol): Path<String>,
    Query(params): Query<WindowQuery>,
    State(state): State<AppState>,
) -> Result<Json<PredictionResult>, AppError> {
    let days = params.days.unwrap_or(DEFAULT_WINDOW_DAYS);
    info!("GET /prices/{}/prediction - {} days ahead", symbol, days);
    let prediction = state
        .synthesizer()
        .predict(&symbol, days, &mut state.rng())
        .map_err(|e| {
            error!("Failed to predict prices for {}: {}", symbol, e);
            e
        })?;
    Ok(Json(prediction))
}

async fn get_chart(
    Path(symbol): Path<String>,
    Query(params): Query<ChartQuery>,
    State(state): State<AppState>,
) -> Result<Json<ChartView>, AppError> {
    let history_days = params.history_days.unwrap_or(DEFAULT_WINDOW_DAYS);
    let days = params.days.unwrap_or(DEFAULT_WINDOW_DAYS);
    info!(
        "GET /prices/{}/chart - {} days back, {} days ahead",
        symbol, history_days, days
    );
    let chart = state
        .synthesizer()
        .chart(&symbol, history_days, days, &mut state.rng())
        .map_err(|e| {
            error!("Failed to build chart for {}: {}", symbol, e);
            e
        })?;
    Ok(Json(chart))
}
