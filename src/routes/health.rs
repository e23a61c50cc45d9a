use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tracing::info;

use crate::config::PriceProviderKind;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(health))
}

#[derive(Debug, Serialize)]
struct HealthReport {
    status: &'static str,
    price_provider: &'static str,
    seeded: bool,
}

async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    info!("GET /health - Health check");
    let price_provider = match state.config.price_provider {
        PriceProviderKind::Placeholder => "placeholder",
        PriceProviderKind::Fixture => "fixture",
    };
    Json(HealthReport {
        status: "ok",
        price_provider,
        seeded: state.config.synth_seed.is_some(),
    })
}
