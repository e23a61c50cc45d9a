use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::routes::{dashboard, friends, health, portfolios, prices, stock_lists, views};
use crate::state::AppState;

pub fn create_app(state: AppState) -> Router {
    Router::<AppState>::new()
        .nest("/health", health::router())
        .nest("/api/prices", prices::router())
        .nest("/api/portfolios", portfolios::router())
        .nest("/api/stocklists", stock_lists::router())
        .nest("/api/friends", friends::router())
        .nest("/api/dashboard", dashboard::router())
        .nest("/api/views", views::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
