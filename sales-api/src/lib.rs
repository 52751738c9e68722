//! HTTP boundary for the sales analytics engine.
//!
//! Read-only JSON endpoints over [`sales_analytics::AsyncSalesAnalytics`].

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use state::AppState;

/// Build the router with all routes and middleware.
pub fn build_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/sales", get(routes::sales::get_sales))
        .route("/sales/metrics", get(routes::sales::get_metrics))
        .route("/sales/quarterly", get(routes::sales::get_quarterly))
        .route("/sales/trend", get(routes::sales::get_trend))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
