//! Axum router configuration for all endpoints

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::application::app_context::AppContext;
use crate::server::handlers;

/// Create the application router over a shared, read-only context
pub fn create_router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        // The page
        .route("/", get(handlers::index))
        .route("/predict", post(handlers::predict_form))
        // JSON endpoints
        .route("/api/predict", post(handlers::predict_json))
        .route("/status", get(handlers::status))
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}
