use axum::{
    Router,
    routing::{get, post},
};
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::infrastructure::ServiceConfig;

/// Application state shared across handlers
pub struct AppState {
    pub config: ServiceConfig,
}

impl AppState {
    pub fn new(config: ServiceConfig) -> Self {
        AppState { config }
    }
}

/// Create the REST API router
pub fn create_router(state: Arc<AppState>) -> Router {
    let index = ServeFile::new(Path::new(&state.config.assets.templates_dir).join("index.html"));
    let static_assets = ServeDir::new(&state.config.assets.static_dir);

    Router::new()
        // Calculation endpoint
        .route("/calculator", post(handlers::calculate))
        // Liveness
        .route("/ping", get(handlers::ping))
        // Browser front-end
        .route_service("/", index)
        .nest_service("/static", static_assets)
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
