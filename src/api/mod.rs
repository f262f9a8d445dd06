pub mod features;
pub mod health;
pub mod search;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::discovery::service::DiscoveryService;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub discovery: Arc<DiscoveryService>,
}

impl AppState {
    pub fn new(discovery: DiscoveryService) -> Self {
        Self {
            discovery: Arc::new(discovery),
        }
    }
}

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Search
        .route("/search", post(search::search))
        // Rendering hints
        .route("/cards/styles", get(features::card_styles))
        // Placeholder features
        .route(
            "/features/semantic-search",
            get(features::semantic_search_feature),
        )
        .with_state(state)
}
