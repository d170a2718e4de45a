//! REST surface: router construction and handlers.

use std::sync::Arc;

use advisor_core::AssetUniverse;
use axum::routing::{get, post};
use axum::Router;

use crate::config::ServerConfig;

pub mod handlers;

/// Shared, immutable state for all handlers.
///
/// The universe is frozen reference data; handlers never mutate it, so a
/// plain `Arc` is all the sharing discipline required.
#[derive(Clone)]
pub struct AppState {
    pub universe: Arc<AssetUniverse>,
    pub default_seed: u64,
}

/// Builds the application router.
pub fn create_router(config: ServerConfig) -> Router {
    let state = AppState {
        universe: Arc::new(AssetUniverse::default()),
        default_seed: config.default_seed,
    };

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/optimize", post(handlers::optimize))
        .route("/monte-carlo", post(handlers::monte_carlo))
        .route("/rebalance", post(handlers::rebalance))
        .with_state(state)
}
