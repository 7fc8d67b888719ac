//! Axum router construction.
//!
//! Assembles all routes into a single [`Router`] with CORS enabled so a
//! browser client on another origin can call the JSON API.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router.
///
/// The router includes:
/// - `GET /` -- search page
/// - `GET /search` -- search and render
/// - `GET /api/lineage/{name}` -- JSON resolution
/// - `GET /api/state` -- JSON search state
/// - `GET /health` -- liveness probe
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Page
        .route("/", get(handlers::index))
        .route("/search", get(handlers::search))
        // JSON API
        .route("/api/lineage/{name}", get(handlers::get_lineage))
        .route("/api/state", get(handlers::get_state))
        .route("/health", get(handlers::health))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
