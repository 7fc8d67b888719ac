//! HTTP endpoint handlers.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Search page for the current state |
//! | `GET` | `/search?name=` | Run a search, then render its outcome |
//! | `GET` | `/api/lineage/{name}` | Stateless JSON resolution |
//! | `GET` | `/api/state` | Current search state as JSON |
//! | `GET` | `/health` | Liveness probe |

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::response::{Html, IntoResponse};
use pokedex_core::SearchState;
use pokedex_resolver::Resolution;

use crate::error::WebError;
use crate::state::AppState;

/// Query parameters for `GET /search`.
#[derive(Debug, serde::Deserialize)]
pub struct SearchParams {
    /// Name to look up. Missing is treated as empty.
    #[serde(default)]
    pub name: String,
}

/// Serve the search page for the current state.
pub async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, WebError> {
    let snapshot = state.session.snapshot().await;
    Ok(Html(state.renderer.render(&snapshot)?))
}

/// Run a search through the session and render its own outcome.
///
/// The shared state still records the search, but the page answers with
/// this request's result even if another client searched meanwhile.
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Html<String>, WebError> {
    let outcome = state.session.search(&params.name).await;
    let page = SearchState::settled(&params.name, outcome);
    Ok(Html(state.renderer.render(&page)?))
}

/// Resolve a name without touching the shared state.
pub async fn get_lineage(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<Resolution>, WebError> {
    let resolution = state.session.resolver().resolve(&name).await?;
    Ok(Json(resolution))
}

/// Return the current search state.
pub async fn get_state(State(state): State<Arc<AppState>>) -> Json<SearchState> {
    Json(state.session.snapshot().await)
}

/// Liveness probe.
#[allow(clippy::unused_async)]
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}
