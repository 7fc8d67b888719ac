//! Search page and JSON API for the Pokedex lineage lookup.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **Search page** (`GET /`, `GET /search?name=...`) rendered server-side
//!   from the shared [`SearchState`](pokedex_core::SearchState)
//! - **JSON API** (`GET /api/lineage/{name}`, `GET /api/state`) for
//!   browser clients using the generated `TypeScript` bindings
//! - **Health probe** (`GET /health`)
//!
//! # Architecture
//!
//! Searches go through the shared [`SearchSession`](pokedex_core::SearchSession),
//! which keeps the state of the most recently issued search for `GET /` and
//! `GET /api/state`. A `/search` response renders that request's own
//! outcome. The lineage endpoint calls the resolver directly and touches no
//! shared state.

pub mod config;
pub mod error;
pub mod handlers;
pub mod render;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use config::{ConfigError, WebConfig};
pub use router::build_router;
pub use server::{ServerError, start_server};
pub use state::AppState;
