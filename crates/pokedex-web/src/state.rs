//! Shared application state for the web server.
//!
//! [`AppState`] is wrapped in [`Arc`](std::sync::Arc) and injected via
//! Axum's `State` extractor. It holds the search session (resolver plus
//! the shared search state) and the compiled page renderer.

use pokedex_core::SearchSession;
use pokedex_resolver::LineageResolver;

use crate::error::WebError;
use crate::render::PageRenderer;

/// Shared state for the Axum application.
pub struct AppState {
    /// Search session driving the page.
    pub session: SearchSession,
    /// Compiled page templates.
    pub renderer: PageRenderer,
}

impl AppState {
    /// Build application state around a resolver.
    pub fn new(resolver: LineageResolver) -> Result<Self, WebError> {
        Ok(Self {
            session: SearchSession::new(resolver),
            renderer: PageRenderer::new()?,
        })
    }
}
