//! Error types for the web layer.
//!
//! [`WebError`] unifies all failure modes into a single enum that can be
//! converted into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use pokedex_resolver::ResolveError;
use pokedex_types::ErrorKind;
use tracing::error;

/// Errors that can occur while serving a request.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    /// The lineage lookup failed.
    #[error("lookup failed: {0}")]
    Resolve(#[from] ResolveError),

    /// A page template failed to render.
    #[error("render error: {0}")]
    Render(String),
}

impl WebError {
    /// HTTP status for a failure of the given kind.
    pub const fn status_for(kind: ErrorKind) -> StatusCode {
        match kind {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Resolution => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let body = match &self {
            Self::Resolve(e) => {
                let kind = e.kind();
                let status = Self::status_for(kind);
                serde_json::json!({
                    "error": kind.user_message(),
                    "kind": kind,
                    "status": status.as_u16(),
                })
            }
            Self::Render(msg) => {
                error!(error = %msg, "page render failed");
                serde_json::json!({
                    "error": "internal error",
                    "status": StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
                })
            }
        };

        let status = match &self {
            Self::Resolve(e) => Self::status_for(e.kind()),
            Self::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<minijinja::Error> for WebError {
    fn from(e: minijinja::Error) -> Self {
        Self::Render(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_map_to_distinct_statuses() {
        assert_eq!(WebError::status_for(ErrorKind::Validation), StatusCode::BAD_REQUEST);
        assert_eq!(WebError::status_for(ErrorKind::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(WebError::status_for(ErrorKind::Resolution), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn resolve_error_response_status() {
        let response = WebError::from(ResolveError::NotFound {
            name: String::from("missingno"),
            status: 404,
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
