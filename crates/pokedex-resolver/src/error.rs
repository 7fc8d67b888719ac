//! Error types for the lineage resolver.
//!
//! [`FetchError`] covers a single request that never produced a response.
//! [`ResolveError`] is what a whole resolution surfaces; it keeps enough
//! detail for logs and collapses to an [`ErrorKind`] for display.

use pokedex_types::ErrorKind;

/// A request that failed before any HTTP status was received.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The HTTP client failed (connect, TLS, body read).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The configured per-request timeout elapsed.
    #[error("request to {url} timed out")]
    Timeout {
        /// The URL that was being fetched.
        url: String,
    },

    /// A fixture URL registered as unreachable.
    #[error("unreachable: {0}")]
    Unreachable(String),
}

/// Which lookup in the chain a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveStep {
    /// The primary `/pokemon/{name}` lookup.
    Entity,
    /// The species resource referenced by the entity.
    Species,
    /// The evolution-chain resource referenced by the species.
    EvolutionChain,
    /// A per-stage `/pokemon/{stage}` sprite lookup.
    Stage,
}

impl ResolveStep {
    /// Short label used in log fields and error messages.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Entity => "entity",
            Self::Species => "species",
            Self::EvolutionChain => "evolution_chain",
            Self::Stage => "stage",
        }
    }
}

impl core::fmt::Display for ResolveStep {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that abort a resolution.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// The query was empty or whitespace-only. No request was issued.
    #[error("empty query")]
    Validation,

    /// The primary lookup answered with a non-success status.
    #[error("no entity named {name:?} (status {status})")]
    NotFound {
        /// The normalized name that was looked up.
        name: String,
        /// The HTTP status returned by the service.
        status: u16,
    },

    /// Any later failure: transport, status, or payload shape.
    #[error("{step} lookup failed: {detail}")]
    Resolution {
        /// The lookup that failed.
        step: ResolveStep,
        /// Human-readable cause, for logs only.
        detail: String,
    },
}

impl ResolveError {
    /// Build a [`ResolveError::Resolution`] for the given step.
    pub fn resolution(step: ResolveStep, detail: impl core::fmt::Display) -> Self {
        Self::Resolution {
            step,
            detail: detail.to_string(),
        }
    }

    /// The display-level kind of this error.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation => ErrorKind::Validation,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Resolution { .. } => ErrorKind::Resolution,
        }
    }
}

/// Errors raised while constructing a source or resolver.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// The API base URL could not be used to build lookup URLs.
    #[error("invalid API base URL {url:?}: {reason}")]
    InvalidBaseUrl {
        /// The rejected URL.
        url: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_map_one_to_one() {
        assert_eq!(ResolveError::Validation.kind(), ErrorKind::Validation);
        assert_eq!(
            ResolveError::NotFound {
                name: String::from("zzzznotreal"),
                status: 404,
            }
            .kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            ResolveError::resolution(ResolveStep::Species, "boom").kind(),
            ErrorKind::Resolution
        );
    }

    #[test]
    fn resolution_message_names_the_step() {
        let err = ResolveError::resolution(ResolveStep::EvolutionChain, "status 500");
        assert_eq!(err.to_string(), "evolution_chain lookup failed: status 500");
    }
}
