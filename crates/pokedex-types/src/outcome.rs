//! Failure kinds and the tagged result of a search.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::model::{Entity, Lineage};

/// Message shown when the query is empty or whitespace-only.
const EMPTY_QUERY_MESSAGE: &str = "Por favor ingresa el nombre de un Pokémon";

/// Message shown for every lookup failure after validation.
const LOOKUP_FAILED_MESSAGE: &str = "No se pudo encontrar el Pokémon o su cadena evolutiva";

/// Why a search produced no result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum ErrorKind {
    /// The query was empty; no request was issued.
    Validation,
    /// The primary entity lookup returned a non-success status.
    NotFound,
    /// A later lookup failed or a payload had an unexpected shape.
    Resolution,
}

impl ErrorKind {
    /// The message shown to the user for this kind.
    ///
    /// Lookup failures deliberately collapse into one message; the
    /// distinction is kept only for logs and API status codes.
    pub const fn user_message(self) -> &'static str {
        match self {
            Self::Validation => EMPTY_QUERY_MESSAGE,
            Self::NotFound | Self::Resolution => LOOKUP_FAILED_MESSAGE,
        }
    }

    /// Stable snake-case label used in logs and API bodies.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::NotFound => "not_found",
            Self::Resolution => "resolution",
        }
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tagged result of one search: either the full display model or a failure.
///
/// Partial results do not exist. A failure never carries an entity or a
/// lineage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "status", rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum SearchOutcome {
    /// Every lookup in the chain succeeded.
    Success {
        /// The searched creature.
        entity: Entity,
        /// The evolution path containing it.
        lineage: Lineage,
    },
    /// The search was rejected or aborted.
    Failure {
        /// What went wrong.
        kind: ErrorKind,
    },
}

impl SearchOutcome {
    /// Whether the search produced a result.
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The failure kind, if the search failed.
    pub const fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { kind } => Some(*kind),
        }
    }
}
