//! The search state container and its transitions.
//!
//! [`SearchState`] is only ever changed through [`SearchState::apply`].
//! Entity and lineage are always cleared together when a search starts,
//! and a failure never leaves a previous result on screen.

use pokedex_types::{Entity, ErrorKind, Lineage, SearchOutcome};
use serde::Serialize;
use ts_rs::TS;

/// Transient UI state for the search page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SearchState {
    /// Query text of the latest search.
    pub query: String,
    /// Whether the latest search is still in flight.
    pub loading: bool,
    /// User-facing error message of the latest search.
    pub error: Option<String>,
    /// Kind of the latest failure, for clients that branch on it.
    pub error_kind: Option<ErrorKind>,
    /// Entity of the latest successful search.
    pub entity: Option<Entity>,
    /// Lineage of the latest successful search.
    pub lineage: Lineage,
    /// Generation of the latest search that started.
    ///
    /// Serialized as a JSON number.
    #[ts(type = "number")]
    pub generation: u64,
}

/// A well-defined change to [`SearchState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchTransition {
    /// A new search was issued.
    SearchStarted {
        /// Generation assigned to the search.
        generation: u64,
        /// Raw query text as entered.
        query: String,
    },
    /// The search with this generation resolved.
    SearchSucceeded {
        /// Generation the result belongs to.
        generation: u64,
        /// The searched creature.
        entity: Entity,
        /// Its evolution path.
        lineage: Lineage,
    },
    /// The search with this generation failed.
    SearchFailed {
        /// Generation the failure belongs to.
        generation: u64,
        /// What went wrong.
        kind: ErrorKind,
    },
}

impl SearchTransition {
    /// Generation this transition belongs to.
    pub const fn generation(&self) -> u64 {
        match self {
            Self::SearchStarted { generation, .. }
            | Self::SearchSucceeded { generation, .. }
            | Self::SearchFailed { generation, .. } => *generation,
        }
    }
}

impl SearchState {
    /// Apply a transition. Returns `false` if it was stale and ignored.
    ///
    /// A start is accepted only if its generation is newer than the current
    /// one. A completion is accepted only if its generation equals the
    /// current one.
    pub fn apply(&mut self, transition: SearchTransition) -> bool {
        match transition {
            SearchTransition::SearchStarted { generation, query } => {
                if generation <= self.generation {
                    return false;
                }
                self.generation = generation;
                self.query = query;
                self.loading = true;
                self.clear_result();
            }
            SearchTransition::SearchSucceeded {
                generation,
                entity,
                lineage,
            } => {
                if generation != self.generation {
                    return false;
                }
                self.loading = false;
                self.error = None;
                self.error_kind = None;
                self.entity = Some(entity);
                self.lineage = lineage;
            }
            SearchTransition::SearchFailed { generation, kind } => {
                if generation != self.generation {
                    return false;
                }
                self.loading = false;
                self.clear_result();
                self.error = Some(kind.user_message().to_owned());
                self.error_kind = Some(kind);
            }
        }
        true
    }

    /// A settled state holding one search's own outcome.
    ///
    /// Detached from any session: `generation` stays `0` and nothing is
    /// loading. Used to show a requester the result of the search it ran,
    /// whatever other searches did to the shared state meanwhile.
    pub fn settled(query: &str, outcome: SearchOutcome) -> Self {
        let mut state = Self {
            query: query.to_owned(),
            ..Self::default()
        };
        match outcome {
            SearchOutcome::Success { entity, lineage } => {
                state.entity = Some(entity);
                state.lineage = lineage;
            }
            SearchOutcome::Failure { kind } => {
                state.error = Some(kind.user_message().to_owned());
                state.error_kind = Some(kind);
            }
        }
        state
    }

    /// Whether a result is currently displayed.
    pub const fn has_result(&self) -> bool {
        self.entity.is_some()
    }

    fn clear_result(&mut self) {
        self.error = None;
        self.error_kind = None;
        self.entity = None;
        self.lineage.clear();
    }
}
