//! Search session: drives the resolver and feeds the state container.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use pokedex_resolver::{LineageResolver, Resolution, ResolveError};
use pokedex_types::SearchOutcome;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::state::{SearchState, SearchTransition};

/// Owns the resolver and the shared [`SearchState`].
///
/// Several searches may be in flight at once; only the most recently
/// issued one can change the state when it completes. The state lock is
/// held only while a transition is applied, never across a network call.
pub struct SearchSession {
    resolver: LineageResolver,
    state: Arc<RwLock<SearchState>>,
    next_generation: AtomicU64,
}

impl SearchSession {
    /// Create a session with an empty state.
    pub fn new(resolver: LineageResolver) -> Self {
        Self {
            resolver,
            state: Arc::new(RwLock::new(SearchState::default())),
            next_generation: AtomicU64::new(1),
        }
    }

    /// The resolver used for every search.
    pub const fn resolver(&self) -> &LineageResolver {
        &self.resolver
    }

    /// Handle to the shared state, for readers outside the session.
    pub fn state(&self) -> Arc<RwLock<SearchState>> {
        Arc::clone(&self.state)
    }

    /// Clone of the current state.
    pub async fn snapshot(&self) -> SearchState {
        self.state.read().await.clone()
    }

    /// Run one search end to end.
    ///
    /// Issues a new generation, marks the state as loading, resolves the
    /// query, and applies the completion if no newer search has started
    /// meanwhile. The outcome is returned either way.
    pub async fn search(&self, query: &str) -> SearchOutcome {
        let generation = self.next_generation.fetch_add(1, Ordering::SeqCst);

        self.apply(SearchTransition::SearchStarted {
            generation,
            query: query.to_owned(),
        })
        .await;
        debug!(generation, query, "search started");

        let outcome = outcome_of(self.resolver.resolve(query).await, generation);

        let completion = match &outcome {
            SearchOutcome::Success { entity, lineage } => SearchTransition::SearchSucceeded {
                generation,
                entity: entity.clone(),
                lineage: lineage.clone(),
            },
            SearchOutcome::Failure { kind } => SearchTransition::SearchFailed {
                generation,
                kind: *kind,
            },
        };

        if !self.apply(completion).await {
            debug!(generation, "discarding stale search result");
        }

        outcome
    }

    async fn apply(&self, transition: SearchTransition) -> bool {
        self.state.write().await.apply(transition)
    }
}

/// Fold a resolver result into the tagged outcome, logging failures.
fn outcome_of(result: Result<Resolution, ResolveError>, generation: u64) -> SearchOutcome {
    match result {
        Ok(Resolution { entity, lineage }) => {
            info!(generation, pokemon = entity.name, stages = lineage.len(), "search succeeded");
            SearchOutcome::Success { entity, lineage }
        }
        Err(e) => {
            let kind = e.kind();
            warn!(generation, kind = kind.as_str(), error = %e, "search failed");
            SearchOutcome::Failure { kind }
        }
    }
}
