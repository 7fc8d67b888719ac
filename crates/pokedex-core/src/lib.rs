//! Search state and session orchestration for the Pokedex lookup.
//!
//! The UI never mutates search state directly. A [`SearchSession`] turns
//! each query into a sequence of [`SearchTransition`]s applied to a
//! [`SearchState`]:
//!
//! ```text
//! SearchStarted(g) --> resolver --> SearchSucceeded(g) | SearchFailed(g)
//! ```
//!
//! Every search is tagged with a monotonically increasing generation `g`.
//! A completion is applied only if `g` is still the latest generation, so
//! a slow response can never overwrite the result of a newer search.

pub mod session;
pub mod state;

pub use session::SearchSession;
pub use state::{SearchState, SearchTransition};
