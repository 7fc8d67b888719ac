//! Lineage resolver for the Pokedex lookup.
//!
//! Given a creature name, the resolver performs a bounded chain of
//! dependent HTTP GET requests against `PokeAPI` and folds the responses
//! into a display model: the searched [`Entity`](pokedex_types::Entity)
//! plus one linear [`Lineage`](pokedex_types::Lineage).
//!
//! # Request chain
//!
//! ```text
//! /pokemon/{name} --> species.url --> evolution_chain.url --> /pokemon/{stage} (per stage)
//! ```
//!
//! Every request runs strictly after the previous one completes. Any
//! failure aborts the whole resolution; partial results are never
//! returned.
//!
//! Network access goes through [`DexSource`], which dispatches to a live
//! [`HttpSource`] or an in-memory [`FixtureSource`].

pub mod error;
pub mod fixture;
pub mod payload;
pub mod resolver;
#[cfg(any(test, feature = "sample-data"))]
pub mod sample;
pub mod source;

pub use error::{BuildError, FetchError, ResolveError, ResolveStep};
pub use fixture::FixtureSource;
pub use resolver::{DEFAULT_API_BASE, LineageResolver, Resolution};
pub use source::{DexSource, FetchResponse, HttpSource, SourceConfig};
