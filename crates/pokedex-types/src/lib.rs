//! Shared type definitions for the Pokedex lineage lookup.
//!
//! This crate is the single source of truth for the display model used
//! across the workspace. Types defined here flow downstream to `TypeScript`
//! via `ts-rs` for browser clients of the JSON API.
//!
//! # Modules
//!
//! - [`model`] -- Entity, evolution stage, and lineage records
//! - [`outcome`] -- Error kinds and the tagged search outcome
//! - [`display`] -- Presentation helpers (capitalized names, level labels)

pub mod display;
pub mod model;
pub mod outcome;

// Re-export all public types at crate root for convenience.
pub use display::{capitalize, evolves_at_label};
pub use model::{Entity, EvolutionStage, Lineage};
pub use outcome::{ErrorKind, SearchOutcome};

#[cfg(test)]
mod tests {
    //! `TypeScript` binding generation.

    #[test]
    fn export_bindings() {
        use ts_rs::TS;

        let _ = crate::model::Entity::export_all();
        let _ = crate::model::EvolutionStage::export_all();
        let _ = crate::model::Lineage::export_all();
        let _ = crate::outcome::ErrorKind::export_all();
        let _ = crate::outcome::SearchOutcome::export_all();
    }
}
