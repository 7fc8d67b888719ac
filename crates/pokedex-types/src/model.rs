//! Display-ready records assembled by the lineage resolver.
//!
//! An [`Entity`] is the creature that was searched for. A [`Lineage`] is
//! the single evolution path that contains it, root form first. Both are
//! immutable once built and are replaced wholesale by the next search.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The primary creature record produced by an entity lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Entity {
    /// Canonical lowercase name as reported by the data service.
    pub name: String,
    /// Front-facing sprite URL. The service reports `null` for some forms.
    pub sprite_url: Option<String>,
    /// Ability names in service order.
    pub abilities: Vec<String>,
    /// Type names in service order (slot 1 first).
    pub types: Vec<String>,
}

/// One node of an evolution path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct EvolutionStage {
    /// Species name of this stage.
    pub name: String,
    /// Front-facing sprite URL of the stage's default form.
    pub sprite_url: Option<String>,
    /// Minimum level required to evolve into this stage, if level-based.
    pub min_level: Option<u32>,
}

/// Ordered evolution path, root form first.
///
/// Serializes as a plain JSON array of [`EvolutionStage`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Lineage(Vec<EvolutionStage>);

impl Lineage {
    /// Create an empty lineage.
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a stage at the end of the path.
    pub fn push(&mut self, stage: EvolutionStage) {
        self.0.push(stage);
    }

    /// Remove every stage.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Number of stages in the path.
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the path has no stages.
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The root (base) form, if any.
    pub fn root(&self) -> Option<&EvolutionStage> {
        self.0.first()
    }

    /// Iterate stages in traversal order.
    pub fn iter(&self) -> std::slice::Iter<'_, EvolutionStage> {
        self.0.iter()
    }

    /// Stage names in traversal order.
    pub fn names(&self) -> Vec<&str> {
        self.0.iter().map(|stage| stage.name.as_str()).collect()
    }
}

impl From<Vec<EvolutionStage>> for Lineage {
    fn from(stages: Vec<EvolutionStage>) -> Self {
        Self(stages)
    }
}

impl<'a> IntoIterator for &'a Lineage {
    type Item = &'a EvolutionStage;
    type IntoIter = std::slice::Iter<'a, EvolutionStage>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
