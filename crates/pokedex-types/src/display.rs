//! Presentation helpers.
//!
//! These derive display strings from the model without touching it.

use crate::model::EvolutionStage;

/// Upper-case the first character of a name, leaving the rest untouched.
///
/// `"charmander"` becomes `"Charmander"`, `"mr-mime"` becomes `"Mr-mime"`.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Label shown under a stage card when the stage is reached by level-up.
pub fn evolves_at_label(stage: &EvolutionStage) -> Option<String> {
    stage
        .min_level
        .map(|level| format!("Evoluciona al nivel {level}"))
}
