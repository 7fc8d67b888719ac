//! Search page rendering via `minijinja`.
//!
//! The page template is compiled into the binary. Rendering takes a
//! [`SearchState`] snapshot, derives a [`PageView`] with display strings
//! already formatted, and hands it to the template. The template holds
//! markup only.

use minijinja::Environment;
use pokedex_core::SearchState;
use pokedex_types::{Entity, EvolutionStage, capitalize, evolves_at_label};
use serde::Serialize;

use crate::error::WebError;

const PAGE_TEMPLATE: &str = "page.html";

/// Display model of one stage card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageView {
    /// Raw species name, used for `alt` text.
    pub name: String,
    /// Capitalized species name.
    pub display_name: String,
    /// Sprite URL, if any.
    pub sprite_url: Option<String>,
    /// "Evoluciona al nivel N" when the stage is level-based.
    pub evolves_at: Option<String>,
}

impl From<&EvolutionStage> for StageView {
    fn from(stage: &EvolutionStage) -> Self {
        Self {
            name: stage.name.clone(),
            display_name: capitalize(&stage.name),
            sprite_url: stage.sprite_url.clone(),
            evolves_at: evolves_at_label(stage),
        }
    }
}

/// Display model of the result panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityView {
    /// Raw name, used for `alt` text.
    pub name: String,
    /// Capitalized name.
    pub display_name: String,
    /// Sprite URL, if any.
    pub sprite_url: Option<String>,
    /// Ability names in service order.
    pub abilities: Vec<String>,
    /// Type names in slot order.
    pub types: Vec<String>,
}

impl From<&Entity> for EntityView {
    fn from(entity: &Entity) -> Self {
        Self {
            name: entity.name.clone(),
            display_name: capitalize(&entity.name),
            sprite_url: entity.sprite_url.clone(),
            abilities: entity.abilities.clone(),
            types: entity.types.clone(),
        }
    }
}

/// Everything the page template reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    /// Query text echoed back into the input.
    pub query: String,
    /// Whether to show the loading indicator.
    pub loading: bool,
    /// Error message, if any.
    pub error: Option<String>,
    /// Result panel, if any.
    pub entity: Option<EntityView>,
    /// Lineage cards in traversal order.
    pub lineage: Vec<StageView>,
}

impl From<&SearchState> for PageView {
    fn from(state: &SearchState) -> Self {
        Self {
            query: state.query.clone(),
            loading: state.loading,
            error: state.error.clone(),
            entity: state.entity.as_ref().map(EntityView::from),
            lineage: state.lineage.iter().map(StageView::from).collect(),
        }
    }
}

/// Renders the search page.
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    /// Compile the embedded page template.
    ///
    /// Templates named `*.html` are auto-escaped, so query text and
    /// service-provided names are safe to echo.
    pub fn new() -> Result<Self, WebError> {
        let mut env = Environment::new();
        env.add_template(PAGE_TEMPLATE, include_str!("../templates/page.html"))?;
        Ok(Self { env })
    }

    /// Render the page for a state snapshot.
    pub fn render(&self, state: &SearchState) -> Result<String, WebError> {
        let view = PageView::from(state);
        let html = self.env.get_template(PAGE_TEMPLATE)?.render(&view)?;
        Ok(html)
    }
}
