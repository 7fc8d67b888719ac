//! `PokeAPI` response shapes.
//!
//! Only the fields the resolver consumes are modeled; everything else in
//! the payloads is ignored by `serde`. Field names follow the service.

use pokedex_types::Entity;
use serde::Deserialize;

/// A `{ "name": ..., "url": ... }` reference where only the name is used.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    /// Resource name.
    pub name: String,
}

/// A `{ "url": ... }` reference to another resource.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResource {
    /// Absolute URL of the referenced resource.
    pub url: String,
}

/// Sprite block of a `/pokemon/{name}` response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Sprites {
    /// Default front sprite. `null` for some forms.
    #[serde(default)]
    pub front_default: Option<String>,
}

/// One entry of `abilities[]`.
#[derive(Debug, Clone, Deserialize)]
pub struct AbilitySlot {
    /// The ability reference.
    pub ability: NamedResource,
}

/// One entry of `types[]`.
#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    /// The type reference.
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

/// Body of the primary `/pokemon/{name}` lookup.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonPayload {
    /// Canonical name.
    pub name: String,
    /// Sprite URLs.
    pub sprites: Sprites,
    /// Abilities in service order.
    pub abilities: Vec<AbilitySlot>,
    /// Types in slot order.
    pub types: Vec<TypeSlot>,
    /// Reference to the species resource.
    pub species: ApiResource,
}

impl PokemonPayload {
    /// Split the payload into the display entity and the species URL.
    pub fn into_parts(self) -> (Entity, String) {
        let entity = Entity {
            name: self.name,
            sprite_url: self.sprites.front_default,
            abilities: self
                .abilities
                .into_iter()
                .map(|slot| slot.ability.name)
                .collect(),
            types: self.types.into_iter().map(|slot| slot.kind.name).collect(),
        };
        (entity, self.species.url)
    }
}

/// Body of a per-stage `/pokemon/{stage}` lookup; only the sprite is read.
#[derive(Debug, Clone, Deserialize)]
pub struct StagePayload {
    /// Sprite URLs.
    pub sprites: Sprites,
}

/// Body of the species lookup.
#[derive(Debug, Clone, Deserialize)]
pub struct SpeciesPayload {
    /// Reference to the evolution-chain resource.
    pub evolution_chain: ApiResource,
}

/// Body of the evolution-chain lookup.
#[derive(Debug, Clone, Deserialize)]
pub struct EvolutionChainPayload {
    /// Root node of the chain (the base form).
    pub chain: ChainLink,
}

/// One node of the evolution tree.
#[derive(Debug, Clone, Deserialize)]
pub struct ChainLink {
    /// Species at this node.
    pub species: NamedResource,
    /// Conditions for evolving into this node. Empty for the root.
    #[serde(default)]
    pub evolution_details: Vec<EvolutionDetail>,
    /// Child nodes. Only the first is ever followed.
    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
}

impl ChainLink {
    /// Minimum level from the first evolution-detail entry.
    ///
    /// `None` when the details list is empty, or when the first entry is
    /// not level-based (`min_level` null or zero).
    pub fn min_level(&self) -> Option<u32> {
        self.evolution_details
            .first()
            .and_then(|detail| detail.min_level)
            .filter(|level| *level > 0)
    }

    /// The child followed by the walk.
    pub fn first_child(&self) -> Option<&Self> {
        self.evolves_to.first()
    }
}

/// One entry of `evolution_details[]`.
#[derive(Debug, Clone, Deserialize)]
pub struct EvolutionDetail {
    /// Level requirement, when the evolution is level-based.
    #[serde(default)]
    pub min_level: Option<u32>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn pokemon_payload_keeps_service_order() {
        let json = serde_json::json!({
            "id": 4,
            "name": "charmander",
            "sprites": { "front_default": "https://img/4.png", "back_default": null },
            "abilities": [
                { "ability": { "name": "blaze", "url": "a/66" }, "is_hidden": false, "slot": 1 },
                { "ability": { "name": "solar-power", "url": "a/94" }, "is_hidden": true, "slot": 3 }
            ],
            "types": [ { "slot": 1, "type": { "name": "fire", "url": "t/10" } } ],
            "species": { "name": "charmander", "url": "https://api/pokemon-species/4/" }
        });

        let payload: PokemonPayload = serde_json::from_value(json).unwrap();
        let (entity, species_url) = payload.into_parts();

        assert_eq!(entity.name, "charmander");
        assert_eq!(entity.sprite_url.as_deref(), Some("https://img/4.png"));
        assert_eq!(entity.abilities, vec!["blaze", "solar-power"]);
        assert_eq!(entity.types, vec!["fire"]);
        assert_eq!(species_url, "https://api/pokemon-species/4/");
    }

    #[test]
    fn missing_species_is_a_parse_error() {
        let json = serde_json::json!({
            "name": "charmander",
            "sprites": {},
            "abilities": [],
            "types": []
        });
        let payload: Result<PokemonPayload, _> = serde_json::from_value(json);
        assert!(payload.is_err());
    }

    #[test]
    fn min_level_rules() {
        let root: Result<ChainLink, _> = serde_json::from_value(serde_json::json!({
            "species": { "name": "eevee" },
            "evolution_details": [],
            "evolves_to": []
        }));
        let item: Result<ChainLink, _> = serde_json::from_value(serde_json::json!({
            "species": { "name": "vaporeon" },
            "evolution_details": [ { "min_level": null, "item": { "name": "water-stone" } } ],
            "evolves_to": []
        }));
        let leveled: Result<ChainLink, _> = serde_json::from_value(serde_json::json!({
            "species": { "name": "charmeleon" },
            "evolution_details": [ { "min_level": 16 }, { "min_level": 20 } ],
            "evolves_to": []
        }));

        assert!(matches!(root.map(|l| l.min_level()), Ok(None)));
        assert!(matches!(item.map(|l| l.min_level()), Ok(None)));
        assert!(matches!(leveled.map(|l| l.min_level()), Ok(Some(16))));
    }
}
