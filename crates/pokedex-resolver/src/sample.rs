//! Canned `PokeAPI` payloads for tests and local development.
//!
//! Covers three chain shapes:
//! - charmander → charmeleon (16) → charizard (36), a linear level-up line
//! - eevee → vaporeon | jolteon | flareon, a branching item-based chain
//! - ditto, a single-stage chain whose sprite is `null`
//!
//! [`source`] serves them under [`BASE`]; [`payloads`] yields the same
//! bodies for any other API root, e.g. a local HTTP listener.

use serde_json::{Value, json};

use crate::fixture::FixtureSource;

/// API base the sample URLs are registered under.
pub const BASE: &str = "https://pokeapi.test/api/v2";

fn sprite(id: u32) -> String {
    format!("https://sprites.test/pokemon/{id}.png")
}

fn pokemon(
    base: &str,
    name: &str,
    id: u32,
    sprite: Option<String>,
    abilities: &[&str],
    types: &[&str],
) -> Value {
    let abilities: Vec<Value> = abilities
        .iter()
        .enumerate()
        .map(|(slot, ability)| {
            json!({
                "ability": { "name": ability, "url": format!("{base}/ability/{ability}/") },
                "is_hidden": false,
                "slot": slot,
            })
        })
        .collect();
    let types: Vec<Value> = types
        .iter()
        .enumerate()
        .map(|(slot, kind)| {
            json!({
                "slot": slot,
                "type": { "name": kind, "url": format!("{base}/type/{kind}/") },
            })
        })
        .collect();

    json!({
        "id": id,
        "name": name,
        "sprites": { "front_default": sprite, "back_default": null },
        "abilities": abilities,
        "types": types,
        "species": { "name": name, "url": format!("{base}/pokemon-species/{id}/") },
    })
}

fn species(base: &str, id: u32, chain_id: u32) -> Value {
    json!({
        "id": id,
        "evolution_chain": { "url": format!("{base}/evolution-chain/{chain_id}/") },
    })
}

fn link(base: &str, name: &str, details: &Value, evolves_to: &[Value]) -> Value {
    json!({
        "is_baby": false,
        "species": { "name": name, "url": format!("{base}/pokemon-species/{name}/") },
        "evolution_details": details,
        "evolves_to": evolves_to,
    })
}

fn level_up(level: u32) -> Value {
    json!([{ "min_level": level, "trigger": { "name": "level-up" } }])
}

fn use_item(item: &str) -> Value {
    json!([{ "min_level": null, "item": { "name": item }, "trigger": { "name": "use-item" } }])
}

/// `(url, body)` pairs of every sample resource under `base`.
pub fn payloads(base: &str) -> Vec<(String, Value)> {
    let none = json!([]);
    let node = |name: &str, details: &Value, evolves_to: &[Value]| {
        link(base, name, details, evolves_to)
    };

    let charmander_chain = json!({
        "id": 2,
        "chain": node("charmander", &none, &[
            node("charmeleon", &level_up(16), &[
                node("charizard", &level_up(36), &[]),
            ]),
        ]),
    });

    let eevee_chain = json!({
        "id": 67,
        "chain": node("eevee", &none, &[
            node("vaporeon", &use_item("water-stone"), &[]),
            node("jolteon", &use_item("thunder-stone"), &[]),
            node("flareon", &use_item("fire-stone"), &[]),
        ]),
    });

    let ditto_chain = json!({
        "id": 66,
        "chain": node("ditto", &none, &[]),
    });

    let fire = ["blaze", "solar-power"];
    vec![
        (
            format!("{base}/pokemon/charmander"),
            pokemon(base, "charmander", 4, Some(sprite(4)), &fire, &["fire"]),
        ),
        (
            format!("{base}/pokemon/charmeleon"),
            pokemon(base, "charmeleon", 5, Some(sprite(5)), &fire, &["fire"]),
        ),
        (
            format!("{base}/pokemon/charizard"),
            pokemon(base, "charizard", 6, Some(sprite(6)), &fire, &["fire", "flying"]),
        ),
        (format!("{base}/pokemon-species/4/"), species(base, 4, 2)),
        (format!("{base}/pokemon-species/5/"), species(base, 5, 2)),
        (format!("{base}/pokemon-species/6/"), species(base, 6, 2)),
        (format!("{base}/evolution-chain/2/"), charmander_chain),
        (
            format!("{base}/pokemon/eevee"),
            pokemon(base, "eevee", 133, Some(sprite(133)), &["run-away", "adaptability"], &["normal"]),
        ),
        (
            format!("{base}/pokemon/vaporeon"),
            pokemon(base, "vaporeon", 134, Some(sprite(134)), &["water-absorb"], &["water"]),
        ),
        (
            format!("{base}/pokemon/jolteon"),
            pokemon(base, "jolteon", 135, Some(sprite(135)), &["volt-absorb"], &["electric"]),
        ),
        (
            format!("{base}/pokemon/flareon"),
            pokemon(base, "flareon", 136, Some(sprite(136)), &["flash-fire"], &["fire"]),
        ),
        (format!("{base}/pokemon-species/133/"), species(base, 133, 67)),
        (format!("{base}/evolution-chain/67/"), eevee_chain),
        (
            format!("{base}/pokemon/ditto"),
            pokemon(base, "ditto", 132, None, &["limber", "imposter"], &["normal"]),
        ),
        (format!("{base}/pokemon-species/132/"), species(base, 132, 66)),
        (format!("{base}/evolution-chain/66/"), ditto_chain),
    ]
}

/// A fixture source loaded with the sample chains under [`BASE`].
pub fn source() -> FixtureSource {
    payloads(BASE)
        .into_iter()
        .fold(FixtureSource::new(), |source, (url, body)| source.with_json(url, &body))
}
