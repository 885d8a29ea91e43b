//! Synthetic PokeAPI payloads shaped like the real responses

use serde_json::{Value, json};

/// `pokemon/25/` trimmed to the fields pokedex reads
pub fn pikachu() -> Value {
    json!({
        "name": "pikachu",
        "id": 25,
        "height": 4,
        "weight": 60,
        "base_experience": 112,
        "types": [ { "slot": 1, "type": { "name": "electric", "url": "https://pokeapi.co/api/v2/type/13/" } } ],
        "abilities": [
            { "is_hidden": false, "slot": 1, "ability": { "name": "static" } },
            { "is_hidden": true, "slot": 3, "ability": { "name": "lightning-rod" } }
        ],
        "moves": [
            { "move": { "name": "thunder-shock" }, "version_group_details": [] },
            { "move": { "name": "growl" }, "version_group_details": [] }
        ],
        "stats": [
            { "base_stat": 35, "effort": 0, "stat": { "name": "hp" } },
            { "base_stat": 90, "effort": 2, "stat": { "name": "speed" } }
        ]
    })
}

/// `pokemon/1/` trimmed to the fields pokedex reads
pub fn bulbasaur() -> Value {
    json!({
        "name": "bulbasaur",
        "id": 1,
        "height": 7,
        "weight": 69,
        "types": [
            { "slot": 1, "type": { "name": "grass" } },
            { "slot": 2, "type": { "name": "poison" } }
        ],
        "abilities": [ { "is_hidden": false, "slot": 1, "ability": { "name": "overgrow" } } ],
        "moves": [ { "move": { "name": "growl" } } ],
        "stats": [ { "base_stat": 45, "effort": 0, "stat": { "name": "hp" } } ]
    })
}

pub fn ability(name: &str, id: i64, pokemon: &[&str]) -> Value {
    json!({
        "name": name,
        "id": id,
        "generation": { "name": "generation-iii" },
        "effect_entries": [
            {
                "effect": format!("Effet de {name}"),
                "short_effect": "Court",
                "language": { "name": "fr" }
            },
            {
                "effect": format!("{name} full effect."),
                "short_effect": format!("{name} short effect."),
                "language": { "name": "en" }
            }
        ],
        "pokemon": pokemon
            .iter()
            .map(|p| json!({ "is_hidden": false, "slot": 1, "pokemon": { "name": p } }))
            .collect::<Vec<_>>()
    })
}

pub fn status_move(name: &str, id: i64) -> Value {
    json!({
        "name": name,
        "id": id,
        "accuracy": 100,
        "pp": 40,
        "power": null,
        "type": { "name": "normal" },
        "damage_class": { "name": "status" },
        "generation": { "name": "generation-i" },
        "effect_entries": [
            {
                "effect": "Lowers the target's Attack by one stage.",
                "short_effect": "Lowers the target's Attack by one stage.",
                "language": { "name": "en" }
            }
        ]
    })
}

pub fn damaging_move(name: &str, id: i64, power: i64) -> Value {
    json!({
        "name": name,
        "id": id,
        "accuracy": 100,
        "pp": 30,
        "power": power,
        "type": { "name": "electric" },
        "damage_class": { "name": "special" },
        "generation": { "name": "generation-i" },
        "effect_entries": [
            {
                "effect": "Inflicts regular damage.",
                "short_effect": "Has a chance to paralyze the target.",
                "language": { "name": "en" }
            }
        ]
    })
}

pub fn stat(name: &str, id: i64) -> Value {
    json!({ "name": name, "id": id, "is_battle_only": false })
}
