//! Shared fixtures for unit tests: synthetic PokeAPI payloads and mock mounting.

use serde_json::{Value, json};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::config::Config;
use crate::pokedex::Pokedex;

/// Pokedex pointed at a mock server's `/api/v2/` root
pub(crate) fn pokedex_for(server: &MockServer) -> Pokedex {
    pokedex_with(server, None)
}

/// Same as [`pokedex_for`] with an optional in-flight cap
pub(crate) fn pokedex_with(server: &MockServer, max_concurrent: Option<usize>) -> Pokedex {
    let config = Config {
        base_url: format!("{}/api/v2/", server.uri()),
        max_concurrent_requests: max_concurrent,
        ..Default::default()
    };
    Pokedex::new(config).expect("failed to build pokedex")
}

/// Serve `body` at `/api/v2/{resource_path}`
pub(crate) async fn mount_json(server: &MockServer, resource_path: &str, body: Value) {
    mount_json_delayed(server, resource_path, body, Duration::ZERO).await;
}

/// Serve `body` at `/api/v2/{resource_path}` after `delay`
pub(crate) async fn mount_json_delayed(
    server: &MockServer,
    resource_path: &str,
    body: Value,
    delay: Duration,
) {
    Mock::given(method("GET"))
        .and(path(format!("/api/v2/{resource_path}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body).set_delay(delay))
        .mount(server)
        .await;
}

/// Answer `/api/v2/{resource_path}` with a bare status code
pub(crate) async fn mount_status(server: &MockServer, resource_path: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(format!("/api/v2/{resource_path}")))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

pub(crate) fn effect_entry(lang: &str, effect: &str, short_effect: &str) -> Value {
    json!({
        "effect": effect,
        "short_effect": short_effect,
        "language": { "name": lang }
    })
}

pub(crate) fn ability_payload(name: &str, id: i64, pokemon: &[&str]) -> Value {
    json!({
        "name": name,
        "id": id,
        "generation": { "name": "generation-iii" },
        "effect_entries": [
            effect_entry("de", "Deutscher Effekt", "Kurz"),
            effect_entry("en", &format!("{name} effect"), &format!("{name} short effect"))
        ],
        "pokemon": pokemon
            .iter()
            .map(|p| json!({ "is_hidden": false, "slot": 1, "pokemon": { "name": p } }))
            .collect::<Vec<_>>()
    })
}

pub(crate) fn move_payload(name: &str, id: i64) -> Value {
    json!({
        "name": name,
        "id": id,
        "accuracy": 100,
        "pp": 30,
        "power": 40,
        "type": { "name": "electric" },
        "damage_class": { "name": "special" },
        "generation": { "name": "generation-i" },
        "effect_entries": [
            effect_entry("en", &format!("{name} effect"), &format!("{name} short effect"))
        ]
    })
}

pub(crate) fn stat_payload(name: &str, id: i64) -> Value {
    json!({ "name": name, "id": id, "is_battle_only": false })
}

/// A Pokémon payload listing the given abilities, moves and `(stat, base)` pairs
pub(crate) fn pokemon_payload(
    name: &str,
    id: i64,
    abilities: &[&str],
    moves: &[&str],
    stats: &[(&str, i64)],
) -> Value {
    json!({
        "name": name,
        "id": id,
        "height": 4,
        "weight": 60,
        "types": [ { "slot": 1, "type": { "name": "electric" } } ],
        "abilities": abilities
            .iter()
            .map(|a| json!({ "slot": 1, "is_hidden": false, "ability": { "name": a } }))
            .collect::<Vec<_>>(),
        "moves": moves
            .iter()
            .map(|m| json!({ "move": { "name": m } }))
            .collect::<Vec<_>>(),
        "stats": stats
            .iter()
            .map(|(s, base)| json!({ "base_stat": base, "effort": 0, "stat": { "name": s } }))
            .collect::<Vec<_>>()
    })
}
