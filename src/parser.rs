//! PokeAPI payload parsing
//!
//! Pure functions mapping a raw JSON payload onto the typed entities. Each
//! is total over well-formed payloads; a missing or mistyped field, or an
//! effect list without an English entry, yields
//! [`Error::MalformedResponse`](crate::error::Error::MalformedResponse).

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::entities::{Ability, Move, Pokemon, PokedexEntry, Stat};
use crate::error::{Error, Result};
use crate::types::{Endpoint, Mode};

/// Language whose effect text is shown
const EFFECT_LANGUAGE: &str = "en";

#[derive(Debug, Deserialize)]
struct NamedResource {
    name: String,
}

#[derive(Debug, Deserialize)]
struct EffectEntry {
    #[serde(default)]
    effect: Option<String>,
    #[serde(default)]
    short_effect: Option<String>,
    language: NamedResource,
}

#[derive(Debug, Deserialize)]
struct AbilityPayload {
    name: String,
    id: i64,
    generation: NamedResource,
    effect_entries: Vec<EffectEntry>,
    pokemon: Vec<AbilityPokemon>,
}

#[derive(Debug, Deserialize)]
struct AbilityPokemon {
    pokemon: NamedResource,
}

#[derive(Debug, Deserialize)]
struct MovePayload {
    name: String,
    id: i64,
    generation: NamedResource,
    // Key must be present; only an explicit `null` maps to None
    #[serde(deserialize_with = "Option::deserialize")]
    accuracy: Option<i64>,
    #[serde(deserialize_with = "Option::deserialize")]
    pp: Option<i64>,
    #[serde(deserialize_with = "Option::deserialize")]
    power: Option<i64>,
    #[serde(rename = "type")]
    move_type: NamedResource,
    damage_class: NamedResource,
    effect_entries: Vec<EffectEntry>,
}

#[derive(Debug, Deserialize)]
struct StatPayload {
    name: String,
    id: i64,
    is_battle_only: bool,
}

#[derive(Debug, Deserialize)]
struct PokemonPayload {
    name: String,
    id: i64,
    height: i64,
    weight: i64,
    types: Vec<PokemonType>,
}

#[derive(Debug, Deserialize)]
struct PokemonType {
    #[serde(rename = "type")]
    kind: NamedResource,
}

#[derive(Debug, Deserialize)]
struct PokemonRefsPayload {
    abilities: Vec<PokemonAbility>,
    moves: Vec<PokemonMove>,
    stats: Vec<PokemonStat>,
}

#[derive(Debug, Deserialize)]
struct PokemonAbility {
    ability: NamedResource,
}

#[derive(Debug, Deserialize)]
struct PokemonMove {
    #[serde(rename = "move")]
    mv: NamedResource,
}

#[derive(Debug, Deserialize)]
struct PokemonStat {
    base_stat: i64,
    stat: NamedResource,
}

/// A stat a Pokémon lists, before its `stat/{name}/` lookup
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatRef {
    /// Stat name to look up
    pub name: String,
    /// The Pokémon's base value for it
    pub base_stat: i64,
}

/// Identifiers for the second fetch wave of one Pokémon, in payload order
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpansionRefs {
    /// Ability names
    pub abilities: Vec<String>,
    /// Move names
    pub moves: Vec<String>,
    /// Stat names with the Pokémon's base values
    pub stats: Vec<StatRef>,
}

/// Parse an `ability/{id}/` payload
pub fn parse_ability(json: &Value) -> Result<Ability> {
    let payload: AbilityPayload = decode(Endpoint::Ability, json)?;
    let entry = english_entry(Endpoint::Ability, &payload.name, &payload.effect_entries)?;
    let effect = required_text(Endpoint::Ability, json, entry.effect.as_ref(), "effect")?;
    let short_effect =
        required_text(Endpoint::Ability, json, entry.short_effect.as_ref(), "short_effect")?;

    Ok(Ability {
        short_effect,
        effect,
        generation: payload.generation.name,
        pokemon_names: payload
            .pokemon
            .into_iter()
            .map(|p| p.pokemon.name)
            .collect(),
        name: payload.name,
        id: payload.id,
    })
}

/// Parse a `move/{id}/` payload
pub fn parse_move(json: &Value) -> Result<Move> {
    let payload: MovePayload = decode(Endpoint::Move, json)?;
    let entry = english_entry(Endpoint::Move, &payload.name, &payload.effect_entries)?;
    let short_effect =
        required_text(Endpoint::Move, json, entry.short_effect.as_ref(), "short_effect")?;

    Ok(Move {
        name: payload.name,
        id: payload.id,
        generation: payload.generation.name,
        accuracy: payload.accuracy,
        pp: payload.pp,
        power: payload.power,
        move_type: payload.move_type.name,
        damage_class: payload.damage_class.name,
        short_effect,
    })
}

/// Parse a `stat/{id}/` payload, merging in the owning Pokémon's base value
pub fn parse_stat(json: &Value, base_stat: i64) -> Result<Stat> {
    let payload: StatPayload = decode(Endpoint::Stat, json)?;

    Ok(Stat {
        name: payload.name,
        id: payload.id,
        base_stat,
        is_battle_only: payload.is_battle_only,
    })
}

/// Parse a `pokemon/{id}/` payload into a record without nested detail
pub fn parse_pokemon_shallow(json: &Value) -> Result<Pokemon> {
    let payload: PokemonPayload = decode(Endpoint::Pokemon, json)?;
    let types = payload.types.into_iter().map(|t| t.kind.name).collect();

    Ok(Pokemon::new(
        payload.name,
        payload.id,
        payload.height,
        payload.weight,
        types,
    ))
}

/// Extract the ability, move and stat identifiers a `pokemon/{id}/` payload lists
pub fn expansion_refs(json: &Value) -> Result<ExpansionRefs> {
    let payload: PokemonRefsPayload = decode(Endpoint::Pokemon, json)?;

    Ok(ExpansionRefs {
        abilities: payload
            .abilities
            .into_iter()
            .map(|a| a.ability.name)
            .collect(),
        moves: payload.moves.into_iter().map(|m| m.mv.name).collect(),
        stats: payload
            .stats
            .into_iter()
            .map(|s| StatRef {
                name: s.stat.name,
                base_stat: s.base_stat,
            })
            .collect(),
    })
}

/// Parse a primary-wave payload for `mode` (Pokémon records stay shallow)
pub fn parse_entry(mode: Mode, json: &Value) -> Result<PokedexEntry> {
    Ok(match mode {
        Mode::Pokemon => parse_pokemon_shallow(json)?.into(),
        Mode::Ability => parse_ability(json)?.into(),
        Mode::Move => parse_move(json)?.into(),
    })
}

fn decode<T: DeserializeOwned>(endpoint: Endpoint, json: &Value) -> Result<T> {
    T::deserialize(json).map_err(|e| Error::malformed(label(endpoint, json), e.to_string()))
}

/// First effect entry in the effect language; payload order decides ties
fn english_entry<'a>(
    endpoint: Endpoint,
    name: &str,
    entries: &'a [EffectEntry],
) -> Result<&'a EffectEntry> {
    entries
        .iter()
        .find(|e| e.language.name == EFFECT_LANGUAGE)
        .ok_or_else(|| {
            Error::malformed(
                format!("{} '{}'", endpoint.resource(), name),
                "no English effect entry",
            )
        })
}

/// A text field of the selected effect entry, which must be present
fn required_text(
    endpoint: Endpoint,
    json: &Value,
    value: Option<&String>,
    field: &str,
) -> Result<String> {
    value.cloned().ok_or_else(|| {
        Error::malformed(
            label(endpoint, json),
            format!("English effect entry has no `{field}` text"),
        )
    })
}

/// "ability 'stench'" when the payload has a name, else just "ability"
fn label(endpoint: Endpoint, json: &Value) -> String {
    match json.get("name").and_then(Value::as_str) {
        Some(name) => format!("{} '{}'", endpoint.resource(), name),
        None => endpoint.resource().to_string(),
    }
}
