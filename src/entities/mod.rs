//! Domain entities produced from PokeAPI payloads
//!
//! Every entity is built once from one response (or a response pair, for
//! [`Stat`]) and never mutated afterwards. Rendering goes through
//! [`std::fmt::Display`]; [`PokedexObject::render`] is the sink-facing name
//! for it. Fields are read through accessors; only the parser builds
//! [`Ability`], [`Move`] and [`Stat`] values.

mod ability;
mod moves;
mod pokemon;
mod stat;

pub use ability::Ability;
pub use moves::Move;
pub use pokemon::Pokemon;
pub use stat::Stat;

use std::fmt;

/// Capability shared by every record the pokedex can show
pub trait PokedexObject: fmt::Display {
    /// API name of the record (e.g. "pikachu")
    fn name(&self) -> &str;

    /// Numeric API id of the record
    fn id(&self) -> i64;

    /// Multi-line human-readable text representation
    fn render(&self) -> String {
        self.to_string()
    }
}

/// A top-level result of a run, in the order it was requested
#[derive(Clone, Debug, PartialEq)]
pub enum PokedexEntry {
    /// Result of a Pokémon-mode lookup
    Pokemon(Pokemon),
    /// Result of an ability-mode lookup
    Ability(Ability),
    /// Result of a move-mode lookup
    Move(Move),
}

impl PokedexObject for PokedexEntry {
    fn name(&self) -> &str {
        match self {
            PokedexEntry::Pokemon(p) => p.name(),
            PokedexEntry::Ability(a) => a.name(),
            PokedexEntry::Move(m) => m.name(),
        }
    }

    fn id(&self) -> i64 {
        match self {
            PokedexEntry::Pokemon(p) => p.id(),
            PokedexEntry::Ability(a) => a.id(),
            PokedexEntry::Move(m) => m.id(),
        }
    }
}

impl fmt::Display for PokedexEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PokedexEntry::Pokemon(p) => fmt::Display::fmt(p, f),
            PokedexEntry::Ability(a) => fmt::Display::fmt(a, f),
            PokedexEntry::Move(m) => fmt::Display::fmt(m, f),
        }
    }
}

impl From<Pokemon> for PokedexEntry {
    fn from(pokemon: Pokemon) -> Self {
        PokedexEntry::Pokemon(pokemon)
    }
}

impl From<Ability> for PokedexEntry {
    fn from(ability: Ability) -> Self {
        PokedexEntry::Ability(ability)
    }
}

impl From<Move> for PokedexEntry {
    fn from(mv: Move) -> Self {
        PokedexEntry::Move(mv)
    }
}

/// Writes the `"<Kind> Name: ..."` / `"ID: ..."` lines every rendering starts with
fn write_header(f: &mut fmt::Formatter<'_>, kind: &str, name: &str, id: i64) -> fmt::Result {
    writeln!(f, "{kind} Name: {name}")?;
    writeln!(f, "ID: {id}")
}

/// Renders an optional integer, using `None` for a missing value
fn or_none(value: Option<i64>) -> String {
    value.map_or_else(|| "None".to_string(), |v| v.to_string())
}

/// Renders a boolean as `True` or `False`
fn title_bool(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

/// Joins displayable items with a separator
fn join_display<T: fmt::Display>(items: &[T], sep: &str) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(sep)
}
