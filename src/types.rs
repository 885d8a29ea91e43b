//! Core types for pokedex

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Which kind of record a run looks up
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Pokémon records (`pokemon/{id}/`)
    Pokemon,
    /// Ability records (`ability/{id}/`)
    Ability,
    /// Move records (`move/{id}/`)
    Move,
}

impl Mode {
    /// Endpoint family queried in the primary fetch wave
    pub fn endpoint(self) -> Endpoint {
        match self {
            Mode::Pokemon => Endpoint::Pokemon,
            Mode::Ability => Endpoint::Ability,
            Mode::Move => Endpoint::Move,
        }
    }

    /// Lowercase name as accepted on the command line
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Pokemon => "pokemon",
            Mode::Ability => "ability",
            Mode::Move => "move",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pokemon" => Ok(Mode::Pokemon),
            "ability" => Ok(Mode::Ability),
            "move" => Ok(Mode::Move),
            other => Err(format!(
                "'{other}' is not a valid mode (expected pokemon, ability or move)"
            )),
        }
    }
}

/// A PokeAPI resource family
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `pokemon/{id}/`
    Pokemon,
    /// `ability/{id}/`
    Ability,
    /// `move/{id}/`
    Move,
    /// `stat/{id}/`
    Stat,
}

impl Endpoint {
    /// Path template relative to the API root; `{id}` is replaced by the identifier
    pub fn template(self) -> &'static str {
        match self {
            Endpoint::Pokemon => "pokemon/{id}/",
            Endpoint::Ability => "ability/{id}/",
            Endpoint::Move => "move/{id}/",
            Endpoint::Stat => "stat/{id}/",
        }
    }

    /// Relative path for one identifier, percent-encoding the identifier
    pub fn path_for(self, identifier: &str) -> String {
        self.template()
            .replace("{id}", &urlencoding::encode(identifier))
    }

    /// Singular resource name used in log fields and error messages
    pub fn resource(self) -> &'static str {
        match self {
            Endpoint::Pokemon => "pokemon",
            Endpoint::Ability => "ability",
            Endpoint::Move => "move",
            Endpoint::Stat => "stat",
        }
    }
}

/// Where the identifiers of a run come from
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequestInput {
    /// A single name or numeric id
    Data(String),
    /// A text file with one identifier per line
    File(PathBuf),
}

/// Where rendered results go
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Output {
    /// Standard output
    #[default]
    Print,
    /// A text file, created or truncated
    File(PathBuf),
}

/// A fully validated lookup request
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Request {
    /// Record kind to look up
    pub mode: Mode,
    /// Identifier source
    pub input: RequestInput,
    /// Result destination
    pub output: Output,
    /// Fetch nested stats, abilities and moves (Pokémon mode only)
    pub expanded: bool,
}

impl Request {
    /// Request for a single identifier printed to stdout, not expanded
    pub fn new(mode: Mode, input: RequestInput) -> Self {
        Self {
            mode,
            input,
            output: Output::default(),
            expanded: false,
        }
    }

    /// Whether the second (expansion) fetch wave runs; only Pokémon expand
    pub fn expansion_applies(mode: Mode, expanded: bool) -> bool {
        expanded && mode == Mode::Pokemon
    }
}
