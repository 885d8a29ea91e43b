use std::fmt;

use super::{Ability, Move, PokedexObject, Stat, join_display, write_header};

/// A Pokémon, optionally carrying its expanded stats, abilities and moves
#[derive(Clone, Debug, PartialEq)]
pub struct Pokemon {
    name: String,
    id: i64,
    height: i64,
    weight: i64,
    types: Vec<String>,
    stats: Vec<Stat>,
    abilities: Vec<Ability>,
    moves: Vec<Move>,
    is_expanded: bool,
}

impl Pokemon {
    /// A shallow record: no nested stats, abilities or moves
    pub fn new(
        name: impl Into<String>,
        id: i64,
        height: i64,
        weight: i64,
        types: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            id,
            height,
            weight,
            types,
            stats: Vec::new(),
            abilities: Vec::new(),
            moves: Vec::new(),
            is_expanded: false,
        }
    }

    /// Consume a shallow record and attach its fetched detail
    pub fn expanded(self, stats: Vec<Stat>, abilities: Vec<Ability>, moves: Vec<Move>) -> Self {
        Self {
            stats,
            abilities,
            moves,
            is_expanded: true,
            ..self
        }
    }

    /// Height in decimetres
    pub fn height(&self) -> i64 {
        self.height
    }

    /// Weight in hectograms
    pub fn weight(&self) -> i64 {
        self.weight
    }

    /// Type names in slot order
    pub fn types(&self) -> &[String] {
        &self.types
    }

    /// Base stats (empty unless expanded)
    pub fn stats(&self) -> &[Stat] {
        &self.stats
    }

    /// Abilities (empty unless expanded)
    pub fn abilities(&self) -> &[Ability] {
        &self.abilities
    }

    /// Learnable moves (empty unless expanded)
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Whether nested detail was fetched
    pub fn is_expanded(&self) -> bool {
        self.is_expanded
    }
}

impl PokedexObject for Pokemon {
    fn name(&self) -> &str {
        &self.name
    }

    fn id(&self) -> i64 {
        self.id
    }
}

impl fmt::Display for Pokemon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_header(f, "Pokemon", &self.name, self.id)?;
        writeln!(f, "Height: {}", self.height)?;
        writeln!(f, "Weight: {}", self.weight)?;

        if !self.is_expanded {
            return writeln!(f, "Types: {}", self.types.join(", "));
        }

        write!(f, "\n*****Stats***** \n\n{}\n", join_display(&self.stats, "\n"))?;
        writeln!(f, "Types: {}", self.types.join(", "))?;
        write!(
            f,
            "\n*****Abilities***** \n\n{}\n",
            join_display(&self.abilities, "\n")
        )?;
        write!(f, "\n*****Moves***** \n\n{}", join_display(&self.moves, "\n"))
    }
}
