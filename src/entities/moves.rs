use std::fmt;

use super::{PokedexObject, or_none, write_header};

/// A move
///
/// `accuracy`, `pp` and `power` are `None` when the API reports `null`,
/// which it does for most status moves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Move {
    /// API name (e.g. "thunderbolt")
    pub(crate) name: String,
    /// API id
    pub(crate) id: i64,
    /// Generation that introduced the move
    pub(crate) generation: String,
    /// Hit chance in percent
    pub(crate) accuracy: Option<i64>,
    /// Power points
    pub(crate) pp: Option<i64>,
    /// Base power
    pub(crate) power: Option<i64>,
    /// Elemental type (e.g. "electric")
    pub(crate) move_type: String,
    /// "physical", "special" or "status"
    pub(crate) damage_class: String,
    /// Short English effect text
    pub(crate) short_effect: String,
}

impl Move {
    /// Generation that introduced the move
    pub fn generation(&self) -> &str {
        &self.generation
    }

    /// Hit chance in percent
    pub fn accuracy(&self) -> Option<i64> {
        self.accuracy
    }

    /// Power points
    pub fn pp(&self) -> Option<i64> {
        self.pp
    }

    /// Base power
    pub fn power(&self) -> Option<i64> {
        self.power
    }

    /// Elemental type
    pub fn move_type(&self) -> &str {
        &self.move_type
    }

    /// Damage class
    pub fn damage_class(&self) -> &str {
        &self.damage_class
    }

    /// Short English effect text
    pub fn short_effect(&self) -> &str {
        &self.short_effect
    }
}

impl PokedexObject for Move {
    fn name(&self) -> &str {
        &self.name
    }

    fn id(&self) -> i64 {
        self.id
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_header(f, "Move", &self.name, self.id)?;
        writeln!(f, "Generation: {}", self.generation)?;
        writeln!(f, "Accuracy: {}", or_none(self.accuracy))?;
        writeln!(f, "PP: {}", or_none(self.pp))?;
        writeln!(f, "Power: {}", or_none(self.power))?;
        writeln!(f, "Move type: {}", self.move_type)?;
        writeln!(f, "Damage class: {}", self.damage_class)?;
        writeln!(f, "Effect(Short): {}", self.short_effect)
    }
}
