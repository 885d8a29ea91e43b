use std::fmt;

use super::{PokedexObject, title_bool, write_header};

/// One of a Pokémon's base stats
///
/// `name`, `id` and `is_battle_only` come from the `stat/{name}/` lookup;
/// `base_stat` comes from the owning Pokémon's payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stat {
    /// API name (e.g. "hp")
    pub(crate) name: String,
    /// API id
    pub(crate) id: i64,
    /// The owning Pokémon's base value for this stat
    pub(crate) base_stat: i64,
    /// Whether the stat only exists during battle (accuracy, evasion)
    pub(crate) is_battle_only: bool,
}

impl Stat {
    /// The owning Pokémon's base value
    pub fn base_stat(&self) -> i64 {
        self.base_stat
    }

    /// Whether the stat only exists during battle
    pub fn is_battle_only(&self) -> bool {
        self.is_battle_only
    }
}

impl PokedexObject for Stat {
    fn name(&self) -> &str {
        &self.name
    }

    fn id(&self) -> i64 {
        self.id
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_header(f, "Stat", &self.name, self.id)?;
        writeln!(f, "Base stat: {}", self.base_stat)?;
        writeln!(f, "Battle only: {}", title_bool(self.is_battle_only))
    }
}
