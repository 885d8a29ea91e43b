use std::fmt;

use super::{PokedexObject, write_header};

/// An ability and the Pokémon that can have it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ability {
    /// API name (e.g. "static")
    pub(crate) name: String,
    /// API id
    pub(crate) id: i64,
    /// Generation that introduced the ability (e.g. "generation-iii")
    pub(crate) generation: String,
    /// Full English effect text
    pub(crate) effect: String,
    /// Short English effect text
    pub(crate) short_effect: String,
    /// Names of Pokémon with this ability, in API order
    pub(crate) pokemon_names: Vec<String>,
}

impl Ability {
    /// Generation that introduced the ability
    pub fn generation(&self) -> &str {
        &self.generation
    }

    /// Full English effect text
    pub fn effect(&self) -> &str {
        &self.effect
    }

    /// Short English effect text
    pub fn short_effect(&self) -> &str {
        &self.short_effect
    }

    /// Names of Pokémon with this ability
    pub fn pokemon_names(&self) -> &[String] {
        &self.pokemon_names
    }
}

impl PokedexObject for Ability {
    fn name(&self) -> &str {
        &self.name
    }

    fn id(&self) -> i64 {
        self.id
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_header(f, "Ability", &self.name, self.id)?;
        writeln!(f, "Generation: {}", self.generation)?;
        writeln!(f, "Effect: {}", self.effect)?;
        writeln!(f, "Effect(Short): {}", self.short_effect)?;
        writeln!(f, "Pokemon list: {}", self.pokemon_names.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_every_field_in_order() {
        let ability = Ability {
            name: "static".to_string(),
            id: 9,
            generation: "generation-iii".to_string(),
            effect: "Whenever a move makes contact with this Pokémon, the move's user has a 30% chance of being paralyzed.".to_string(),
            short_effect: "Has a 30% chance of paralyzing attacking Pokémon on contact.".to_string(),
            pokemon_names: vec!["pikachu".to_string(), "raichu".to_string()],
        };

        let expected = "Ability Name: static\n\
                        ID: 9\n\
                        Generation: generation-iii\n\
                        Effect: Whenever a move makes contact with this Pokémon, the move's user has a 30% chance of being paralyzed.\n\
                        Effect(Short): Has a 30% chance of paralyzing attacking Pokémon on contact.\n\
                        Pokemon list: pikachu, raichu\n";

        assert_eq!(ability.render(), expected);
    }

    #[test]
    fn empty_pokemon_list_renders_blank() {
        let ability = Ability {
            name: "mystery".to_string(),
            id: 10001,
            generation: "generation-v".to_string(),
            effect: String::new(),
            short_effect: String::new(),
            pokemon_names: vec![],
        };

        assert!(ability.render().ends_with("Pokemon list: \n"));
    }
}
