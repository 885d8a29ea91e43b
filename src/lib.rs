//! # pokedex
//!
//! Concurrent PokeAPI client for Pokémon, abilities and moves.
//!
//! Given one or more names or ids, pokedex fetches the matching records
//! concurrently, parses them into typed entities and, for expanded Pokémon
//! lookups, runs a second wave of requests for each Pokémon's stats,
//! abilities and moves. Results always come back in the order they were
//! asked for, and the first failure aborts the whole run.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pokedex::{Config, Mode, Pokedex, PokedexObject};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> pokedex::Result<()> {
//!     let pokedex = Pokedex::new(Config::default())?;
//!     let entries = pokedex
//!         .lookup(Mode::Pokemon, &["pikachu".to_string()], true)
//!         .await?;
//!
//!     for entry in &entries {
//!         println!("{}", entry.render());
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Command-line interface
pub mod cli;
/// Configuration types
pub mod config;
/// Domain entities and rendering
pub mod entities;
/// Error types
pub mod error;
/// HTTP client for PokeAPI
pub mod fetcher;
/// JSON payload parsing
pub mod parser;
/// Fetch-and-assemble orchestration
pub mod pokedex;
/// Result output
pub mod sink;
/// Core types
pub mod types;

#[cfg(test)]
mod test_helpers;

// Re-export commonly used types
pub use config::Config;
pub use entities::{Ability, Move, PokedexEntry, PokedexObject, Pokemon, Stat};
pub use error::{Error, Result};
pub use fetcher::PokeApiClient;
pub use pokedex::Pokedex;
pub use types::{Endpoint, Mode, Output, Request, RequestInput};

/// Execute one request end to end: fetch, assemble, then emit
///
/// The HTTP session lives exactly as long as this call. Nothing is written
/// to the output unless every lookup succeeded.
///
/// # Errors
/// The first error of the run; see [`Error`].
pub async fn run(config: Config, request: &Request) -> Result<Vec<PokedexEntry>> {
    let pokedex = Pokedex::new(config)?;
    let entries = pokedex.execute(request).await?;
    drop(pokedex);

    sink::emit(&entries, &request.output).await?;
    Ok(entries)
}
