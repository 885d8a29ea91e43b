//! Concurrent fetch-and-assemble pipeline
//!
//! A run has up to two waves of requests:
//!
//! 1. **Primary**: one request per identifier against the mode's endpoint.
//! 2. **Expansion** (Pokémon mode with `expanded` only): for every Pokémon,
//!    its abilities, moves and stats are fetched concurrently with each other
//!    and with the other Pokémon's sub-requests.
//!
//! Responses complete in any order, so every future carries the index of the
//! identifier it belongs to and its result is stored in that slot. The first
//! failure ends the run: the in-flight futures are dropped and nothing is
//! returned.

use futures::stream::{self, StreamExt, TryStreamExt};
use serde_json::Value;
use std::path::Path;
use tokio::sync::Semaphore;
use tracing::{debug, info};

use crate::config::Config;
use crate::entities::{PokedexEntry, PokedexObject, Pokemon, Stat};
use crate::error::{Error, Result};
use crate::fetcher::PokeApiClient;
use crate::parser::{self, StatRef};
use crate::types::{Endpoint, Mode, Request, RequestInput};

/// Runs lookups against PokeAPI
///
/// Owns the HTTP session for its lifetime; build one per run and drop it
/// when the run ends.
#[derive(Debug)]
pub struct Pokedex {
    client: PokeApiClient,
    /// Caps in-flight requests across all waves when configured
    limiter: Option<Semaphore>,
}

impl Pokedex {
    /// Create a pokedex and its HTTP session
    ///
    /// # Errors
    /// Returns [`Error::Config`] if the HTTP client cannot be built.
    pub fn new(config: Config) -> Result<Self> {
        let client = PokeApiClient::new(&config)?;
        let limiter = config
            .max_concurrent_requests
            .map(|cap| Semaphore::new(cap.max(1)));

        Ok(Self { client, limiter })
    }

    /// Resolve the request's identifiers and look them all up
    ///
    /// Entries come back in identifier order.
    pub async fn execute(&self, request: &Request) -> Result<Vec<PokedexEntry>> {
        let identifiers = resolve_identifiers(&request.input).await?;
        self.lookup(request.mode, &identifiers, request.expanded)
            .await
    }

    /// Look up `identifiers` in `mode`, expanding Pokémon when asked
    ///
    /// `expanded` is ignored outside Pokémon mode.
    ///
    /// # Errors
    /// [`Error::Argument`] for an empty identifier list; otherwise the first
    /// fetch or parse error of the run.
    pub async fn lookup(
        &self,
        mode: Mode,
        identifiers: &[String],
        expanded: bool,
    ) -> Result<Vec<PokedexEntry>> {
        if identifiers.is_empty() {
            return Err(Error::Argument(
                "Name or id must be provided!".to_string(),
            ));
        }
        if expanded && mode != Mode::Pokemon {
            debug!(mode = %mode, "--expanded only applies to pokemon mode, ignoring");
        }

        info!(mode = %mode, count = identifiers.len(), expanded, "fetching primary records");
        let payloads = self.fetch_all(mode.endpoint(), identifiers).await?;

        if Request::expansion_applies(mode, expanded) {
            info!(count = payloads.len(), "expanding pokemon");
            let pokemon = self.expand_all(&payloads).await?;
            return Ok(pokemon.into_iter().map(PokedexEntry::from).collect());
        }

        payloads
            .iter()
            .map(|json| parser::parse_entry(mode, json))
            .collect()
    }

    /// Fetch every identifier concurrently, returning payloads in input order
    pub async fn fetch_all(&self, endpoint: Endpoint, identifiers: &[String]) -> Result<Vec<Value>> {
        let mut slots: Vec<Option<Value>> = vec![None; identifiers.len()];

        let mut in_flight = stream::iter(identifiers.iter().enumerate())
            .map(|(index, identifier)| async move {
                let json = self.fetch_one(endpoint, identifier).await?;
                Ok::<_, Error>((index, json))
            })
            .buffer_unordered(identifiers.len().max(1));

        while let Some((index, json)) = in_flight.try_next().await? {
            slots[index] = Some(json);
        }

        // Draining without an error means every slot was written exactly once
        Ok(slots.into_iter().flatten().collect())
    }

    /// Fetch a list of identifiers and parse each payload, keeping order
    async fn fetch_parsed<T>(
        &self,
        endpoint: Endpoint,
        identifiers: &[String],
        parse: fn(&Value) -> Result<T>,
    ) -> Result<Vec<T>> {
        self.fetch_all(endpoint, identifiers)
            .await?
            .iter()
            .map(parse)
            .collect()
    }

    /// Look up each stat by name and merge in the Pokémon's base value
    async fn fetch_stats(&self, refs: &[StatRef]) -> Result<Vec<Stat>> {
        let names: Vec<String> = refs.iter().map(|r| r.name.clone()).collect();
        let payloads = self.fetch_all(Endpoint::Stat, &names).await?;

        payloads
            .iter()
            .zip(refs)
            .map(|(json, r)| parser::parse_stat(json, r.base_stat))
            .collect()
    }

    /// Second wave for one Pokémon payload
    pub async fn expand(&self, json: &Value) -> Result<Pokemon> {
        let shallow = parser::parse_pokemon_shallow(json)?;
        let refs = parser::expansion_refs(json)?;
        debug!(
            pokemon = shallow.name(),
            abilities = refs.abilities.len(),
            moves = refs.moves.len(),
            stats = refs.stats.len(),
            "expanding"
        );

        let (stats, abilities, moves) = tokio::try_join!(
            self.fetch_stats(&refs.stats),
            self.fetch_parsed(Endpoint::Ability, &refs.abilities, parser::parse_ability),
            self.fetch_parsed(Endpoint::Move, &refs.moves, parser::parse_move),
        )?;

        Ok(shallow.expanded(stats, abilities, moves))
    }

    /// Expand every payload concurrently, returning Pokémon in input order
    async fn expand_all(&self, payloads: &[Value]) -> Result<Vec<Pokemon>> {
        let mut slots: Vec<Option<Pokemon>> = vec![None; payloads.len()];

        let mut in_flight = stream::iter(payloads.iter().enumerate())
            .map(|(index, json)| async move {
                let pokemon = self.expand(json).await?;
                Ok::<_, Error>((index, pokemon))
            })
            .buffer_unordered(payloads.len().max(1));

        while let Some((index, pokemon)) = in_flight.try_next().await? {
            slots[index] = Some(pokemon);
        }

        Ok(slots.into_iter().flatten().collect())
    }

    async fn fetch_one(&self, endpoint: Endpoint, identifier: &str) -> Result<Value> {
        let _permit = match &self.limiter {
            Some(limiter) => Some(
                limiter
                    .acquire()
                    .await
                    .map_err(|_| Error::Config("request limiter closed".to_string()))?,
            ),
            None => None,
        };
        self.client.fetch(endpoint, identifier).await
    }
}

/// Turn a request's input into the identifier list
///
/// # Errors
/// - [`Error::InputFileNotFound`] if the file does not exist
/// - [`Error::Io`] if it cannot be read
/// - [`Error::Argument`] if it yields no identifiers
pub async fn resolve_identifiers(input: &RequestInput) -> Result<Vec<String>> {
    let identifiers = match input {
        RequestInput::Data(identifier) => vec![identifier.trim().to_string()],
        RequestInput::File(path) => read_identifier_file(path).await?,
    };

    if identifiers.iter().all(|id| id.is_empty()) {
        return Err(Error::Argument("Name or id must be provided!".to_string()));
    }

    Ok(identifiers)
}

async fn read_identifier_file(path: &Path) -> Result<Vec<String>> {
    let text = tokio::fs::read_to_string(path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::InputFileNotFound(path.to_path_buf())
        } else {
            Error::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read input file '{}': {}", path.display(), e),
            ))
        }
    })?;

    let identifiers = parse_identifiers(&text);
    debug!(path = %path.display(), count = identifiers.len(), "read identifier file");
    Ok(identifiers)
}

/// One identifier per line, whitespace-trimmed; blank lines are skipped
pub fn parse_identifiers(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
