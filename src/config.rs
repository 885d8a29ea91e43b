//! Configuration types for pokedex

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// Public PokeAPI root
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2/";

/// HTTP client configuration for a run
///
/// The defaults reproduce the behavior of the reference client: the public
/// PokeAPI, no timeout, and no cap on in-flight requests.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// API root that endpoint templates are resolved against
    /// (default: "https://pokeapi.co/api/v2/")
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Maximum requests in flight across the whole run (None = unbounded)
    ///
    /// A value of 0 is treated as 1.
    #[serde(default)]
    pub max_concurrent_requests: Option<usize>,

    /// Per-request timeout (None = wait indefinitely)
    #[serde(default)]
    pub request_timeout: Option<Duration>,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            max_concurrent_requests: None,
            request_timeout: None,
            user_agent: default_user_agent(),
        }
    }
}

impl Config {
    /// Parse [`Config::base_url`], normalizing it to end with `/` so that
    /// relative endpoint paths are joined beneath it rather than replacing
    /// its last segment.
    pub fn api_base(&self) -> Result<Url> {
        let mut raw = self.base_url.trim().to_string();
        if !raw.ends_with('/') {
            raw.push('/');
        }

        let url = Url::parse(&raw)
            .map_err(|e| Error::Config(format!("invalid base URL '{}': {}", self.base_url, e)))?;

        if url.cannot_be_a_base() {
            return Err(Error::Config(format!(
                "base URL '{}' cannot have endpoint paths appended",
                self.base_url
            )));
        }

        Ok(url)
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    format!("pokedex/{}", env!("CARGO_PKG_VERSION"))
}
