//! HTTP access to PokeAPI
//!
//! [`PokeApiClient`] owns the single `reqwest` session (and its connection
//! pool) used for every request of a run. It is created when the run starts
//! and released when it is dropped.

use reqwest::StatusCode;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::types::Endpoint;

/// Single-attempt JSON GET client for the PokeAPI endpoint templates
#[derive(Clone, Debug)]
pub struct PokeApiClient {
    http: reqwest::Client,
    base: Url,
}

impl PokeApiClient {
    /// Build the HTTP session described by `config`
    ///
    /// # Errors
    /// Returns [`Error::Config`] if the base URL is invalid or the HTTP
    /// client cannot be created.
    pub fn new(config: &Config) -> Result<Self> {
        let base = config.api_base()?;

        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { http, base })
    }

    /// Absolute URL of `identifier` under `endpoint`
    pub fn url_for(&self, endpoint: Endpoint, identifier: &str) -> Result<Url> {
        self.base.join(&endpoint.path_for(identifier)).map_err(|e| {
            Error::Argument(format!(
                "cannot build {} URL for '{}': {}",
                endpoint.resource(),
                identifier,
                e
            ))
        })
    }

    /// GET one record and return its JSON body
    ///
    /// # Errors
    /// - [`Error::NotFound`] for any status other than 200
    /// - [`Error::Connection`] if the host cannot be reached
    /// - [`Error::MalformedResponse`] if the body is not JSON
    /// - [`Error::Network`] for other transport failures, including timeouts
    pub async fn fetch(&self, endpoint: Endpoint, identifier: &str) -> Result<Value> {
        let url = self.url_for(endpoint, identifier)?;
        debug!(resource = endpoint.resource(), identifier, url = %url, "fetching");

        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| transport_error(&url, e))?;

        let status = response.status();
        if status != StatusCode::OK {
            debug!(url = %url, status = status.as_u16(), "unexpected status");
            return Err(Error::NotFound {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.json::<Value>().await.map_err(|e| {
            if e.is_decode() {
                Error::malformed(
                    format!("{} '{}'", endpoint.resource(), identifier),
                    format!("body is not valid JSON: {}", e),
                )
            } else {
                transport_error(&url, e)
            }
        })
    }
}

fn transport_error(url: &Url, e: reqwest::Error) -> Error {
    if e.is_connect() {
        Error::Connection {
            url: url.to_string(),
            reason: e.to_string(),
        }
    } else {
        Error::Network(e)
    }
}
