//! Error types for pokedex
//!
//! Every failure in a run is fatal. Errors propagate with `?` up to the run
//! boundary in `main`, which formats a one-line message and picks the exit
//! code via [`Error::exit_code`].

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pokedex operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for pokedex
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid or missing command-line input
    #[error("{0}")]
    Argument(String),

    /// The identifier file does not exist
    #[error("input file does not exist: {}", .0.display())]
    InputFileNotFound(PathBuf),

    /// The API answered with a status other than 200
    #[error("request URL not found (HTTP {status}): {url}")]
    NotFound {
        /// The requested URL
        url: String,
        /// The HTTP status code that was returned
        status: u16,
    },

    /// The transport could not reach the host
    #[error("cannot connect to host for {url}: {reason}")]
    Connection {
        /// The requested URL
        url: String,
        /// Underlying transport message
        reason: String,
    },

    /// A payload lacked a required field or an English effect entry
    #[error("malformed {resource} response: {reason}")]
    MalformedResponse {
        /// Which resource was being parsed (e.g. "ability 'stench'")
        resource: String,
        /// What was wrong with it
        reason: String,
    },

    /// Any other transport error (timeouts, protocol errors)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The HTTP client or its configuration could not be set up
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Build a [`Error::MalformedResponse`]
    pub fn malformed(resource: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::MalformedResponse {
            resource: resource.into(),
            reason: reason.into(),
        }
    }

    /// Process exit code for this error
    ///
    /// Argument errors exit with 2 (the same code clap uses for usage
    /// errors); everything else exits with 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Argument(_) => 2,
            Error::InputFileNotFound(_)
            | Error::NotFound { .. }
            | Error::Connection { .. }
            | Error::MalformedResponse { .. }
            | Error::Network(_)
            | Error::Io(_)
            | Error::Config(_) => 1,
        }
    }
}
