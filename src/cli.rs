//! Command-line interface
//!
//! ```text
//! pokedex <pokemon|ability|move> (--inputfile <PATH.txt> | --inputdata <ID_OR_NAME>)
//!         [--output <PATH.txt|print>] [--expanded] [--base-url <URL>]
//!         [--max-concurrency <N>] [-v...]
//! ```
//!
//! clap handles syntax; [`Cli::into_parts`] applies the remaining checks and
//! turns the arguments into a [`Config`] and a [`Request`].

use clap::{ArgAction, ArgGroup, Parser};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use crate::config::{Config, DEFAULT_BASE_URL};
use crate::error::{Error, Result};
use crate::types::{Mode, Output, Request, RequestInput};

/// Output value that selects standard output
pub const PRINT_OUTPUT: &str = "print";

const TEXT_EXTENSION: &str = ".txt";

/// Look up Pokémon, abilities and moves on PokeAPI
#[derive(Debug, Parser)]
#[command(name = "pokedex", version, about)]
#[command(group(ArgGroup::new("input").required(true).args(["inputfile", "inputdata"])))]
pub struct Cli {
    /// Kind of record to look up
    #[arg(value_enum)]
    pub mode: Mode,

    /// Text file with one name or id per line
    #[arg(long = "inputfile", value_name = "PATH.txt")]
    pub inputfile: Option<PathBuf>,

    /// A single name or id
    #[arg(long = "inputdata", value_name = "ID_OR_NAME")]
    pub inputdata: Option<String>,

    /// "print" for the console, or a .txt file to write
    #[arg(long, value_name = "PATH.txt|print", default_value = PRINT_OUTPUT)]
    pub output: String,

    /// Also fetch stats, abilities and moves (pokemon mode only)
    #[arg(long)]
    pub expanded: bool,

    /// PokeAPI root URL
    #[arg(long, env = "POKEDEX_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Maximum number of requests in flight at once (default: unbounded)
    #[arg(long, value_name = "N")]
    pub max_concurrency: Option<NonZeroUsize>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Validate the arguments and split them into client config and request
    ///
    /// # Errors
    /// Returns [`Error::Argument`] with a user-facing message for an empty
    /// name/id, a missing or non-`.txt` file name, or an invalid base URL.
    pub fn into_parts(self) -> Result<(Config, Request)> {
        let input = match (self.inputdata, self.inputfile) {
            (Some(data), _) => {
                if data.trim().is_empty() {
                    return Err(Error::Argument("Name or id must be provided!".to_string()));
                }
                RequestInput::Data(data)
            }
            (None, Some(path)) => {
                if path.as_os_str().is_empty() {
                    return Err(Error::Argument(
                        "Input file name must be provided!".to_string(),
                    ));
                }
                if !has_text_extension(&path) {
                    return Err(Error::Argument(
                        "Input file name with \".txt\" extension must be provided!".to_string(),
                    ));
                }
                RequestInput::File(path)
            }
            (None, None) => {
                return Err(Error::Argument(
                    "Either --inputfile or --inputdata must be provided!".to_string(),
                ));
            }
        };

        let output = match self.output.as_str() {
            PRINT_OUTPUT => Output::Print,
            "" => {
                return Err(Error::Argument(
                    "Output file name must be provided!".to_string(),
                ));
            }
            path if !has_text_extension(Path::new(path)) => {
                return Err(Error::Argument(
                    "Output file name with \".txt\" extension must be provided!".to_string(),
                ));
            }
            path => Output::File(PathBuf::from(path)),
        };

        let config = Config {
            base_url: self.base_url,
            max_concurrent_requests: self.max_concurrency.map(NonZeroUsize::get),
            ..Default::default()
        };
        config
            .api_base()
            .map_err(|e| Error::Argument(e.to_string()))?;

        let request = Request {
            mode: self.mode,
            input,
            output,
            expanded: self.expanded,
        };

        Ok((config, request))
    }

    /// Log filter used when `RUST_LOG` is not set
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

fn has_text_extension(path: &Path) -> bool {
    path.to_string_lossy().ends_with(TEXT_EXTENSION)
}
