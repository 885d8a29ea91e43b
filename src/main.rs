//! pokedex - look up Pokémon, abilities and moves on PokeAPI.
//!
//! Usage: pokedex <MODE> (--inputfile <PATH.txt> | --inputdata <ID_OR_NAME>) [OPTIONS]
//!
//! This is the single place the process terminates: every error from the
//! library is reported here as one `Error: ...` line on stderr.

use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use pokedex::cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_filter());

    let result = match cli.into_parts() {
        Ok((config, request)) => pokedex::run(config, &request).await.map(|_| ()),
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(error = ?e, "run failed");
            eprintln!("Error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
