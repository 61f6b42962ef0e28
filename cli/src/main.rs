#![deny(missing_docs)]

//! # Swagdoc CLI
//!
//! Command Line Interface turning Swagger 2.0 documents into browsable tables.
//!
//! Supported Commands:
//! - `tables`: Converts a document from a file, a URL, or stdin.
//! - `serve`: Exposes the conversion over HTTP (feature `server`).

use clap::{Parser, Subcommand};

use crate::error::CliResult;
use crate::fetch::default_fetcher;

mod error;
mod fetch;
mod logging;
#[cfg(feature = "server")]
mod server;
mod tables;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Swagger 2.0 API tables")]
struct Cli {
    /// Log at debug level (overridden by RUST_LOG).
    #[clap(long, short, global = true)]
    verbose: bool,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert one Swagger document into grouped API tables.
    Tables(tables::TablesArgs),
    /// Serve the conversion over HTTP.
    #[cfg(feature = "server")]
    Serve(server::ServeArgs),
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose)?;

    match &cli.command {
        Commands::Tables(args) => {
            let fetcher = default_fetcher();
            tables::execute(args, fetcher.as_ref())?;
        }
        #[cfg(feature = "server")]
        Commands::Serve(args) => {
            server::execute(args, default_fetcher().into())?;
        }
    }

    Ok(())
}
