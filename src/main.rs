//! Movie Shelf CLI
//!
//! An interactive terminal app for keeping a personal movie collection.

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use movie_shelf::cli::{app::MovieApp, args::Cli};
use movie_shelf::models::config;
use movie_shelf::services::omdb::OmdbClient;
use movie_shelf::storage;
use movie_shelf::utils::fs::resolve_in_dir;
use std::io;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    let mut config = config::load_config();
    if let Some(output) = cli.output {
        config.website.output = output;
    }
    let data_dir = cli.data_dir.unwrap_or(config.data_dir);
    let path = resolve_in_dir(&data_dir, &cli.file);

    if let Some(target) = cli.convert_to {
        let target = resolve_in_dir(&data_dir, &target);
        let count = storage::convert(&path, &target)
            .with_context(|| format!("Failed to convert {} to {}", path.display(), target.display()))?;
        println!("Wrote {} movies to {}", count, target.display());
        return Ok(());
    }

    // Pick the backend before touching the file system
    let storage = match storage::open_storage(&path) {
        Ok(storage) => storage,
        Err(e) => {
            eprintln!("{}", "The file type is not supported.".red());
            return Err(e.into());
        }
    };

    if storage::create_if_missing(&path)
        .with_context(|| format!("Failed to create storage file: {}", path.display()))?
    {
        println!("Created new movie file: {}", path.display());
    }

    let lookup = OmdbClient::new(config.omdb);
    let stdin = io::stdin();
    let mut app = MovieApp::new(storage, lookup, config.website, stdin.lock(), io::stdout());
    app.run().await?;

    Ok(())
}

/// Initialize the logging system.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("movie_shelf=debug")
    } else {
        EnvFilter::new("movie_shelf=warn")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time().with_writer(io::stderr))
        .with(filter)
        .init();
}
