//! Command line argument definitions.

use clap::Parser;
use std::path::PathBuf;

/// Movie Shelf - Keep your movie collection in a JSON or CSV file
#[derive(Parser, Debug)]
#[command(name = "movie-shelf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Storage file; the extension (.json or .csv) selects the format
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Directory relative storage files are resolved against
    #[arg(short, long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Output path for the generated website
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Write the collection to another store (e.g. movies.csv) and exit
    #[arg(long, value_name = "FILE")]
    pub convert_to: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
