//! Flat-file storage backends.
//!
//! Every backend reads the whole collection and writes the whole collection
//! back. Mutations are a full load, an in-memory change and a full save.

mod csv_store;
mod json_store;

pub use csv_store::CsvStorage;
pub use json_store::JsonStorage;

use crate::models::{Collection, Movie};
use crate::utils::fs::{ensure_parent_dir, get_extension};
use crate::{Error, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Header row of the CSV format.
pub const CSV_HEADER: [&str; 4] = ["title", "rating", "year", "poster"];

/// On-disk encoding of a backing store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageFormat {
    Json,
    Csv,
}

impl StorageFormat {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        match get_extension(path).as_deref() {
            Some("json") => Ok(StorageFormat::Json),
            Some("csv") => Ok(StorageFormat::Csv),
            _ => Err(Error::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Minimal valid contents of an empty store.
    pub fn empty_contents(&self) -> String {
        match self {
            StorageFormat::Json => "{}".to_string(),
            StorageFormat::Csv => format!("{}\n", CSV_HEADER.join(",")),
        }
    }
}

impl std::fmt::Display for StorageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageFormat::Json => write!(f, "json"),
            StorageFormat::Csv => write!(f, "csv"),
        }
    }
}

/// A backing store for the movie collection.
pub trait MovieStorage {
    /// Path of the backing file.
    fn path(&self) -> &Path;

    /// Read the whole collection.
    ///
    /// A missing file is `Error::StorageNotFound`.
    fn list_movies(&self) -> Result<Collection>;

    /// Overwrite the backing file with `movies`.
    fn save_movies(&self, movies: &Collection) -> Result<()>;

    /// Insert or replace the movie with this title.
    fn add_movie(&self, movie: Movie) -> Result<()> {
        let mut movies = self.list_movies()?;
        let title = movie.title.clone();
        let replaced = movies.insert(movie).is_some();
        self.save_movies(&movies)?;
        tracing::info!(title = %title, replaced, "Movie added");
        Ok(())
    }

    /// Remove a movie and return it. Nothing is written when it is absent.
    fn delete_movie(&self, title: &str) -> Result<Movie> {
        let mut movies = self.list_movies()?;
        let removed = movies
            .remove(title)
            .ok_or_else(|| Error::MovieNotFound(title.to_string()))?;
        self.save_movies(&movies)?;
        tracing::info!(title = %title, "Movie deleted");
        Ok(removed)
    }

    /// Replace the rating of a movie, keeping its other fields.
    fn update_movie(&self, title: &str, rating: f64) -> Result<()> {
        let mut movies = self.list_movies()?;
        let movie = movies
            .get_mut(title)
            .ok_or_else(|| Error::MovieNotFound(title.to_string()))?;
        movie.rating = rating;
        self.save_movies(&movies)?;
        tracing::info!(title = %title, rating, "Movie updated");
        Ok(())
    }
}

/// Open the storage backend matching the file extension.
pub fn open_storage(path: &Path) -> Result<Box<dyn MovieStorage>> {
    let storage: Box<dyn MovieStorage> = match StorageFormat::from_path(path)? {
        StorageFormat::Json => Box::new(JsonStorage::new(path)),
        StorageFormat::Csv => Box::new(CsvStorage::new(path)),
    };
    Ok(storage)
}

/// Create an empty store at `path` unless a file is already there.
///
/// Returns `true` when a new file was created.
pub fn create_if_missing(path: &Path) -> Result<bool> {
    let format = StorageFormat::from_path(path)?;
    ensure_parent_dir(path)?;

    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(mut file) => {
            file.write_all(format.empty_contents().as_bytes())?;
            tracing::info!("Created empty {} store: {}", format, path.display());
            Ok(true)
        }
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => Ok(false),
        Err(e) => Err(e.into()),
    }
}

/// Copy every movie from the store at `from` into the store at `to`.
///
/// The formats come from the file extensions, so this converts JSON to CSV
/// and back. `to` is created when missing and overwritten otherwise.
/// Returns the number of movies written.
pub fn convert(from: &Path, to: &Path) -> Result<usize> {
    let source = open_storage(from)?;
    let target = open_storage(to)?;
    let movies = source.list_movies()?;

    create_if_missing(to)?;
    target.save_movies(&movies)?;
    tracing::info!(
        "Converted {} movies from {} to {}",
        movies.len(),
        from.display(),
        to.display()
    );
    Ok(movies.len())
}

/// Fail with `StorageNotFound` if the backing file is gone.
fn ensure_exists(path: &Path) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(Error::StorageNotFound(path.display().to_string()))
    }
}
