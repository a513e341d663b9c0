//! CSV backing store: a `title,rating,year,poster` header and one row per movie.

use super::{ensure_exists, MovieStorage, CSV_HEADER};
use crate::models::{Collection, Movie};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Stores the collection as CSV rows.
#[derive(Debug, Clone)]
pub struct CsvStorage {
    path: PathBuf,
}

/// One CSV row, matched to the header by field name.
#[derive(Debug, Serialize, Deserialize)]
struct CsvRow {
    title: String,
    rating: f64,
    year: u16,
    poster: String,
}

impl CsvStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl MovieStorage for CsvStorage {
    fn path(&self) -> &Path {
        &self.path
    }

    fn list_movies(&self) -> Result<Collection> {
        ensure_exists(&self.path)?;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(&self.path)?;

        let mut movies = Collection::new();
        for (i, row) in reader.deserialize::<CsvRow>().enumerate() {
            // Line 1 is the header.
            let row = row.map_err(|e| {
                Error::InvalidRecord(format!("{} line {}: {}", self.path.display(), i + 2, e))
            })?;
            movies.insert(Movie {
                title: row.title,
                rating: row.rating,
                year: row.year,
                poster: row.poster,
            });
        }

        tracing::debug!("Loaded {} movies from {}", movies.len(), self.path.display());
        Ok(movies)
    }

    fn save_movies(&self, movies: &Collection) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)?;

        writer.write_record(CSV_HEADER)?;
        for movie in movies {
            writer.serialize(CsvRow {
                title: movie.title.clone(),
                rating: movie.rating,
                year: movie.year,
                poster: movie.poster.clone(),
            })?;
        }
        writer.flush()?;

        tracing::debug!("Saved {} movies to {}", movies.len(), self.path.display());
        Ok(())
    }
}
