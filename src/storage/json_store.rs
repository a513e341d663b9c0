//! JSON backing store: one object mapping title to `{rating, year, poster}`.

use super::{ensure_exists, MovieStorage};
use crate::models::Collection;
use crate::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Stores the collection as a single JSON object.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl MovieStorage for JsonStorage {
    fn path(&self) -> &Path {
        &self.path
    }

    fn list_movies(&self) -> Result<Collection> {
        ensure_exists(&self.path)?;
        let content = fs::read_to_string(&self.path)?;
        let movies: Collection = serde_json::from_str(&content).map_err(|e| {
            Error::InvalidRecord(format!("{}: {}", self.path.display(), e))
        })?;
        tracing::debug!("Loaded {} movies from {}", movies.len(), self.path.display());
        Ok(movies)
    }

    fn save_movies(&self, movies: &Collection) -> Result<()> {
        let content = serde_json::to_string_pretty(movies)?;
        fs::write(&self.path, content)?;
        tracing::debug!("Saved {} movies to {}", movies.len(), self.path.display());
        Ok(())
    }
}
