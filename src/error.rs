//! Error types for the movie shelf.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the movie shelf.
#[derive(Error, Debug)]
pub enum Error {
    // Storage errors
    #[error("Storage file not found: {0}")]
    StorageNotFound(String),

    #[error("Unsupported storage format: '{0}'. Use a .json or .csv file")]
    UnsupportedFormat(String),

    #[error("Invalid movie record: {0}")]
    InvalidRecord(String),

    // Collection errors
    #[error("Movie '{0}' doesn't exist!")]
    MovieNotFound(String),

    // Input errors
    #[error("Input closed")]
    InputClosed,

    // Lookup errors
    #[error("OMDb API key not configured. Set OMDB_API_KEY environment variable")]
    OmdbApiKeyMissing,

    #[error("Movie lookup failed: {0}")]
    LookupFailed(String),

    #[error("The movie with the title '{0}' is not found.")]
    LookupNotFound(String),

    #[error("Unexpected lookup response: {0}")]
    LookupMalformed(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // JSON errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // CSV errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl Error {
    /// Whether this error came from the external movie lookup.
    pub fn is_lookup(&self) -> bool {
        matches!(
            self,
            Error::OmdbApiKeyMissing
                | Error::LookupFailed(_)
                | Error::LookupNotFound(_)
                | Error::LookupMalformed(_)
                | Error::Http(_)
        )
    }
}
