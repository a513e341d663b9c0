//! Title search with fuzzy matching.

use super::similarity::{partial_ratio, ratio, token_sort_ratio};
use crate::models::{Collection, Movie};

/// Minimum `ratio` for a fuzzy match.
pub const RATIO_THRESHOLD: f64 = 60.0;
/// Minimum `token_sort_ratio` for a fuzzy match.
pub const TOKEN_SORT_THRESHOLD: f64 = 60.0;
/// Minimum `partial_ratio` for a fuzzy match.
pub const PARTIAL_THRESHOLD: f64 = 90.0;

/// How a title matched a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// The query is a substring of the title.
    Exact,
    /// The title is similar enough to the query.
    Similar,
}

/// Search results container.
#[derive(Debug, Default)]
pub struct SearchResults<'a> {
    /// Titles containing the query, in collection order.
    pub exact: Vec<&'a Movie>,
    /// Titles similar to the query, in collection order.
    pub similar: Vec<&'a Movie>,
}

impl SearchResults<'_> {
    pub fn is_empty(&self) -> bool {
        self.exact.is_empty() && self.similar.is_empty()
    }
}

/// Classify a title against a query. Both are compared case-insensitively.
pub fn match_title(query: &str, title: &str) -> Option<MatchKind> {
    let query = query.to_lowercase();
    let title = title.to_lowercase();

    if title.contains(&query) {
        return Some(MatchKind::Exact);
    }

    if ratio(&query, &title) >= RATIO_THRESHOLD
        || token_sort_ratio(&query, &title) >= TOKEN_SORT_THRESHOLD
        || partial_ratio(&query, &title) >= PARTIAL_THRESHOLD
    {
        Some(MatchKind::Similar)
    } else {
        None
    }
}

/// Search the collection by title.
pub fn search<'a>(movies: &'a Collection, query: &str) -> SearchResults<'a> {
    let mut results = SearchResults::default();

    for movie in movies {
        match match_title(query, &movie.title) {
            Some(MatchKind::Exact) => results.exact.push(movie),
            Some(MatchKind::Similar) => results.similar.push(movie),
            None => {}
        }
    }

    tracing::debug!(
        query,
        exact = results.exact.len(),
        similar = results.similar.len(),
        "Search complete"
    );
    results
}
