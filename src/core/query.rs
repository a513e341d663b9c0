//! Sorting and filtering over a loaded collection.
//!
//! Sorts are stable: movies with equal keys keep their collection order.

use crate::models::{Collection, Movie};

/// Direction for sorting by year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearOrder {
    OldestFirst,
    LatestFirst,
}

/// Movies by rating, highest first.
pub fn sort_by_rating(movies: &Collection) -> Vec<&Movie> {
    let mut sorted: Vec<&Movie> = movies.iter().collect();
    sorted.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    sorted
}

/// Movies by release year in the given direction.
pub fn sort_by_year(movies: &Collection, order: YearOrder) -> Vec<&Movie> {
    let mut sorted: Vec<&Movie> = movies.iter().collect();
    match order {
        YearOrder::OldestFirst => sorted.sort_by_key(|m| m.year),
        YearOrder::LatestFirst => sorted.sort_by(|a, b| b.year.cmp(&a.year)),
    }
    sorted
}

/// Range criteria for filtering. Unset bounds do not restrict.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FilterCriteria {
    pub min_rating: Option<f64>,
    pub start_year: Option<u16>,
    /// An end year of 0 means no upper bound.
    pub end_year: Option<u16>,
}

impl FilterCriteria {
    /// Whether a movie satisfies every bound.
    pub fn matches(&self, movie: &Movie) -> bool {
        let min_rating = self.min_rating.unwrap_or(0.0);
        let start_year = self.start_year.unwrap_or(0);
        let end_year = self.end_year.filter(|&y| y != 0).unwrap_or(u16::MAX);

        movie.rating >= min_rating && movie.year >= start_year && movie.year <= end_year
    }
}

/// Movies matching the criteria, in collection order.
pub fn filter_movies<'a>(movies: &'a Collection, criteria: &FilterCriteria) -> Vec<&'a Movie> {
    movies.iter().filter(|m| criteria.matches(m)).collect()
}
