//! Rating statistics and random picks.

use crate::models::{Collection, Movie};
use rand::seq::SliceRandom;
use rand::Rng;

/// Movies sharing an extreme rating.
#[derive(Debug, Clone, PartialEq)]
pub struct Extreme {
    pub rating: f64,
    /// Titles at this rating, in collection order.
    pub titles: Vec<String>,
}

/// Summary statistics of a non-empty collection.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingStats {
    pub count: usize,
    pub average: f64,
    pub median: f64,
    pub best: Extreme,
    pub worst: Extreme,
}

/// Arithmetic mean of all ratings.
pub fn average_rating(movies: &Collection) -> Option<f64> {
    if movies.is_empty() {
        return None;
    }
    let sum: f64 = movies.iter().map(|m| m.rating).sum();
    Some(sum / movies.len() as f64)
}

/// Median rating; the mean of the two middle values for an even count.
pub fn median_rating(movies: &Collection) -> Option<f64> {
    let mut ratings: Vec<f64> = movies.iter().map(|m| m.rating).collect();
    if ratings.is_empty() {
        return None;
    }
    ratings.sort_by(f64::total_cmp);

    let mid = ratings.len() / 2;
    if ratings.len() % 2 == 0 {
        Some((ratings[mid - 1] + ratings[mid]) / 2.0)
    } else {
        Some(ratings[mid])
    }
}

/// Best and worst rated movies, with all ties.
pub fn best_and_worst(movies: &Collection) -> Option<(Extreme, Extreme)> {
    let first = movies.iter().next()?;
    let (mut max, mut min) = (first.rating, first.rating);
    for movie in movies.iter().skip(1) {
        max = max.max(movie.rating);
        min = min.min(movie.rating);
    }

    let titles_at = |rating: f64| -> Vec<String> {
        movies
            .iter()
            .filter(|m| m.rating == rating)
            .map(|m| m.title.clone())
            .collect()
    };

    Some((
        Extreme { rating: max, titles: titles_at(max) },
        Extreme { rating: min, titles: titles_at(min) },
    ))
}

/// All statistics at once. `None` for an empty collection.
pub fn summarize(movies: &Collection) -> Option<RatingStats> {
    let (best, worst) = best_and_worst(movies)?;
    Some(RatingStats {
        count: movies.len(),
        average: average_rating(movies)?,
        median: median_rating(movies)?,
        best,
        worst,
    })
}

/// Pick one movie uniformly at random.
pub fn random_movie<'a, R: Rng + ?Sized>(movies: &'a Collection, rng: &mut R) -> Option<&'a Movie> {
    movies.movies().choose(rng)
}
