//! Movie record and the title-keyed collection.

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// A single movie in the collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    /// Title, the identity key within a collection.
    pub title: String,
    /// Rating (0-10].
    pub rating: f64,
    /// Release year.
    pub year: u16,
    /// Poster image URL.
    pub poster: String,
}

impl Movie {
    pub fn new(title: impl Into<String>, rating: f64, year: u16, poster: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            rating,
            year,
            poster: poster.into(),
        }
    }

    /// Whether `rating` is a finite value in (0, 10].
    pub fn is_valid_rating(rating: f64) -> bool {
        rating > 0.0 && rating <= 10.0
    }
}

/// The per-title fields as they are stored under the title key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieRecord {
    pub rating: f64,
    #[serde(deserialize_with = "deserialize_year")]
    pub year: u16,
    #[serde(default)]
    pub poster: String,
}

/// Accept the year either as a number or as a string of digits.
fn deserialize_year<'de, D>(deserializer: D) -> std::result::Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum YearRepr {
        Number(u16),
        Text(String),
    }

    match YearRepr::deserialize(deserializer)? {
        YearRepr::Number(year) => Ok(year),
        YearRepr::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("invalid year '{}'", text))),
    }
}

/// Movies keyed by title, in insertion (file) order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collection {
    movies: Vec<Movie>,
    /// Title to position in `movies`.
    index: HashMap<String, usize>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Movies in collection order.
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Movie> {
        self.movies.iter()
    }

    pub fn get(&self, title: &str) -> Option<&Movie> {
        self.index.get(title).map(|&pos| &self.movies[pos])
    }

    /// Mutable access to a movie. The title must not be changed through it.
    pub fn get_mut(&mut self, title: &str) -> Option<&mut Movie> {
        let pos = *self.index.get(title)?;
        self.movies.get_mut(pos)
    }

    pub fn contains(&self, title: &str) -> bool {
        self.get(title).is_some()
    }

    /// Insert a movie, replacing an existing entry with the same title in place.
    ///
    /// Returns the replaced movie, if any.
    pub fn insert(&mut self, movie: Movie) -> Option<Movie> {
        match self.index.get(&movie.title) {
            Some(&pos) => Some(std::mem::replace(&mut self.movies[pos], movie)),
            None => {
                self.index.insert(movie.title.clone(), self.movies.len());
                self.movies.push(movie);
                None
            }
        }
    }

    pub fn remove(&mut self, title: &str) -> Option<Movie> {
        let pos = self.index.remove(title)?;
        let removed = self.movies.remove(pos);
        for (offset, movie) in self.movies[pos..].iter().enumerate() {
            self.index.insert(movie.title.clone(), pos + offset);
        }
        Some(removed)
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.movies.iter().map(|m| m.title.as_str())
    }
}

impl FromIterator<Movie> for Collection {
    fn from_iter<I: IntoIterator<Item = Movie>>(iter: I) -> Self {
        let mut collection = Collection::new();
        for movie in iter {
            collection.insert(movie);
        }
        collection
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Movie;
    type IntoIter = std::slice::Iter<'a, Movie>;

    fn into_iter(self) -> Self::IntoIter {
        self.movies.iter()
    }
}

impl IntoIterator for Collection {
    type Item = Movie;
    type IntoIter = std::vec::IntoIter<Movie>;

    fn into_iter(self) -> Self::IntoIter {
        self.movies.into_iter()
    }
}

// Serialized as `{ "<title>": { "rating": .., "year": .., "poster": .. }, .. }`.
impl Serialize for Collection {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.movies.len()))?;
        for movie in &self.movies {
            let record = MovieRecord {
                rating: movie.rating,
                year: movie.year,
                poster: movie.poster.clone(),
            };
            map.serialize_entry(&movie.title, &record)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Collection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct CollectionVisitor;

        impl<'de> Visitor<'de> for CollectionVisitor {
            type Value = Collection;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping movie titles to records")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<Collection, A::Error> {
                let mut collection = Collection::new();
                while let Some((title, record)) = access.next_entry::<String, MovieRecord>()? {
                    collection.insert(Movie {
                        title,
                        rating: record.rating,
                        year: record.year,
                        poster: record.poster,
                    });
                }
                Ok(collection)
            }
        }

        deserializer.deserialize_map(CollectionVisitor)
    }
}
