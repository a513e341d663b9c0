//! OMDb API client.

use crate::models::config::OmdbConfig;
use crate::models::Movie;
use crate::{Error, Result};
use serde::Deserialize;

/// Looks up movie information by title.
#[allow(async_fn_in_trait)]
pub trait MovieLookup {
    /// Fetch a movie by title.
    async fn fetch(&self, title: &str) -> Result<Movie>;
}

/// OMDb API client.
pub struct OmdbClient {
    config: OmdbConfig,
    client: reqwest::Client,
}

/// Title response. Every field is optional so shape problems can be reported.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OmdbMovie {
    pub title: Option<String>,
    pub year: Option<String>,
    pub ratings: Option<Vec<OmdbRating>>,
    pub poster: Option<String>,
    pub response: Option<String>,
    pub error: Option<String>,
}

/// One rating source, e.g. `{"Source": "Internet Movie Database", "Value": "8.7/10"}`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OmdbRating {
    pub source: Option<String>,
    pub value: String,
}

impl OmdbMovie {
    /// Convert the response into a movie, using `query` in error messages.
    pub fn into_movie(self, query: &str) -> Result<Movie> {
        if self.response.as_deref() == Some("False") {
            tracing::debug!("OMDb has no match for '{}': {:?}", query, self.error);
            return Err(Error::LookupNotFound(query.to_string()));
        }

        let title = self
            .title
            .filter(|t| !t.is_empty())
            .ok_or_else(|| Error::LookupNotFound(query.to_string()))?;

        let year = self
            .year
            .as_deref()
            .and_then(parse_year)
            .ok_or_else(|| Error::LookupMalformed(format!("no usable year for '{}'", title)))?;

        let rating = self
            .ratings
            .as_ref()
            .and_then(|r| r.first())
            .and_then(|r| parse_rating(&r.value))
            .filter(|&r| Movie::is_valid_rating(r))
            .ok_or_else(|| Error::LookupMalformed(format!("no usable rating for '{}'", title)))?;

        let poster = self
            .poster
            .ok_or_else(|| Error::LookupMalformed(format!("no poster for '{}'", title)))?;

        Ok(Movie {
            title,
            rating,
            year,
            poster,
        })
    }
}

/// First four-digit run, e.g. `"2005–2013"` gives 2005.
fn parse_year(text: &str) -> Option<u16> {
    let re = regex::Regex::new(r"(\d{4})").ok()?;
    re.captures(text)?.get(1)?.as_str().parse().ok()
}

/// Numerator of a rating value, e.g. `"8.7/10"` gives 8.7.
fn parse_rating(text: &str) -> Option<f64> {
    let re = regex::Regex::new(r"^\s*(\d+(?:\.\d+)?)\s*/\s*10\s*$").ok()?;
    re.captures(text)?.get(1)?.as_str().parse().ok()
}

impl OmdbClient {
    /// Create a new OMDb client.
    pub fn new(config: OmdbConfig) -> Self {
        let client = reqwest::Client::new();
        Self { config, client }
    }

    /// Build the title lookup URL.
    fn build_url(&self, api_key: &str, title: &str) -> String {
        format!(
            "{}?apikey={}&t={}",
            self.config.base_url,
            urlencoding::encode(api_key),
            urlencoding::encode(title)
        )
    }
}

impl MovieLookup for OmdbClient {
    async fn fetch(&self, title: &str) -> Result<Movie> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(Error::OmdbApiKeyMissing)?;

        tracing::debug!("Looking up '{}' on OMDb", title);
        let resp = self.client.get(self.build_url(api_key, title)).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::LookupFailed(format!("{} {}", status, body)));
        }

        let data: OmdbMovie = resp.json().await?;
        data.into_movie(title)
    }
}
