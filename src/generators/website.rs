//! Static website generator.

use crate::models::config::WebsiteConfig;
use crate::models::{Collection, Movie};
use crate::utils::fs::ensure_parent_dir;
use crate::Result;
use std::fs;
use std::path::PathBuf;

/// Placeholder replaced by the movie cards.
pub const GRID_PLACEHOLDER: &str = "__TEMPLATE_MOVIE_GRID__";
/// Placeholder replaced by the page title.
pub const TITLE_PLACEHOLDER: &str = "__TEMPLATE_TITLE__";

/// Template compiled into the binary, used when none is configured.
pub const DEFAULT_TEMPLATE: &str = include_str!("../../static/index_template.html");

/// Render one grid item: poster, title and year.
pub fn render_movie_card(movie: &Movie) -> String {
    let mut card = String::new();
    card.push_str("\t\t\t<div class=\"col\">\n");
    card.push_str(&format!(
        "\t\t\t\t<div class=\"poster\"><img src=\"{}\"></div>\n",
        escape_html(&movie.poster)
    ));
    card.push_str(&format!(
        "\t\t\t\t<div class=\"title\">{}</div>\n",
        escape_html(&movie.title)
    ));
    card.push_str(&format!("\t\t\t\t<div class=\"year\">{}</div>\n", movie.year));
    card.push_str("\t\t\t</div>\n");
    card
}

/// Fill the template with the page title and one card per movie.
pub fn render_website(template: &str, page_title: &str, movies: &Collection) -> String {
    let grid: String = movies.iter().map(render_movie_card).collect();
    template
        .replace(GRID_PLACEHOLDER, &grid)
        .replace(TITLE_PLACEHOLDER, &escape_html(page_title))
}

/// Load the configured template, or the built-in one.
pub fn load_template(config: &WebsiteConfig) -> Result<String> {
    match &config.template {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => Ok(DEFAULT_TEMPLATE.to_string()),
    }
}

/// Render the collection and write the page. Returns the output path.
pub fn write_website(config: &WebsiteConfig, movies: &Collection) -> Result<PathBuf> {
    let template = load_template(config)?;
    let html = render_website(&template, &config.title, movies);

    ensure_parent_dir(&config.output)?;
    fs::write(&config.output, html)?;

    tracing::info!("Website with {} movies written to: {}", movies.len(), config.output.display());
    Ok(config.output.clone())
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_movie_card() {
        let card = render_movie_card(&Movie::new("Tom & Jerry", 6.0, 2021, "https://img/x.jpg"));
        assert!(card.contains("<img src=\"https://img/x.jpg\">"));
        assert!(card.contains("<div class=\"title\">Tom &amp; Jerry</div>"));
        assert!(card.contains("<div class=\"year\">2021</div>"));
    }

    #[test]
    fn test_render_website_replaces_placeholders() {
        let movies: Collection = vec![
            Movie::new("Heat", 8.3, 1995, "heat.jpg"),
            Movie::new("Alien", 8.5, 1979, "alien.jpg"),
        ]
        .into_iter()
        .collect();

        let html = render_website(DEFAULT_TEMPLATE, "My Movies", &movies);
        assert!(!html.contains(GRID_PLACEHOLDER));
        assert!(!html.contains(TITLE_PLACEHOLDER));
        assert!(html.contains("<title>My Movies</title>"));
        let heat = html.find("Heat").unwrap();
        let alien = html.find("Alien").unwrap();
        assert!(heat < alien);
    }

    #[test]
    fn test_write_website() {
        let temp = tempfile::TempDir::new().unwrap();
        let template_path = temp.path().join("template.html");
        fs::write(&template_path, "<ul>__TEMPLATE_MOVIE_GRID__</ul>").unwrap();

        let config = WebsiteConfig {
            template: Some(template_path),
            output: temp.path().join("site").join("index.html"),
            title: "Shelf".to_string(),
        };
        let movies: Collection = vec![Movie::new("Heat", 8.3, 1995, "heat.jpg")].into_iter().collect();

        let written = write_website(&config, &movies).unwrap();
        let html = fs::read_to_string(written).unwrap();
        assert!(html.starts_with("<ul>"));
        assert!(html.contains("Heat"));
    }

    #[test]
    fn test_missing_template_is_an_error() {
        let temp = tempfile::TempDir::new().unwrap();
        let config = WebsiteConfig {
            template: Some(temp.path().join("missing.html")),
            output: temp.path().join("index.html"),
            title: "Shelf".to_string(),
        };
        assert!(write_website(&config, &Collection::new()).is_err());
        assert!(!config.output.exists());
    }
}
