//! Integration tests for the interactive menu loop.
//!
//! Each test scripts stdin, runs the loop against a temporary store and a
//! stub lookup, then inspects the output and the backing file.

use movie_shelf::cli::app::{AppState, MovieApp};
use movie_shelf::models::config::WebsiteConfig;
use movie_shelf::models::Movie;
use movie_shelf::services::omdb::MovieLookup;
use movie_shelf::storage::{create_if_missing, open_storage, MovieStorage};
use movie_shelf::{Error, Result};
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ========== TEST FIXTURES ==========

/// Lookup that knows a fixed set of movies.
struct StubLookup {
    known: Vec<Movie>,
}

impl MovieLookup for StubLookup {
    async fn fetch(&self, title: &str) -> Result<Movie> {
        self.known
            .iter()
            .find(|m| m.title.eq_ignore_ascii_case(title))
            .cloned()
            .ok_or_else(|| Error::LookupNotFound(title.to_string()))
    }
}

fn stub_lookup() -> StubLookup {
    StubLookup {
        known: vec![Movie::new("The Matrix", 8.7, 1999, "https://img/matrix.jpg")],
    }
}

fn seeded_store(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    create_if_missing(&path).unwrap();
    let storage = open_storage(&path).unwrap();
    for movie in [
        Movie::new("Heat", 8.3, 1995, "heat.jpg"),
        Movie::new("Alien", 8.5, 1979, "alien.jpg"),
        Movie::new("Up", 6.0, 2009, "up.jpg"),
    ] {
        storage.add_movie(movie).unwrap();
    }
    path
}

fn website_config(dir: &Path) -> WebsiteConfig {
    WebsiteConfig {
        template: None,
        output: dir.join("site").join("index.html"),
        title: "Test Shelf".to_string(),
    }
}

/// Run the loop over `script` and return the output and final state.
async fn run_script(dir: &Path, store: &Path, script: &str) -> (String, AppState) {
    colored::control::set_override(false);
    let storage = open_storage(store).unwrap();
    let mut app = MovieApp::new(
        storage,
        stub_lookup(),
        website_config(dir),
        Cursor::new(script.as_bytes().to_vec()),
        Vec::new(),
    );
    app.run().await.unwrap();
    let state = app.state();
    (String::from_utf8(app.into_output()).unwrap(), state)
}

fn reload(store: &Path) -> movie_shelf::models::Collection {
    open_storage(store).unwrap().list_movies().unwrap()
}

// ========== LOOP TESTS ==========

#[tokio::test]
async fn test_exit_immediately() {
    let temp_dir = TempDir::new().unwrap();
    let store = seeded_store(temp_dir.path(), "movies.json");

    let (output, state) = run_script(temp_dir.path(), &store, "0\n").await;

    assert_eq!(state, AppState::Exited);
    assert!(output.contains("My Movies Database"));
    assert!(output.contains("11. Generate website"));
    assert!(output.contains("Bye Bye!"));
}

#[tokio::test]
async fn test_invalid_option_loops_back() {
    let temp_dir = TempDir::new().unwrap();
    let store = seeded_store(temp_dir.path(), "movies.json");

    let (output, state) = run_script(temp_dir.path(), &store, "42\n\n0\n").await;

    assert_eq!(state, AppState::Exited);
    assert!(output.contains("'42' is not a valid option."));
    assert_eq!(output.matches("*** My Movies Database ***").count(), 2);
}

#[tokio::test]
async fn test_end_of_input_exits() {
    let temp_dir = TempDir::new().unwrap();
    let store = seeded_store(temp_dir.path(), "movies.csv");

    let (_, state) = run_script(temp_dir.path(), &store, "1\n").await;
    assert_eq!(state, AppState::Exited);
}

// ========== COMMAND TESTS ==========

#[tokio::test]
async fn test_list_movies() {
    let temp_dir = TempDir::new().unwrap();
    let store = seeded_store(temp_dir.path(), "movies.csv");

    let (output, _) = run_script(temp_dir.path(), &store, "1\n\n0\n").await;

    assert!(output.contains("3 MOVIES IN TOTAL"));
    let heat = output.find("Heat (1995):  8.3").unwrap();
    let up = output.find("Up (2009):  6.0").unwrap();
    assert!(heat < up);
}

#[tokio::test]
async fn test_list_empty_collection() {
    let temp_dir = TempDir::new().unwrap();
    let store = temp_dir.path().join("empty.json");
    create_if_missing(&store).unwrap();

    let (output, _) = run_script(temp_dir.path(), &store, "1\n\n0\n").await;
    assert!(output.contains("Not enough movies."));
}

#[tokio::test]
async fn test_add_movie_via_lookup() {
    let temp_dir = TempDir::new().unwrap();
    let store = seeded_store(temp_dir.path(), "movies.json");

    let (output, _) = run_script(temp_dir.path(), &store, "2\n\nthe matrix\n\n0\n").await;

    assert!(output.contains("Field is empty"));
    assert!(output.contains("Movie 'The Matrix' successfully added"));
    let movies = reload(&store);
    assert_eq!(
        movies.get("The Matrix"),
        Some(&Movie::new("The Matrix", 8.7, 1999, "https://img/matrix.jpg"))
    );
}

#[tokio::test]
async fn test_add_unknown_movie_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let store = seeded_store(temp_dir.path(), "movies.json");

    let (output, state) = run_script(temp_dir.path(), &store, "2\nNo Such Film\n\n0\n").await;

    assert_eq!(state, AppState::Exited);
    assert!(output.contains("The movie with the title 'No Such Film' is not found."));
    assert_eq!(reload(&store).len(), 3);
}

#[tokio::test]
async fn test_delete_movie() {
    let temp_dir = TempDir::new().unwrap();
    let store = seeded_store(temp_dir.path(), "movies.csv");

    let (output, _) = run_script(temp_dir.path(), &store, "3\nHeat\n\n3\nJaws\n\n0\n").await;

    assert!(output.contains("Movie 'Heat' successfully deleted"));
    assert!(output.contains("Movie 'Jaws' doesn't exist!"));
    let movies = reload(&store);
    assert!(!movies.contains("Heat"));
    assert_eq!(movies.len(), 2);
}

#[tokio::test]
async fn test_update_movie() {
    let temp_dir = TempDir::new().unwrap();
    let store = seeded_store(temp_dir.path(), "movies.json");

    let (output, _) = run_script(temp_dir.path(), &store, "4\nUp\n0\n11\n9.1\n\n0\n").await;

    assert_eq!(output.matches("Expected a number").count(), 2);
    assert!(output.contains("Movie 'Up' successfully updated"));
    assert_eq!(
        reload(&store).get("Up"),
        Some(&Movie::new("Up", 9.1, 2009, "up.jpg"))
    );
}

#[tokio::test]
async fn test_update_missing_movie_does_not_prompt_rating() {
    let temp_dir = TempDir::new().unwrap();
    let store = seeded_store(temp_dir.path(), "movies.json");

    let (output, _) = run_script(temp_dir.path(), &store, "4\nJaws\n\n0\n").await;

    assert!(output.contains("Movie 'Jaws' doesn't exist!"));
    assert!(!output.contains("Enter new movie rating"));
}

#[tokio::test]
async fn test_stats() {
    let temp_dir = TempDir::new().unwrap();
    let store = seeded_store(temp_dir.path(), "movies.json");

    let (output, _) = run_script(temp_dir.path(), &store, "5\n\n0\n").await;

    assert!(output.contains(" 7.60 "));
    assert!(output.contains(" 8.30 "));
    assert!(output.contains("Best movie:  Alien"));
    assert!(output.contains("Worst movie:  Up"));
}

#[tokio::test]
async fn test_random_movie() {
    let temp_dir = TempDir::new().unwrap();
    let store = seeded_store(temp_dir.path(), "movies.json");

    let (output, _) = run_script(temp_dir.path(), &store, "6\n\n0\n").await;

    assert!(output.contains("YOUR MOVIE FOR TONIGHT"));
    assert!(["Heat (1995)", "Alien (1979)", "Up (2009)"]
        .iter()
        .any(|m| output.contains(m)));
}

#[tokio::test]
async fn test_search_movie() {
    let temp_dir = TempDir::new().unwrap();
    let store = seeded_store(temp_dir.path(), "movies.json");

    let (output, _) = run_script(temp_dir.path(), &store, "7\nalein\n\n0\n").await;

    assert!(output.contains("The movie 'alein' was not found."));
    let other = output.find("OTHER FOUND MOVIE(S)").unwrap();
    let alien = output.rfind("Alien (1979)").unwrap();
    assert!(alien > other);
}

#[tokio::test]
async fn test_sort_by_rating_and_year() {
    let temp_dir = TempDir::new().unwrap();
    let store = seeded_store(temp_dir.path(), "movies.csv");

    let (output, _) = run_script(temp_dir.path(), &store, "8\n\n9\nx\ny\n\n0\n").await;

    let by_rating = output.find("MOVIES SORTED BY RATING").unwrap();
    let by_year = output.find("MOVIES SORTED BY YEAR").unwrap();
    let rating_section = &output[by_rating..by_year];
    let year_section = &output[by_year..];

    assert!(rating_section.find("Alien").unwrap() < rating_section.find("Heat").unwrap());
    assert!(rating_section.find("Heat").unwrap() < rating_section.find("Up").unwrap());
    assert!(output.contains("Please enter \"Y\" or \"N\""));
    assert!(year_section.find("Up").unwrap() < year_section.find("Heat").unwrap());
    assert!(year_section.find("Heat").unwrap() < year_section.find("Alien").unwrap());
}

#[tokio::test]
async fn test_filter_movies() {
    let temp_dir = TempDir::new().unwrap();
    let store = seeded_store(temp_dir.path(), "movies.json");

    let (output, _) = run_script(temp_dir.path(), &store, "10\n8\n1990\n\n\n10\n9.9\n\n\n\n0\n").await;

    let first = output.find("FILTERED MOVIES").unwrap();
    let second = output.rfind("FILTERED MOVIES").unwrap();
    let first_section = &output[first..second];
    assert!(first_section.contains("Heat (1995): 8.3"));
    assert!(!first_section.contains("Alien"));
    assert!(!first_section.contains("Up (2009)"));
    assert!(output[second..].contains("No movies have been found with the given criteria."));
}

#[tokio::test]
async fn test_generate_website() {
    let temp_dir = TempDir::new().unwrap();
    let store = seeded_store(temp_dir.path(), "movies.json");

    let (output, _) = run_script(temp_dir.path(), &store, "11\n\n0\n").await;

    let page = temp_dir.path().join("site").join("index.html");
    assert!(output.contains("was generated with 3 movies"));
    let html = std::fs::read_to_string(page).unwrap();
    assert!(html.contains("<title>Test Shelf</title>"));
    assert!(html.contains("<img src=\"alien.jpg\">"));
}

#[tokio::test]
async fn test_missing_store_is_reported_and_loop_continues() {
    let temp_dir = TempDir::new().unwrap();
    let store = seeded_store(temp_dir.path(), "movies.json");
    std::fs::remove_file(&store).unwrap();

    let (output, state) = run_script(temp_dir.path(), &store, "1\n\n0\n").await;

    assert!(output.contains("Storage file not found"));
    assert_eq!(state, AppState::Exited);
}
