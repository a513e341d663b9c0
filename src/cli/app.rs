//! Interactive menu loop.
//!
//! Reads one menu selection per iteration, runs the command against the
//! storage backend and the collection operations, then returns to the menu.

use super::menu::MenuCommand;
use super::prompt;
use crate::core::query::{self, FilterCriteria, YearOrder};
use crate::core::{search, stats};
use crate::generators::website;
use crate::models::config::WebsiteConfig;
use crate::models::Movie;
use crate::services::omdb::MovieLookup;
use crate::storage::MovieStorage;
use crate::{Error, Result};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{BufRead, Write};

/// Where the menu loop is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    AwaitingSelection,
    Executing(MenuCommand),
    Exited,
}

/// The movie collection application.
pub struct MovieApp<L, R, W> {
    storage: Box<dyn MovieStorage>,
    lookup: L,
    website: WebsiteConfig,
    input: R,
    output: W,
    state: AppState,
}

impl<L, R, W> MovieApp<L, R, W>
where
    L: MovieLookup,
    R: BufRead,
    W: Write,
{
    pub fn new(storage: Box<dyn MovieStorage>, lookup: L, website: WebsiteConfig, input: R, output: W) -> Self {
        Self {
            storage,
            lookup,
            website,
            input,
            output,
            state: AppState::AwaitingSelection,
        }
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    /// Consume the app and hand back its output writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the menu loop until Exit is chosen or input ends.
    pub async fn run(&mut self) -> Result<()> {
        while self.state != AppState::Exited {
            self.print_menu()?;

            let token = match self.read_line(&format!(
                "{}\n",
                " Choose an option (0-11) and press ENTER: ".bright_blue()
            )) {
                Ok(token) => token,
                Err(Error::InputClosed) => {
                    self.state = AppState::Exited;
                    break;
                }
                Err(e) => return Err(e),
            };

            match MenuCommand::from_token(&token) {
                Some(MenuCommand::Exit) => {
                    writeln!(self.output, "\n{}", " Bye Bye! ".yellow())?;
                    self.state = AppState::Exited;
                    break;
                }
                Some(command) => {
                    self.state = AppState::Executing(command);
                    tracing::debug!("Executing: {}", command.label());
                    match self.execute(command).await {
                        Ok(()) => {}
                        Err(Error::InputClosed) => {
                            self.state = AppState::Exited;
                            break;
                        }
                        Err(e) => self.report_error(&e)?,
                    }
                    self.state = AppState::AwaitingSelection;
                }
                None => {
                    writeln!(
                        self.output,
                        "{}",
                        format!(" '{}' is not a valid option.", token.trim()).red()
                    )?;
                }
            }

            if self
                .read_line(&format!("\n{}\n", " press ENTER to continue ".bright_blue()))
                .is_err()
            {
                self.state = AppState::Exited;
            }
        }

        Ok(())
    }

    /// Dispatch one command.
    pub async fn execute(&mut self, command: MenuCommand) -> Result<()> {
        match command {
            MenuCommand::Exit => Ok(()),
            MenuCommand::ListMovies => self.list_movies(),
            MenuCommand::AddMovie => self.add_movie().await,
            MenuCommand::DeleteMovie => self.delete_movie(),
            MenuCommand::UpdateMovie => self.update_movie(),
            MenuCommand::Stats => self.movie_stats(),
            MenuCommand::RandomMovie => self.random_movie(),
            MenuCommand::SearchMovie => self.search_movie(),
            MenuCommand::SortByRating => self.sort_by_rating(),
            MenuCommand::SortByYear => self.sort_by_year(),
            MenuCommand::FilterMovies => self.filter_movies(),
            MenuCommand::GenerateWebsite => self.generate_website(),
        }
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "{}", "  *** My Movies Database ***   ".black().on_yellow())?;
        writeln!(self.output)?;
        writeln!(self.output, " {}", " MENU ".black().on_yellow())?;
        for command in MenuCommand::ALL {
            writeln!(self.output, " {}", command)?;
        }
        Ok(())
    }

    fn list_movies(&mut self) -> Result<()> {
        let movies = self.storage.list_movies()?;
        if movies.is_empty() {
            return self.not_enough_movies();
        }

        writeln!(
            self.output,
            "\n{}",
            format!(" *** {} MOVIES IN TOTAL *** ", movies.len()).black().on_yellow()
        )?;
        for movie in &movies {
            writeln!(
                self.output,
                "{} ({}): {}",
                movie.title,
                movie.year,
                format!(" {} ", format_rating(movie.rating)).yellow()
            )?;
        }
        Ok(())
    }

    async fn add_movie(&mut self) -> Result<()> {
        let title = prompt::read_non_empty(
            &mut self.input,
            &mut self.output,
            &format!("\n{}", " Enter new movie name: ".black().on_yellow()),
        )?;

        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(style);
        }
        pb.set_message(format!("Looking up '{}'...", title));
        pb.enable_steady_tick(std::time::Duration::from_millis(100));

        let fetched = self.lookup.fetch(&title).await;
        pb.finish_and_clear();

        let movie = fetched?;
        let added = movie.title.clone();
        self.storage.add_movie(movie)?;
        writeln!(self.output, "{}", format!("Movie '{}' successfully added", added).green())?;
        Ok(())
    }

    fn delete_movie(&mut self) -> Result<()> {
        let title = prompt::read_non_empty(
            &mut self.input,
            &mut self.output,
            &format!("\n{}", "Enter movie name to delete: ".black().on_yellow()),
        )?;

        self.storage.delete_movie(&title)?;
        writeln!(self.output, "{}", format!("Movie '{}' successfully deleted", title).green())?;
        Ok(())
    }

    fn update_movie(&mut self) -> Result<()> {
        let movies = self.storage.list_movies()?;
        let title = prompt::read_non_empty(
            &mut self.input,
            &mut self.output,
            &format!("\n{}", "Enter movie name to update: ".black().on_yellow()),
        )?;
        if !movies.contains(&title) {
            return Err(Error::MovieNotFound(title));
        }

        let rating = prompt::read_rating(
            &mut self.input,
            &mut self.output,
            "Enter new movie rating (1-10): ",
        )?;
        self.storage.update_movie(&title, rating)?;
        writeln!(self.output, "{}", format!("Movie '{}' successfully updated", title).green())?;
        Ok(())
    }

    fn movie_stats(&mut self) -> Result<()> {
        let movies = self.storage.list_movies()?;
        let Some(summary) = stats::summarize(&movies) else {
            return self.not_enough_movies();
        };

        writeln!(self.output, "\n{}\n", " *** STATS *** ".black().on_yellow())?;
        writeln!(
            self.output,
            "{} {}\n",
            " Average rating: ".bright_blue(),
            format!(" {:.2} ", summary.average).black().on_bright_blue()
        )?;
        writeln!(
            self.output,
            "{} {}\n",
            " Median rating: ".green(),
            format!(" {:.2} ", summary.median).black().on_green()
        )?;
        for title in &summary.best.titles {
            writeln!(
                self.output,
                "{} {} {}\n",
                " Best movie: ".yellow(),
                title,
                format!(" {} ", format_rating(summary.best.rating)).black().on_yellow()
            )?;
        }
        for title in &summary.worst.titles {
            writeln!(
                self.output,
                "{} {} {}\n",
                " Worst movie: ".red(),
                title,
                format!(" {} ", format_rating(summary.worst.rating)).black().on_red()
            )?;
        }
        Ok(())
    }

    fn random_movie(&mut self) -> Result<()> {
        let movies = self.storage.list_movies()?;
        let Some(movie) = stats::random_movie(&movies, &mut rand::thread_rng()) else {
            return self.not_enough_movies();
        };

        writeln!(self.output, "\n{}", " YOUR MOVIE FOR TONIGHT ".black().on_yellow())?;
        writeln!(
            self.output,
            "{} ({}), it's rated {}",
            movie.title,
            movie.year,
            format!(" {} ", format_rating(movie.rating)).bright_blue()
        )?;
        Ok(())
    }

    fn search_movie(&mut self) -> Result<()> {
        let movies = self.storage.list_movies()?;
        let query = prompt::read_non_empty(
            &mut self.input,
            &mut self.output,
            &format!("\n{}", "Enter a part of the movie name: ".black().on_yellow()),
        )?;
        let results = search::search(&movies, &query);

        writeln!(self.output, "\n{}", " FOUND MOVIE(S) ".black().on_green())?;
        if results.exact.is_empty() {
            writeln!(
                self.output,
                "{}",
                format!(" The movie '{}' was not found.", query).red()
            )?;
        }
        for movie in &results.exact {
            writeln!(
                self.output,
                "{} ({}), {}",
                movie.title,
                movie.year,
                format!(" {} ", format_rating(movie.rating)).green()
            )?;
        }

        writeln!(self.output, "\n{}", " OTHER FOUND MOVIE(S) ".black().on_bright_blue())?;
        if results.similar.is_empty() {
            writeln!(self.output, "{}", " No movie was found.".red())?;
        }
        for movie in &results.similar {
            writeln!(
                self.output,
                "{} ({}), {}",
                movie.title,
                movie.year,
                format!(" {} ", format_rating(movie.rating)).bright_blue()
            )?;
        }
        Ok(())
    }

    fn sort_by_rating(&mut self) -> Result<()> {
        let movies = self.storage.list_movies()?;
        writeln!(self.output, "\n{}", " *** MOVIES SORTED BY RATING *** ".black().on_magenta())?;
        for movie in query::sort_by_rating(&movies) {
            writeln!(
                self.output,
                "{} ({}): {}",
                movie.title,
                movie.year,
                format!(" {} ", format_rating(movie.rating)).magenta()
            )?;
        }
        Ok(())
    }

    fn sort_by_year(&mut self) -> Result<()> {
        let movies = self.storage.list_movies()?;
        let latest_first = prompt::read_yes_no(
            &mut self.input,
            &mut self.output,
            &format!("{}", " Do you want the latest movies first? (Y/N) ".green()),
        )?;
        let order = if latest_first {
            YearOrder::LatestFirst
        } else {
            YearOrder::OldestFirst
        };

        writeln!(self.output, "\n{}", " *** MOVIES SORTED BY YEAR *** ".black().on_green())?;
        for movie in query::sort_by_year(&movies, order) {
            writeln!(
                self.output,
                "{} {}: {}",
                movie.title,
                format!("({})", movie.year).green(),
                format_rating(movie.rating)
            )?;
        }
        Ok(())
    }

    fn filter_movies(&mut self) -> Result<()> {
        let movies = self.storage.list_movies()?;
        let min_rating = prompt::read_optional_rating(
            &mut self.input,
            &mut self.output,
            &format!(
                "Enter {} (leave blank for no minimum rating): ",
                " minimum rating ".red()
            ),
        )?;
        let start_year = prompt::read_optional_year(
            &mut self.input,
            &mut self.output,
            &format!("Enter {} (leave blank for no start year): ", " start year ".green()),
        )?;
        let end_year = prompt::read_optional_year(
            &mut self.input,
            &mut self.output,
            &format!("Enter {} (leave blank for no end year): ", " end year ".bright_blue()),
        )?;

        let criteria = FilterCriteria {
            min_rating,
            start_year,
            end_year,
        };
        let filtered = query::filter_movies(&movies, &criteria);

        writeln!(self.output, "\n{}", " *** FILTERED MOVIES *** ".black().on_red())?;
        if filtered.is_empty() {
            writeln!(self.output, "No movies have been found with the given criteria.")?;
        }
        for movie in filtered {
            writeln!(self.output, "{}", movie_line(movie))?;
        }
        Ok(())
    }

    fn generate_website(&mut self) -> Result<()> {
        let movies = self.storage.list_movies()?;
        let path = website::write_website(&self.website, &movies)?;
        writeln!(
            self.output,
            "A '{}' file was generated with {} movies.",
            path.display(),
            movies.len()
        )?;
        Ok(())
    }

    fn not_enough_movies(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "Not enough movies.\nPlease add movies by choosing the option '{}'",
            MenuCommand::AddMovie.to_string().trim()
        )?;
        Ok(())
    }

    fn report_error(&mut self, error: &Error) -> Result<()> {
        if error.is_lookup() {
            tracing::warn!("Lookup failed: {}", error);
        } else {
            tracing::debug!("Command failed: {}", error);
        }

        let message = match error {
            Error::Http(_) => "Connection to the API is not possible.\n\
                 Check internet connection or other possible API connection problems."
                .to_string(),
            other => other.to_string(),
        };
        writeln!(self.output, "{}", message.red())?;
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        prompt::read_line(&mut self.input, &mut self.output, prompt)
    }
}

/// `Title (Year): rating`.
pub fn movie_line(movie: &Movie) -> String {
    format!("{} ({}): {}", movie.title, movie.year, format_rating(movie.rating))
}

/// Ratings always show at least one decimal, e.g. `8.0` and `7.25`.
pub fn format_rating(rating: f64) -> String {
    if rating.fract() == 0.0 {
        format!("{:.1}", rating)
    } else {
        rating.to_string()
    }
}
