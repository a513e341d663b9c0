//! Menu commands.

/// One entry of the numbered menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Exit,
    ListMovies,
    AddMovie,
    DeleteMovie,
    UpdateMovie,
    Stats,
    RandomMovie,
    SearchMovie,
    SortByRating,
    SortByYear,
    FilterMovies,
    GenerateWebsite,
}

impl MenuCommand {
    /// All commands in menu order; the index is the menu number.
    pub const ALL: [MenuCommand; 12] = [
        MenuCommand::Exit,
        MenuCommand::ListMovies,
        MenuCommand::AddMovie,
        MenuCommand::DeleteMovie,
        MenuCommand::UpdateMovie,
        MenuCommand::Stats,
        MenuCommand::RandomMovie,
        MenuCommand::SearchMovie,
        MenuCommand::SortByRating,
        MenuCommand::SortByYear,
        MenuCommand::FilterMovies,
        MenuCommand::GenerateWebsite,
    ];

    /// Parse a menu selection such as `"7"`. Only the plain menu number matches.
    pub fn from_token(token: &str) -> Option<Self> {
        let token = token.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|command| command.number().to_string() == token)
    }

    /// Menu number.
    pub fn number(self) -> usize {
        Self::ALL.iter().position(|&c| c == self).unwrap_or(0)
    }

    /// Menu label.
    pub fn label(self) -> &'static str {
        match self {
            MenuCommand::Exit => "Exit",
            MenuCommand::ListMovies => "List movies",
            MenuCommand::AddMovie => "Add movie",
            MenuCommand::DeleteMovie => "Delete movie",
            MenuCommand::UpdateMovie => "Update movie",
            MenuCommand::Stats => "Stats",
            MenuCommand::RandomMovie => "Random movie",
            MenuCommand::SearchMovie => "Search movie",
            MenuCommand::SortByRating => "Movies sorted by rating",
            MenuCommand::SortByYear => "Movies sorted by year",
            MenuCommand::FilterMovies => "Filter movies",
            MenuCommand::GenerateWebsite => "Generate website",
        }
    }
}

impl std::fmt::Display for MenuCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:>2}. {}", self.number(), self.label())
    }
}
