//! Command line and environment configuration.

use clap::Parser;
use flashcard_core::Route;

/// Used when neither `--api-url` nor `API_BASE_URL` is set.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// Create and study flashcards.
#[derive(Debug, Parser)]
#[command(name = "flashcards", version, about)]
pub struct Cli {
    /// Base URL of the decks/cards REST API.
    #[arg(long = "api-url", env = "API_BASE_URL", default_value = DEFAULT_API_BASE_URL)]
    pub api_url: String,

    /// Path to open first, e.g. `/decks/1/study`.
    #[arg(default_value = "/")]
    pub path: String,
}

/// Resolved runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_base_url: String,
    pub start: Route,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            api_base_url: cli.api_url,
            start: Route::parse(&cli.path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flashcard_core::DeckId;
    use pretty_assertions::assert_eq;

    #[test]
    fn explicit_flags() {
        let cli = Cli::try_parse_from(["flashcards", "--api-url", "http://api:5000", "/decks/2/study"])
            .unwrap();
        let config = Config::from(cli);
        assert_eq!(config.api_base_url, "http://api:5000");
        assert_eq!(config.start, Route::Study(DeckId(2)));
    }

    #[test]
    fn start_path_defaults_to_home() {
        let cli = Cli::try_parse_from(["flashcards", "--api-url", "http://api:5000"]).unwrap();
        assert_eq!(Config::from(cli).start, Route::Home);
    }
}
