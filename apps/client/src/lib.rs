//! Terminal client for the flashcards REST API.
//!
//! Decks and cards live on the server; this crate renders them, routes
//! between screens, and runs study sessions over a loaded deck.

pub mod api;
pub mod config;
pub mod console;
pub mod error;
pub mod state;
pub mod sync;
pub mod views;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use api::{ApiClient, ApiError};
pub use config::{Cli, Config};
pub use console::{Console, StdConsole};
pub use error::{Error, Result};
pub use state::App;
pub use sync::{DeckDetail, DeckList, DeckState};
pub use views::Next;

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from(Cli::parse());
    tracing::info!(api = %config.api_base_url, start = %config.start, "starting");

    let api = ApiClient::new(config.api_base_url);
    let mut app = App::new(api, StdConsole::new());
    app.run(config.start).await?;

    Ok(())
}
