//! Terminal views, one per route.
//!
//! Each view prints its screen, then reads commands until the user picks a
//! destination. Typing a path (anything starting with `/`) at any prompt
//! navigates there, like editing the address bar.

mod card;
mod deck;
mod deck_form;
mod home;
mod study;

use std::io;

use flashcard_core::types::DeckId;
use flashcard_core::Route;

use crate::console::Console;
use crate::error::Result;
use crate::state::App;
use crate::sync::{not_found_message, DeckState};

/// Where to go after a view finishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Next {
    Go(Route),
    Quit,
}

/// Render `route` and return the user's next destination.
pub(crate) async fn render<C: Console>(app: &mut App<C>, route: &Route) -> Result<Next> {
    match route {
        Route::Home => home::show(app).await,
        Route::NewDeck => deck_form::create(app).await,
        Route::Deck(deck_id) => deck::show(app, *deck_id).await,
        Route::Study(deck_id) => study::show(app, *deck_id).await,
        Route::EditDeck(deck_id) => deck_form::edit(app, *deck_id).await,
        Route::NewCard(deck_id) => card::add(app, *deck_id).await,
        Route::EditCard { deck_id, card_id } => card::edit(app, *deck_id, *card_id).await,
        Route::NotFound(path) => not_found(app.console_mut(), path),
    }
}

/// One line of user input, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Input {
    Text(String),
    Go(Route),
    Quit,
}

impl Input {
    fn into_next(self) -> Option<Next> {
        match self {
            Self::Go(route) => Some(Next::Go(route)),
            Self::Quit => Some(Next::Quit),
            Self::Text(_) => None,
        }
    }
}

/// Read a command. `home`, `quit` and paths are handled for every view.
pub(crate) fn read_command<C: Console>(console: &mut C) -> io::Result<Input> {
    let Some(line) = console.read_line("> ")? else {
        return Ok(Input::Quit);
    };
    let line = line.trim();
    Ok(match line {
        "q" | "quit" => Input::Quit,
        "home" => Input::Go(Route::Home),
        path if path.starts_with('/') => Input::Go(Route::parse(path)),
        text => Input::Text(text.to_string()),
    })
}

/// Read a form field. Field text is kept verbatim; when `current` is given,
/// an empty answer keeps it.
pub(crate) fn read_field<C: Console>(
    console: &mut C,
    label: &str,
    current: Option<&str>,
) -> io::Result<Input> {
    let prompt = match current {
        Some(value) => format!("{label} [{value}]: "),
        None => format!("{label}: "),
    };
    let Some(line) = console.read_line(&prompt)? else {
        return Ok(Input::Quit);
    };
    if line.trim_start().starts_with('/') {
        return Ok(Input::Go(Route::parse(&line)));
    }
    Ok(match current {
        Some(value) if line.is_empty() => Input::Text(value.to_string()),
        _ => Input::Text(line),
    })
}

/// Result of filling in a form: the accepted value, or where the user went
/// instead of submitting.
pub(crate) enum Filled<T> {
    Submit(T),
    Leave(Next),
}

/// Read one form field inside a function returning `Result<Filled<_>>`,
/// leaving the form when the user navigates or input ends.
macro_rules! field {
    ($console:expr, $label:expr, $current:expr) => {
        match $crate::views::read_field($console, $label, $current)? {
            $crate::views::Input::Text(text) => text,
            $crate::views::Input::Go(route) => {
                return Ok($crate::views::Filled::Leave($crate::views::Next::Go(route)))
            }
            $crate::views::Input::Quit => {
                return Ok($crate::views::Filled::Leave($crate::views::Next::Quit))
            }
        }
    };
}
pub(crate) use field;

/// Split `verb arg` commands.
pub(crate) fn split_command(text: &str) -> (&str, Option<&str>) {
    match text.split_once(char::is_whitespace) {
        Some((verb, arg)) => (verb, Some(arg.trim())),
        None => (text, None),
    }
}

pub(crate) fn breadcrumb<C: Console>(console: &mut C, trail: &[&str]) -> io::Result<()> {
    let mut parts = vec!["Home"];
    parts.extend_from_slice(trail);
    console.write_line(&parts.join(" / "))?;
    console.write_line("")
}

/// Read commands until one of them navigates.
pub(crate) fn wait_for_navigation<C: Console>(console: &mut C) -> io::Result<Next> {
    loop {
        if let Some(next) = read_command(console)?.into_next() {
            return Ok(next);
        }
        console.write_line("Enter a path such as / to continue, or quit.")?;
    }
}

/// Shown when a deck-scoped view has no deck to work with.
pub(crate) fn deck_unavailable<C: Console>(
    console: &mut C,
    state: &DeckState,
    deck_id: DeckId,
) -> io::Result<Next> {
    match state {
        DeckState::NotFound(_) => console.write_line(&not_found_message(deck_id))?,
        DeckState::Loading | DeckState::Loaded(_) => console.write_line("Loading...")?,
    }
    wait_for_navigation(console)
}

fn not_found<C: Console>(console: &mut C, path: &str) -> Result<Next> {
    console.write_line("Not Found")?;
    console.write_line(&format!("There is no page at {path}."))?;
    Ok(wait_for_navigation(console)?)
}
