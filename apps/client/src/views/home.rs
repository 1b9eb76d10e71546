//! `/`: the deck list.

use flashcard_core::types::DeckId;
use flashcard_core::Route;

use super::{read_command, split_command, Input, Next};
use crate::console::Console;
use crate::error::Result;
use crate::state::App;

pub(crate) async fn show<C: Console>(app: &mut App<C>) -> Result<Next> {
    if app.decks().is_stale() {
        app.reload_decks().await?;
    }

    let lines = listing(app);
    let console = app.console_mut();
    console.write_line("FlipFlash")?;
    console.write_line("Create and study flashcards")?;
    console.write_line("")?;
    for line in &lines {
        console.write_line(line)?;
    }
    console.write_line("")?;
    console.write_line("Commands: new | view <id> | study <id> | delete <id> | quit")?;

    loop {
        let text = match read_command(app.console_mut())? {
            Input::Go(route) => return Ok(Next::Go(route)),
            Input::Quit => return Ok(Next::Quit),
            Input::Text(text) => text,
        };

        match split_command(&text) {
            ("new", None) => return Ok(Next::Go(Route::NewDeck)),
            ("view", Some(id)) => {
                if let Some(deck_id) = parse_deck_id(app, id)? {
                    return Ok(Next::Go(Route::Deck(deck_id)));
                }
            }
            ("study", Some(id)) => {
                if let Some(deck_id) = parse_deck_id(app, id)? {
                    return Ok(Next::Go(Route::Study(deck_id)));
                }
            }
            ("delete", Some(id)) => {
                if let Some(deck_id) = parse_deck_id(app, id)? {
                    if app
                        .console_mut()
                        .confirm("Delete this deck? You will not be able to recover it.")?
                    {
                        app.delete_deck(deck_id).await?;
                        return Ok(Next::Go(Route::Home));
                    }
                }
            }
            _ => app.console_mut().write_line("Unknown command.")?,
        }
    }
}

fn listing<C: Console>(app: &App<C>) -> Vec<String> {
    let decks = app.decks().decks();
    if decks.is_empty() {
        return vec!["No decks yet. Type `new` to create one.".to_string()];
    }
    decks
        .iter()
        .flat_map(|deck| {
            [
                format!("[{}] {} ({} cards)", deck.id, deck.name, deck.card_count()),
                format!("    {}", deck.description),
            ]
        })
        .collect()
}

fn parse_deck_id<C: Console>(app: &mut App<C>, raw: &str) -> Result<Option<DeckId>> {
    match raw.parse::<DeckId>() {
        Ok(deck_id) => Ok(Some(deck_id)),
        Err(_) => {
            app.console_mut()
                .write_line(&format!("'{raw}' is not a deck id."))?;
            Ok(None)
        }
    }
}
