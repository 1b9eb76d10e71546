//! `/decks/:deckId/study`: flip through a deck.

use flashcard_core::types::{Deck, DeckId};
use flashcard_core::{Advance, EndChoice, Route, Side, StudyError, StudySession};

use super::{breadcrumb, deck_unavailable, read_command, wait_for_navigation, Input, Next};
use crate::console::Console;
use crate::error::Result;
use crate::state::App;
use crate::sync::DeckState;

pub(crate) async fn show<C: Console>(app: &mut App<C>, deck_id: DeckId) -> Result<Next> {
    app.load_deck(deck_id).await;

    let deck = match app.deck().state().clone() {
        DeckState::Loaded(deck) => deck,
        state => return Ok(deck_unavailable(app.console_mut(), &state, deck_id)?),
    };

    let console = app.console_mut();
    breadcrumb(console, &[&deck.name, "Study"])?;
    console.write_line(&format!("{}: Study", deck.name))?;
    console.write_line("")?;

    match StudySession::start(deck.cards.clone()) {
        Ok(session) => run_session(console, session),
        Err(StudyError::NotEnoughCards { count, required }) => {
            not_enough_cards(console, &deck, count, required)
        }
        Err(e) => {
            console.write_line(&e.to_string())?;
            Ok(wait_for_navigation(console)?)
        }
    }
}

fn not_enough_cards<C: Console>(
    console: &mut C,
    deck: &Deck,
    count: usize,
    required: usize,
) -> Result<Next> {
    console.write_line("Not enough cards.")?;
    console.write_line(&format!(
        "You need at least {required} cards to study. There are {count} cards in this deck."
    ))?;
    console.write_line("Type `add` to add cards.")?;

    loop {
        match read_command(console)? {
            Input::Go(route) => return Ok(Next::Go(route)),
            Input::Quit => return Ok(Next::Quit),
            Input::Text(text) if text == "add" => return Ok(Next::Go(Route::NewCard(deck.id))),
            Input::Text(_) => console.write_line("Unknown command.")?,
        }
    }
}

fn run_session<C: Console>(console: &mut C, mut session: StudySession) -> Result<Next> {
    loop {
        console.write_line(&session.position_label())?;
        console.write_line(session.visible_text())?;
        match session.side() {
            Side::Front => console.write_line("(flip)")?,
            Side::Back => console.write_line("(flip | next)")?,
        }

        let text = match read_command(console)? {
            Input::Go(route) => return Ok(Next::Go(route)),
            Input::Quit => return Ok(Next::Quit),
            Input::Text(text) => text,
        };

        // A bare Enter does the obvious thing for the side showing.
        let action = match (text.as_str(), session.side()) {
            ("", Side::Front) => "flip",
            ("", Side::Back) => "next",
            (action, _) => action,
        };

        match action {
            "flip" => session.flip(),
            "next" => match session.advance() {
                Ok(Advance::Next) => {}
                Ok(Advance::EndOfDeck) => {
                    let choice = if console
                        .confirm("Restart cards? Answer n to return to the homepage.")?
                    {
                        EndChoice::Restart
                    } else {
                        EndChoice::Exit
                    };
                    match session.finish(choice) {
                        Some(restarted) => session = restarted,
                        None => return Ok(Next::Go(Route::Home)),
                    }
                }
                Err(StudyError::NotFlipped) => {
                    console.write_line("Flip the card before moving on.")?
                }
                Err(e) => console.write_line(&e.to_string())?,
            },
            _ => console.write_line("Unknown command.")?,
        }
    }
}
