//! `/decks/:deckId`: one deck and its cards.

use flashcard_core::types::{CardId, Deck, DeckId};
use flashcard_core::Route;

use super::{breadcrumb, deck_unavailable, read_command, split_command, Input, Next};
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
    breadcrumb(console, &[&deck.name])?;
    console.write_line(&deck.name)?;
    console.write_line(&deck.description)?;
    console.write_line("")?;
    console.write_line(&format!("Cards ({})", deck.card_count()))?;
    for card in &deck.cards {
        console.write_line(&format!("[{}] {}", card.id, card.front))?;
        console.write_line(&format!("    {}", card.back))?;
    }
    console.write_line("")?;
    console.write_line(
        "Commands: edit | study | add | delete | edit-card <id> | delete-card <id> | home",
    )?;

    loop {
        let text = match read_command(app.console_mut())? {
            Input::Go(route) => return Ok(Next::Go(route)),
            Input::Quit => return Ok(Next::Quit),
            Input::Text(text) => text,
        };

        match split_command(&text) {
            ("edit", None) => return Ok(Next::Go(Route::EditDeck(deck_id))),
            ("study", None) => return Ok(Next::Go(Route::Study(deck_id))),
            ("add", None) => return Ok(Next::Go(Route::NewCard(deck_id))),
            ("delete", None) => {
                if app
                    .console_mut()
                    .confirm("Delete this deck? You will not be able to recover it.")?
                {
                    app.delete_deck(deck_id).await?;
                    return Ok(Next::Go(Route::Home));
                }
            }
            ("edit-card", Some(raw)) => match card_in_deck(&deck, raw) {
                Some(card_id) => return Ok(Next::Go(Route::EditCard { deck_id, card_id })),
                None => no_such_card(app, raw)?,
            },
            ("delete-card", Some(raw)) => match card_in_deck(&deck, raw) {
                Some(card_id) => {
                    if app
                        .console_mut()
                        .confirm("Delete this card? You will not be able to recover it.")?
                    {
                        app.delete_card(deck_id, card_id).await?;
                        return Ok(Next::Go(Route::Deck(deck_id)));
                    }
                }
                None => no_such_card(app, raw)?,
            },
            _ => app.console_mut().write_line("Unknown command.")?,
        }
    }
}

fn card_in_deck(deck: &Deck, raw: &str) -> Option<CardId> {
    let card_id = raw.parse::<CardId>().ok()?;
    deck.card(card_id).map(|card| card.id)
}

fn no_such_card<C: Console>(app: &mut App<C>, raw: &str) -> Result<()> {
    app.console_mut()
        .write_line(&format!("No card '{raw}' in this deck."))?;
    Ok(())
}
