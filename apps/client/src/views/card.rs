//! `/decks/:deckId/cards/new` and `/decks/:deckId/cards/:cardId/edit`.

use flashcard_core::types::{CardId, DeckId};
use flashcard_core::{CardForm, Route, ValidationError};

use super::{breadcrumb, deck_unavailable, field, wait_for_navigation, Filled, Next};
use crate::console::Console;
use crate::error::Result;
use crate::state::App;

/// Prompt for front and back until `submit` accepts the form.
fn fill<C: Console, T>(
    console: &mut C,
    initial: CardForm,
    editing: bool,
    submit: impl Fn(&CardForm) -> std::result::Result<T, ValidationError>,
) -> Result<Filled<T>> {
    let mut form = initial;
    loop {
        let current = editing.then(|| form.clone());
        form.front = field!(console, "Front", current.as_ref().map(|f| f.front.as_str()));
        form.back = field!(console, "Back", current.as_ref().map(|f| f.back.as_str()));

        match submit(&form) {
            Ok(value) => return Ok(Filled::Submit(value)),
            Err(e) => console.write_line(&format!("Cannot save: {e}."))?,
        }
    }
}

/// Add cards one after another; the form clears after each save.
pub(crate) async fn add<C: Console>(app: &mut App<C>, deck_id: DeckId) -> Result<Next> {
    let Some(deck) = app.ensure_deck(deck_id).await else {
        let state = app.deck().state().clone();
        return Ok(deck_unavailable(app.console_mut(), &state, deck_id)?);
    };

    let console = app.console_mut();
    breadcrumb(console, &[&deck.name, "Add Card"])?;
    console.write_line(&format!("{}: Add Card", deck.name))?;
    console.write_line(&format!("(enter {} when done)", Route::Deck(deck_id)))?;

    loop {
        let input = match fill(app.console_mut(), CardForm::default(), false, CardForm::validate)? {
            Filled::Submit(input) => input,
            Filled::Leave(next) => return Ok(next),
        };

        match app.create_card(deck_id, &input).await? {
            Some(card) => app
                .console_mut()
                .write_line(&format!("Saved card {}.", card.id))?,
            None => app
                .console_mut()
                .write_line("Could not save the card. Try again.")?,
        }
    }
}

pub(crate) async fn edit<C: Console>(
    app: &mut App<C>,
    deck_id: DeckId,
    card_id: CardId,
) -> Result<Next> {
    let scope = app.scope();
    let card = match app.api().read_card(card_id, scope.token()).await {
        Ok(card) => card,
        Err(e) => {
            tracing::error!(%card_id, error = %e, "failed to load card");
            let console = app.console_mut();
            console.write_line("Loading...")?;
            return Ok(wait_for_navigation(console)?);
        }
    };
    drop(scope);

    let deck_name = match app.ensure_deck(deck_id).await {
        Some(deck) => deck.name,
        None => format!("Deck {deck_id}"),
    };

    let console = app.console_mut();
    breadcrumb(console, &[&deck_name, &format!("Edit Card {card_id}")])?;
    console.write_line("Edit Card")?;
    console.write_line("(press Enter to keep a value, or enter a path to cancel)")?;

    loop {
        let updated = match fill(app.console_mut(), CardForm::from_card(&card), true, |form| {
            form.apply_to(&card)
        })? {
            Filled::Submit(updated) => updated,
            Filled::Leave(next) => return Ok(next),
        };

        if app.update_card(&updated).await? {
            return Ok(Next::Go(Route::Deck(updated.deck_id)));
        }
        app.console_mut()
            .write_line("Could not save the card. Try again.")?;
    }
}
