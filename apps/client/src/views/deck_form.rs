//! `/decks/new` and `/decks/:deckId/edit`.

use flashcard_core::types::DeckId;
use flashcard_core::{DeckForm, Route, ValidationError};

use super::{breadcrumb, deck_unavailable, field, Filled, Next};
use crate::console::Console;
use crate::error::Result;
use crate::state::App;

/// Prompt for every field until `submit` accepts the form.
///
/// When editing, each prompt shows the current value and Enter keeps it.
fn fill<C: Console, T>(
    console: &mut C,
    initial: DeckForm,
    editing: bool,
    submit: impl Fn(&DeckForm) -> std::result::Result<T, ValidationError>,
) -> Result<Filled<T>> {
    let mut form = initial;
    loop {
        let current = editing.then(|| form.clone());
        form.name = field!(console, "Name", current.as_ref().map(|f| f.name.as_str()));
        form.description = field!(
            console,
            "Description",
            current.as_ref().map(|f| f.description.as_str())
        );

        match submit(&form) {
            Ok(value) => return Ok(Filled::Submit(value)),
            Err(e) => console.write_line(&format!("Cannot save: {e}."))?,
        }
    }
}

pub(crate) async fn create<C: Console>(app: &mut App<C>) -> Result<Next> {
    let console = app.console_mut();
    breadcrumb(console, &["Create Deck"])?;
    console.write_line("Create Deck")?;
    console.write_line("(enter a path such as / to cancel)")?;

    let input = match fill(console, DeckForm::default(), false, DeckForm::validate)? {
        Filled::Submit(input) => input,
        Filled::Leave(next) => return Ok(next),
    };

    let deck = app.create_deck(&input).await?;
    Ok(Next::Go(Route::Deck(deck.id)))
}

pub(crate) async fn edit<C: Console>(app: &mut App<C>, deck_id: DeckId) -> Result<Next> {
    let Some(deck) = app.ensure_deck(deck_id).await else {
        let state = app.deck().state().clone();
        return Ok(deck_unavailable(app.console_mut(), &state, deck_id)?);
    };

    let console = app.console_mut();
    breadcrumb(console, &[&deck.name, "Edit Deck"])?;
    console.write_line("Edit Deck")?;
    console.write_line("(press Enter to keep a value, or enter a path to cancel)")?;

    let updated = match fill(console, DeckForm::from_deck(&deck), true, |form| {
        form.apply_to(&deck)
    })? {
        Filled::Submit(updated) => updated,
        Filled::Leave(next) => return Ok(next),
    };

    app.update_deck(updated).await?;
    Ok(Next::Go(Route::Deck(deck_id)))
}
