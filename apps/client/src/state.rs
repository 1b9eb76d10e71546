//! Application state.
//!
//! [`App`] owns everything shared between views: the API client, the deck
//! list, the deck being viewed and the console. Views borrow it mutably
//! while they render and ask it to reload after they mutate something.

use flashcard_core::types::{Card, CardId, CreateCardInput, CreateDeckInput, Deck, DeckId};
use flashcard_core::Route;
use tokio_util::sync::{CancellationToken, DropGuard};

use crate::api::ApiClient;
use crate::console::Console;
use crate::error::Result;
use crate::sync::{DeckDetail, DeckList};
use crate::views::{self, Next};

/// Cancellation scope for the fetches of one view.
///
/// Cancelled when dropped, and whenever the application shuts down.
#[derive(Debug)]
pub struct Scope {
    token: CancellationToken,
    _guard: DropGuard,
}

impl Scope {
    fn new(parent: &CancellationToken) -> Self {
        let token = parent.child_token();
        let guard = token.clone().drop_guard();
        Self {
            token,
            _guard: guard,
        }
    }

    pub fn token(&self) -> &CancellationToken {
        &self.token
    }
}

/// Top-level coordinator.
#[derive(Debug)]
pub struct App<C> {
    api: ApiClient,
    console: C,
    decks: DeckList,
    deck: DeckDetail,
    root: CancellationToken,
}

impl<C: Console> App<C> {
    pub fn new(api: ApiClient, console: C) -> Self {
        Self {
            api,
            console,
            decks: DeckList::new(),
            deck: DeckDetail::new(),
            root: CancellationToken::new(),
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn console_mut(&mut self) -> &mut C {
        &mut self.console
    }

    pub fn decks(&self) -> &DeckList {
        &self.decks
    }

    pub fn deck(&self) -> &DeckDetail {
        &self.deck
    }

    /// A fresh cancellation scope under the application's root.
    pub fn scope(&self) -> Scope {
        Scope::new(&self.root)
    }

    /// Cancel every outstanding scope.
    pub fn shutdown(&self) {
        self.root.cancel();
    }

    /// Load the deck list, then render routes until the user quits.
    ///
    /// A failure to load the deck list, or to save a deck form, ends the
    /// loop with that error.
    pub async fn run(&mut self, start: Route) -> Result<()> {
        self.reload_decks().await?;

        let mut route = start;
        loop {
            tracing::debug!(path = %route, "rendering route");
            match views::render(self, &route).await? {
                Next::Go(next) => route = next,
                Next::Quit => break,
            }
        }

        self.shutdown();
        Ok(())
    }

    // === Reloads ===

    pub async fn reload_decks(&mut self) -> Result<()> {
        let scope = self.scope();
        self.decks.reload(&self.api, scope.token()).await?;
        Ok(())
    }

    /// Switch the detail store to `deck_id`, resetting it first.
    pub async fn load_deck(&mut self, deck_id: DeckId) {
        let scope = self.scope();
        self.deck.load(&self.api, deck_id, scope.token()).await;
    }

    /// Make sure the detail store holds `deck_id`, fetching only if needed.
    pub async fn ensure_deck(&mut self, deck_id: DeckId) -> Option<Deck> {
        if self.deck.deck_for(deck_id).is_none() {
            self.load_deck(deck_id).await;
        }
        self.deck.deck_for(deck_id).cloned()
    }

    /// Re-fetch the owning deck and the deck list after a card changed.
    async fn reconcile_card_change(&mut self, deck_id: DeckId) -> Result<()> {
        let scope = self.scope();
        self.deck.refresh(&self.api, deck_id, scope.token()).await;
        self.decks.reload(&self.api, scope.token()).await?;
        Ok(())
    }

    // === Deck mutations ===

    pub async fn create_deck(&mut self, input: &CreateDeckInput) -> Result<Deck> {
        let scope = self.scope();
        let deck = self.api.create_deck(input, scope.token()).await?;
        tracing::info!(deck_id = %deck.id, "deck created");
        self.reload_decks().await?;
        Ok(deck)
    }

    /// Save deck metadata and hold the submitted values as the current deck.
    /// The deck list is only marked stale; it reloads on its next render.
    pub async fn update_deck(&mut self, deck: Deck) -> Result<()> {
        let scope = self.scope();
        self.api.update_deck(&deck, scope.token()).await?;
        tracing::info!(deck_id = %deck.id, "deck updated");
        self.deck.replace(deck);
        self.decks.mark_stale();
        Ok(())
    }

    /// Remove a deck from the list and the detail store at once, then delete
    /// it on the server and reload the list.
    pub async fn delete_deck(&mut self, deck_id: DeckId) -> Result<()> {
        self.decks.remove(deck_id);
        self.deck.forget(deck_id);

        let scope = self.scope();
        match self.api.delete_deck(deck_id, scope.token()).await {
            Ok(()) => tracing::info!(%deck_id, "deck deleted"),
            Err(e) => tracing::error!(%deck_id, error = %e, "failed to delete deck"),
        }
        self.reload_decks().await
    }

    // === Card mutations ===

    /// Create a card in `deck_id`. Returns `None` if the server refused it.
    pub async fn create_card(
        &mut self,
        deck_id: DeckId,
        input: &CreateCardInput,
    ) -> Result<Option<Card>> {
        let scope = self.scope();
        let card = match self.api.create_card(deck_id, input, scope.token()).await {
            Ok(card) => card,
            Err(e) => {
                tracing::error!(%deck_id, error = %e, "failed to create card");
                return Ok(None);
            }
        };
        tracing::info!(%deck_id, card_id = %card.id, "card created");
        self.reconcile_card_change(deck_id).await?;
        Ok(Some(card))
    }

    /// Save a card. Returns `false` if the server refused it.
    pub async fn update_card(&mut self, card: &Card) -> Result<bool> {
        let scope = self.scope();
        if let Err(e) = self.api.update_card(card, scope.token()).await {
            tracing::error!(card_id = %card.id, error = %e, "failed to update card");
            return Ok(false);
        }
        tracing::info!(card_id = %card.id, "card updated");
        self.reconcile_card_change(card.deck_id).await?;
        Ok(true)
    }

    pub async fn delete_card(&mut self, deck_id: DeckId, card_id: CardId) -> Result<()> {
        let scope = self.scope();
        match self.api.delete_card(card_id, scope.token()).await {
            Ok(()) => tracing::info!(%card_id, "card deleted"),
            Err(e) => tracing::error!(%card_id, error = %e, "failed to delete card"),
        }
        self.reconcile_card_change(deck_id).await
    }
}
