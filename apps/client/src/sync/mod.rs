//! Deck list and deck detail stores kept in step with the server.
//!
//! Neither store merges local edits. After a mutation the caller re-fetches
//! and the server's answer replaces whatever was held; the one exception is
//! [`DeckList::remove`], applied before the delete request is confirmed.

use flashcard_core::types::{Deck, DeckId};
use tokio_util::sync::CancellationToken;

use crate::api::{ApiClient, ApiError};

/// Message shown when a deck detail fetch answers 404.
pub fn not_found_message(deck_id: DeckId) -> String {
    format!("Deck with id {deck_id} not found.")
}

/// Every deck, with embedded cards, as last reported by the server.
#[derive(Debug, Default)]
pub struct DeckList {
    decks: Vec<Deck>,
    stale: bool,
}

impl DeckList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn decks(&self) -> &[Deck] {
        &self.decks
    }

    pub fn get(&self, deck_id: DeckId) -> Option<&Deck> {
        self.decks.iter().find(|d| d.id == deck_id)
    }

    /// Whether a reload was requested for the next render.
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    pub fn mark_stale(&mut self) {
        self.stale = true;
    }

    /// Replace the held list with the server's.
    ///
    /// A result arriving after `signal` was cancelled is discarded.
    pub async fn reload(&mut self, api: &ApiClient, signal: &CancellationToken) -> Result<(), ApiError> {
        let decks = api.list_decks(signal).await?;
        if signal.is_cancelled() {
            tracing::debug!("deck list reload cancelled; keeping current list");
            return Ok(());
        }
        tracing::debug!(count = decks.len(), "deck list reloaded");
        self.decks = decks;
        self.stale = false;
        Ok(())
    }

    /// Drop a deck locally without waiting for the server.
    pub fn remove(&mut self, deck_id: DeckId) -> Option<Deck> {
        let pos = self.decks.iter().position(|d| d.id == deck_id)?;
        Some(self.decks.remove(pos))
    }
}

/// What the deck detail store currently holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DeckState {
    #[default]
    Loading,
    Loaded(Deck),
    NotFound(DeckId),
}

/// The deck currently being viewed, with its cards.
#[derive(Debug, Default)]
pub struct DeckDetail {
    state: DeckState,
}

impl DeckDetail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DeckState {
        &self.state
    }

    pub fn deck(&self) -> Option<&Deck> {
        match &self.state {
            DeckState::Loaded(deck) => Some(deck),
            DeckState::Loading | DeckState::NotFound(_) => None,
        }
    }

    /// The held deck, only if it is `deck_id`.
    pub fn deck_for(&self, deck_id: DeckId) -> Option<&Deck> {
        self.deck().filter(|d| d.id == deck_id)
    }

    /// Show a different deck: reset to `Loading`, then fetch.
    pub async fn load(&mut self, api: &ApiClient, deck_id: DeckId, signal: &CancellationToken) {
        self.state = DeckState::Loading;
        self.refresh(api, deck_id, signal).await;
    }

    /// Re-fetch without clearing what is shown.
    ///
    /// A 404 becomes [`DeckState::NotFound`]; other failures are logged and
    /// leave the state as it was.
    pub async fn refresh(&mut self, api: &ApiClient, deck_id: DeckId, signal: &CancellationToken) {
        match api.read_deck(deck_id, signal).await {
            Ok(_) if signal.is_cancelled() => {
                tracing::debug!(%deck_id, "deck fetch cancelled");
            }
            Ok(deck) => self.state = DeckState::Loaded(deck),
            Err(e) if e.is_not_found() => {
                tracing::info!(%deck_id, "deck not found");
                self.state = DeckState::NotFound(deck_id);
            }
            Err(e) => {
                tracing::error!(%deck_id, error = %e, "failed to load deck");
            }
        }
    }

    /// Forget `deck_id` if it is the deck being held, so the next visit
    /// fetches it again.
    pub fn forget(&mut self, deck_id: DeckId) {
        if self.deck_for(deck_id).is_some() {
            self.state = DeckState::Loading;
        }
    }

    /// Hold `deck` as submitted, without asking the server.
    pub fn replace(&mut self, deck: Deck) {
        self.state = DeckState::Loaded(deck);
    }
}
