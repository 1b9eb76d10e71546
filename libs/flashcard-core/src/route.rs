//! Client-side route table.
//!
//! Paths follow the browser routes of the web front end:
//!
//! | Path                                  | Route        |
//! |---------------------------------------|--------------|
//! | `/`                                   | `Home`       |
//! | `/decks/new`                          | `NewDeck`    |
//! | `/decks/:deckId`                      | `Deck`       |
//! | `/decks/:deckId/study`                | `Study`      |
//! | `/decks/:deckId/edit`                 | `EditDeck`   |
//! | `/decks/:deckId/cards/new`            | `NewCard`    |
//! | `/decks/:deckId/cards/:cardId/edit`   | `EditCard`   |
//!
//! Anything else, including non-numeric ids, is `NotFound`.

use crate::types::{CardId, DeckId};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    NewDeck,
    Deck(DeckId),
    Study(DeckId),
    EditDeck(DeckId),
    NewCard(DeckId),
    EditCard { deck_id: DeckId, card_id: CardId },
    NotFound(String),
}

impl Route {
    /// Resolve a path. Never fails; unmatched paths map to `NotFound`.
    pub fn parse(path: &str) -> Self {
        let path = path.trim();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let matched = match segments.as_slice() {
            [] => Some(Self::Home),
            ["decks", "new"] => Some(Self::NewDeck),
            ["decks", id] => id.parse().ok().map(Self::Deck),
            ["decks", id, "study"] => id.parse().ok().map(Self::Study),
            ["decks", id, "edit"] => id.parse().ok().map(Self::EditDeck),
            ["decks", id, "cards", "new"] => id.parse().ok().map(Self::NewCard),
            ["decks", deck, "cards", card, "edit"] => {
                match (deck.parse::<DeckId>(), card.parse::<CardId>()) {
                    (Ok(deck_id), Ok(card_id)) => Some(Self::EditCard { deck_id, card_id }),
                    _ => None,
                }
            }
            _ => None,
        };

        matched.unwrap_or_else(|| Self::NotFound(path.to_string()))
    }

    /// Canonical path for this route.
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::NewDeck => "/decks/new".to_string(),
            Self::Deck(id) => format!("/decks/{id}"),
            Self::Study(id) => format!("/decks/{id}/study"),
            Self::EditDeck(id) => format!("/decks/{id}/edit"),
            Self::NewCard(id) => format!("/decks/{id}/cards/new"),
            Self::EditCard { deck_id, card_id } => {
                format!("/decks/{deck_id}/cards/{card_id}/edit")
            }
            Self::NotFound(path) => path.clone(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
