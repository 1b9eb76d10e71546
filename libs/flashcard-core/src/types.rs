//! Core types for the flashcard application.

use crate::error::ParseIdError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Server-assigned deck identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeckId(pub i64);

/// Server-assigned card identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub i64);

macro_rules! id_impls {
    ($ty:ident) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        /// Plain decimal digits only. Signs and whitespace are rejected.
        impl FromStr for $ty {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(ParseIdError(s.to_string()));
                }
                s.parse().map(Self).map_err(|_| ParseIdError(s.to_string()))
            }
        }
    };
}

id_impls!(DeckId);
id_impls!(CardId);

/// A named collection of cards.
///
/// `cards` is only ever populated by the server embedding the deck's cards
/// into the response; it is never sent back on update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deck {
    pub id: DeckId,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl Deck {
    /// Number of embedded cards.
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Find an embedded card by id.
    pub fn card(&self, card_id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == card_id)
    }
}

/// A front/back text pair owned by exactly one deck.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    pub front: String,
    pub back: String,
    pub deck_id: DeckId,
}

/// Payload for creating a deck.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateDeckInput {
    pub name: String,
    pub description: String,
}

/// Payload for creating a card. The owning deck is supplied separately.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCardInput {
    pub front: String,
    pub back: String,
}
