//! Flip-through study session.
//!
//! A session walks a deck's cards in order. Each card starts face up on the
//! front; it must be flipped to the back before the learner can advance.
//! Reaching the end of the deck hands control back to the caller, which
//! either restarts the session or exits it.

use crate::error::StudyError;
use crate::types::Card;

/// Fewest cards a deck needs before it can be studied.
pub const MIN_STUDY_CARDS: usize = 3;

/// Which face of the current card is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Front,
    Back,
}

impl Side {
    fn flipped(self) -> Self {
        match self {
            Self::Front => Self::Back,
            Self::Back => Self::Front,
        }
    }
}

/// Outcome of advancing from the back of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the front of the next card.
    Next,
    /// The last card was showing; the caller must restart or exit.
    EndOfDeck,
}

/// Learner's choice at the end of the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndChoice {
    Restart,
    Exit,
}

#[derive(Debug, Clone)]
pub struct StudySession {
    cards: Vec<Card>,
    index: usize,
    side: Side,
}

impl StudySession {
    /// Start a session over `cards`, or refuse if there are too few.
    pub fn start(cards: Vec<Card>) -> Result<Self, StudyError> {
        if cards.len() < MIN_STUDY_CARDS {
            return Err(StudyError::NotEnoughCards {
                count: cards.len(),
                required: MIN_STUDY_CARDS,
            });
        }
        Ok(Self {
            cards,
            index: 0,
            side: Side::Front,
        })
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Text of the face currently showing.
    pub fn visible_text(&self) -> &str {
        let card = &self.cards[self.index];
        match self.side {
            Side::Front => &card.front,
            Side::Back => &card.back,
        }
    }

    /// 1-based position label, e.g. "Card 2 of 5".
    pub fn position_label(&self) -> String {
        format!("Card {} of {}", self.index + 1, self.cards.len())
    }

    fn is_last(&self) -> bool {
        self.index + 1 == self.cards.len()
    }

    pub fn flip(&mut self) {
        self.side = self.side.flipped();
    }

    /// Advance from the back of the current card.
    ///
    /// On the last card the state is left untouched and `EndOfDeck` is
    /// returned; resolve it with [`StudySession::finish`].
    pub fn advance(&mut self) -> Result<Advance, StudyError> {
        if self.side != Side::Back {
            return Err(StudyError::NotFlipped);
        }
        if self.is_last() {
            return Ok(Advance::EndOfDeck);
        }
        self.index += 1;
        self.side = Side::Front;
        Ok(Advance::Next)
    }

    /// Resolve the end-of-deck prompt. Restarting yields the session reset
    /// to its first card; exiting consumes it.
    pub fn finish(mut self, choice: EndChoice) -> Option<Self> {
        match choice {
            EndChoice::Restart => {
                self.restart();
                Some(self)
            }
            EndChoice::Exit => None,
        }
    }

    fn restart(&mut self) {
        self.index = 0;
        self.side = Side::Front;
    }
}
