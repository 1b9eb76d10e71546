//! Deck and card form state with required-field validation.
//!
//! Only presence is checked; there are no length or format constraints.

use crate::error::ValidationError;
use crate::types::{Card, CreateCardInput, CreateDeckInput, Deck};

fn required(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        Err(ValidationError::Required(field))
    } else {
        Ok(())
    }
}

/// Fields of the create/edit deck form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeckForm {
    pub name: String,
    pub description: String,
}

impl DeckForm {
    /// Prefill from an existing deck.
    pub fn from_deck(deck: &Deck) -> Self {
        Self {
            name: deck.name.clone(),
            description: deck.description.clone(),
        }
    }

    pub fn validate(&self) -> Result<CreateDeckInput, ValidationError> {
        required("name", &self.name)?;
        required("description", &self.description)?;
        Ok(CreateDeckInput {
            name: self.name.clone(),
            description: self.description.clone(),
        })
    }

    /// Apply the validated form on top of `deck`, keeping its id and cards.
    pub fn apply_to(&self, deck: &Deck) -> Result<Deck, ValidationError> {
        let input = self.validate()?;
        Ok(Deck {
            name: input.name,
            description: input.description,
            ..deck.clone()
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Fields shared by the add-card and edit-card forms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardForm {
    pub front: String,
    pub back: String,
}

impl CardForm {
    pub fn from_card(card: &Card) -> Self {
        Self {
            front: card.front.clone(),
            back: card.back.clone(),
        }
    }

    pub fn validate(&self) -> Result<CreateCardInput, ValidationError> {
        required("front", &self.front)?;
        required("back", &self.back)?;
        Ok(CreateCardInput {
            front: self.front.clone(),
            back: self.back.clone(),
        })
    }

    /// Apply the validated form on top of `card`, keeping its id and owner.
    pub fn apply_to(&self, card: &Card) -> Result<Card, ValidationError> {
        let input = self.validate()?;
        Ok(Card {
            front: input.front,
            back: input.back,
            ..card.clone()
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
