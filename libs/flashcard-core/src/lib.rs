//! Core flashcard library shared by the client front ends.
//!
//! Provides:
//! - Shared types (Deck, Card, id newtypes, create inputs)
//! - Deck and card form validation
//! - The client-side route table
//! - The flip-through study session state machine

pub mod error;
pub mod form;
pub mod route;
pub mod study;
pub mod types;

pub use error::{ParseIdError, StudyError, ValidationError};
pub use form::{CardForm, DeckForm};
pub use route::Route;
pub use study::{Advance, EndChoice, Side, StudySession, MIN_STUDY_CARDS};
pub use types::{Card, CardId, CreateCardInput, CreateDeckInput, Deck, DeckId};
