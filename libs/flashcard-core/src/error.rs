//! Error types for flashcard-core.

use thiserror::Error;

/// A form was submitted with a required field left empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),
}

/// Misuse of a study session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StudyError {
    #[error("not enough cards: need at least {required}, deck has {count}")]
    NotEnoughCards { count: usize, required: usize },

    #[error("card must be flipped before advancing")]
    NotFlipped,
}

/// A path segment that is not a plain decimal id.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid id: {0:?}")]
pub struct ParseIdError(pub String);
