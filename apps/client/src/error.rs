//! Client error types.

use thiserror::Error;

use crate::api::ApiError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, Error>;
