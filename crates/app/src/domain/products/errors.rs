//! Reputation storage errors.

use sqlx::Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReputationError {
    #[error("product not found")]
    NotFound,

    #[error("storage error")]
    Storage(#[source] Error),
}

impl From<Error> for ReputationError {
    fn from(error: Error) -> Self {
        match error {
            Error::RowNotFound => Self::NotFound,
            error => Self::Storage(error),
        }
    }
}
