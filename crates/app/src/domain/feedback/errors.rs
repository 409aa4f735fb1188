//! Feedback service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedbackServiceError {
    #[error("rating must be an integer between 1 and 5")]
    RatingOutOfRange,

    /// The original feedback stays untouched.
    #[error("feedback already submitted for this order")]
    Duplicate,

    /// Also covers orders owned by someone else.
    #[error("order not found")]
    OrderNotFound,

    #[error("product not found")]
    ProductNotFound,

    #[error("storage error")]
    Storage(#[source] Error),
}

impl From<Error> for FeedbackServiceError {
    fn from(error: Error) -> Self {
        // A unique violation means a concurrent submission won the race;
        // report it exactly like the pre-insert check would have.
        if let Some(ErrorKind::UniqueViolation) = error.as_database_error().map(DatabaseError::kind)
        {
            return Self::Duplicate;
        }

        Self::Storage(error)
    }
}
