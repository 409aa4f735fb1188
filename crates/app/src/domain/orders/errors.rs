//! Orders service errors.

use sqlx::Error;
use thiserror::Error;

use crate::domain::orders::models::OrderStatus;

#[derive(Debug, Error)]
pub enum OrdersServiceError {
    /// Also returned for orders owned by someone else, so reads never leak
    /// existence to non-owners.
    #[error("order not found")]
    NotFound,

    #[error("order cannot move from {from:?} to {to:?}")]
    InvalidTransition {
        from: OrderStatus,
        to: OrderStatus,
    },

    #[error("storage error")]
    Storage(#[source] Error),
}

impl From<Error> for OrdersServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        Self::Storage(error)
    }
}
