//! Feedback models.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::ids::{CustomerUuid, FeedbackUuid, OrderUuid, ProductUuid};

/// One customer's rating for an order, optionally scoped to a product
/// within it.
///
/// Uniqueness: at most one record per `(order, customer)` when `product` is
/// absent, and one per `(order, customer, product)` when present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub id: FeedbackUuid,
    pub order: OrderUuid,
    pub customer: CustomerUuid,
    /// Absent means whole-order feedback.
    pub product: Option<ProductUuid>,
    /// Integer rating, 1–5.
    pub rating: u8,
    pub comment: Option<String>,
    pub created_at: Timestamp,
}

/// Incoming feedback submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFeedback {
    pub order: OrderUuid,
    pub product: Option<ProductUuid>,
    pub rating: u8,
    pub comment: Option<String>,
}
