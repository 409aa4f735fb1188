//! Feedback repository seam.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    domain::feedback::{errors::FeedbackServiceError, models::Feedback},
    ids::{CustomerUuid, OrderUuid, ProductUuid},
};

#[automock]
#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    /// Whether a record already exists for the uniqueness key.
    async fn exists(
        &self,
        order: OrderUuid,
        customer: CustomerUuid,
        product: Option<ProductUuid>,
    ) -> Result<bool, FeedbackServiceError>;

    /// Persists a new feedback record; duplicates are rejected.
    async fn insert(&self, feedback: Feedback) -> Result<(), FeedbackServiceError>;

    /// Every rating ever recorded against the product, for the full
    /// recompute.
    async fn ratings_for_product(
        &self,
        product: ProductUuid,
    ) -> Result<Vec<u8>, FeedbackServiceError>;
}
