//! In-memory feedback repository, used by tests and standalone mode.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    domain::feedback::{
        errors::FeedbackServiceError, models::Feedback, repository::FeedbackRepository,
    },
    ids::{CustomerUuid, OrderUuid, ProductUuid},
};

/// Feedback rows held in a process-local vector.
#[derive(Debug, Default)]
pub struct MemoryFeedbackRepository {
    rows: RwLock<Vec<Feedback>>,
}

impl MemoryFeedbackRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FeedbackRepository for MemoryFeedbackRepository {
    async fn exists(
        &self,
        order: OrderUuid,
        customer: CustomerUuid,
        product: Option<ProductUuid>,
    ) -> Result<bool, FeedbackServiceError> {
        Ok(self.rows.read().await.iter().any(|row| {
            row.order == order && row.customer == customer && row.product == product
        }))
    }

    async fn insert(&self, feedback: Feedback) -> Result<(), FeedbackServiceError> {
        let mut rows = self.rows.write().await;

        // Mirror the unique index a relational backend enforces.
        if rows.iter().any(|row| {
            row.order == feedback.order
                && row.customer == feedback.customer
                && row.product == feedback.product
        }) {
            return Err(FeedbackServiceError::Duplicate);
        }

        rows.push(feedback);

        Ok(())
    }

    async fn ratings_for_product(
        &self,
        product: ProductUuid,
    ) -> Result<Vec<u8>, FeedbackServiceError> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .filter(|row| row.product == Some(product))
            .map(|row| row.rating)
            .collect())
    }
}
