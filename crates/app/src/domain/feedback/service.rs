//! Feedback intake.
//!
//! Submissions pass through the same gate regardless of transport: rating
//! range, order ownership, one-submission uniqueness, then persistence.
//! Product-scoped feedback additionally triggers a synchronous reputation
//! recompute over the complete rating set for that product.

use std::sync::Arc;

use async_trait::async_trait;
use canteen_core::ratings::{self, Reputation};
use jiff::Timestamp;
use mockall::automock;
use tracing::info;

use crate::{
    domain::{
        feedback::{
            errors::FeedbackServiceError,
            models::{Feedback, NewFeedback},
            repository::FeedbackRepository,
        },
        orders::{OrderLedger, errors::OrdersServiceError},
        products::{errors::ReputationError, repository::ProductReputations},
    },
    ids::{CustomerUuid, FeedbackUuid},
};

/// Accepts customer feedback.
#[automock]
#[async_trait]
pub trait FeedbackService: Send + Sync {
    /// Records one submission for an order the customer owns.
    async fn submit(
        &self,
        owner: CustomerUuid,
        new: NewFeedback,
        now: Timestamp,
    ) -> Result<Feedback, FeedbackServiceError>;
}

/// Feedback intake over a ledger, a feedback store, and the reputation port.
pub struct FeedbackIntake {
    ledger: Arc<dyn OrderLedger>,
    repository: Arc<dyn FeedbackRepository>,
    products: Arc<dyn ProductReputations>,
}

impl FeedbackIntake {
    #[must_use]
    pub fn new(
        ledger: Arc<dyn OrderLedger>,
        repository: Arc<dyn FeedbackRepository>,
        products: Arc<dyn ProductReputations>,
    ) -> Self {
        Self {
            ledger,
            repository,
            products,
        }
    }

    /// Full recompute from the captured seed and every recorded rating.
    ///
    /// Concurrent submissions race on the write, but each writer derives its
    /// value from the complete set it observed, so the last one to land is
    /// still correct for that set.
    async fn refresh_reputation(
        &self,
        product: crate::ids::ProductUuid,
        seed: Reputation,
    ) -> Result<(), FeedbackServiceError> {
        let all_ratings = self.repository.ratings_for_product(product).await?;
        let reputation = ratings::recompute(seed, &all_ratings);

        self.products
            .write_reputation(product, reputation)
            .await
            .map_err(reputation_error)?;

        info!(
            product = %product,
            average = %reputation.average,
            review_count = reputation.review_count,
            "product reputation refreshed",
        );

        Ok(())
    }
}

#[async_trait]
impl FeedbackService for FeedbackIntake {
    async fn submit(
        &self,
        owner: CustomerUuid,
        new: NewFeedback,
        now: Timestamp,
    ) -> Result<Feedback, FeedbackServiceError> {
        if !(1..=5).contains(&new.rating) {
            return Err(FeedbackServiceError::RatingOutOfRange);
        }

        // Ownership gate: an order that exists but belongs to someone else
        // is indistinguishable from one that does not exist.
        self.ledger
            .get_order(owner, new.order)
            .await
            .map_err(ledger_error)?;

        let seed = match new.product {
            Some(product) => Some(
                self.products
                    .reputation_seed(product)
                    .await
                    .map_err(reputation_error)?,
            ),
            None => None,
        };

        if self
            .repository
            .exists(new.order, owner, new.product)
            .await?
        {
            return Err(FeedbackServiceError::Duplicate);
        }

        let feedback = Feedback {
            id: FeedbackUuid::new(),
            order: new.order,
            customer: owner,
            product: new.product,
            rating: new.rating,
            comment: new.comment,
            created_at: now,
        };

        self.repository.insert(feedback.clone()).await?;

        info!(
            feedback = %feedback.id,
            order = %feedback.order,
            rating = feedback.rating,
            "feedback recorded",
        );

        if let (Some(product), Some(seed)) = (new.product, seed) {
            self.refresh_reputation(product, seed).await?;
        }

        Ok(feedback)
    }
}

fn ledger_error(error: OrdersServiceError) -> FeedbackServiceError {
    match error {
        OrdersServiceError::Storage(source) => FeedbackServiceError::Storage(source),
        _ => FeedbackServiceError::OrderNotFound,
    }
}

fn reputation_error(error: ReputationError) -> FeedbackServiceError {
    match error {
        ReputationError::NotFound => FeedbackServiceError::ProductNotFound,
        ReputationError::Storage(source) => FeedbackServiceError::Storage(source),
    }
}
