//! Reputation storage seam.

use async_trait::async_trait;
use canteen_core::ratings::Reputation;
use mockall::automock;

use crate::{domain::products::errors::ReputationError, ids::ProductUuid};

/// Read and write access to a product's displayed reputation.
///
/// The stored average and count act as the seed the catalogue shipped
/// with; recomputes blend recorded ratings on top of it.
#[automock]
#[async_trait]
pub trait ProductReputations: Send + Sync {
    /// The product's seed reputation as originally catalogued.
    async fn reputation_seed(&self, product: ProductUuid)
    -> Result<Reputation, ReputationError>;

    /// Replaces the product's displayed reputation.
    async fn write_reputation(
        &self,
        product: ProductUuid,
        reputation: Reputation,
    ) -> Result<(), ReputationError>;
}
