//! In-memory reputation store, used by tests and standalone mode.

use std::collections::HashMap;

use async_trait::async_trait;
use canteen_core::ratings::Reputation;
use tokio::sync::RwLock;

use crate::{
    domain::products::{errors::ReputationError, repository::ProductReputations},
    ids::ProductUuid,
};

struct ReputationRow {
    seed: Reputation,
    current: Reputation,
}

/// Per-product reputation held in a process-local map.
#[derive(Default)]
pub struct MemoryProductReputations {
    rows: RwLock<HashMap<ProductUuid, ReputationRow>>,
}

impl MemoryProductReputations {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a product with its catalogued reputation.
    pub async fn register(&self, product: ProductUuid, seed: Reputation) {
        self.rows.write().await.insert(
            product,
            ReputationRow {
                seed,
                current: seed,
            },
        );
    }

    /// The reputation as last written, for assertions.
    pub async fn current(&self, product: ProductUuid) -> Option<Reputation> {
        self.rows
            .read()
            .await
            .get(&product)
            .map(|row| row.current)
    }
}

#[async_trait]
impl ProductReputations for MemoryProductReputations {
    async fn reputation_seed(
        &self,
        product: ProductUuid,
    ) -> Result<Reputation, ReputationError> {
        self.rows
            .read()
            .await
            .get(&product)
            .map(|row| row.seed)
            .ok_or(ReputationError::NotFound)
    }

    async fn write_reputation(
        &self,
        product: ProductUuid,
        reputation: Reputation,
    ) -> Result<(), ReputationError> {
        match self.rows.write().await.get_mut(&product) {
            Some(row) => {
                row.current = reputation;
                Ok(())
            }
            None => Err(ReputationError::NotFound),
        }
    }
}
