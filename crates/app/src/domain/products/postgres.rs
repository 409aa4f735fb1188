//! Postgres-backed reputation store.

use async_trait::async_trait;
use canteen_core::ratings::Reputation;
use rust_decimal::Decimal;
use sqlx::{FromRow, postgres::PgRow};

use crate::{
    database::Db,
    domain::products::{errors::ReputationError, repository::ProductReputations},
    ids::ProductUuid,
};

const REPUTATION_SEED_QUERY: &str = include_str!("./sql/reputation_seed.sql");
const WRITE_REPUTATION_QUERY: &str = include_str!("./sql/write_reputation.sql");

/// Reputation columns on the products table.
pub struct PgProductReputations {
    db: Db,
}

impl PgProductReputations {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

struct ReputationRow(Reputation);

impl FromRow<'_, PgRow> for ReputationRow {
    fn from_row(row: &PgRow) -> sqlx::Result<Self> {
        use sqlx::Row;

        let average: Decimal = row.try_get("average")?;
        let review_count: i64 = row.try_get("review_count")?;

        Ok(Self(Reputation {
            average,
            review_count: review_count.unsigned_abs(),
        }))
    }
}

#[async_trait]
impl ProductReputations for PgProductReputations {
    async fn reputation_seed(
        &self,
        product: ProductUuid,
    ) -> Result<Reputation, ReputationError> {
        let row: ReputationRow = sqlx::query_as(REPUTATION_SEED_QUERY)
            .bind(product.into_uuid())
            .fetch_one(self.db.pool())
            .await?;

        Ok(row.0)
    }

    async fn write_reputation(
        &self,
        product: ProductUuid,
        reputation: Reputation,
    ) -> Result<(), ReputationError> {
        let result = sqlx::query(WRITE_REPUTATION_QUERY)
            .bind(product.into_uuid())
            .bind(reputation.average)
            .bind(i64::try_from(reputation.review_count).unwrap_or(i64::MAX))
            .execute(self.db.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(ReputationError::NotFound);
        }

        Ok(())
    }
}
