//! Postgres-backed feedback repository.

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, postgres::PgRow};

use crate::{
    database::Db,
    domain::feedback::{
        errors::FeedbackServiceError, models::Feedback, repository::FeedbackRepository,
    },
    ids::{CustomerUuid, OrderUuid, ProductUuid},
};

const EXISTS_QUERY: &str = include_str!("./sql/feedback_exists.sql");
const INSERT_QUERY: &str = include_str!("./sql/insert_feedback.sql");
const RATINGS_FOR_PRODUCT_QUERY: &str = include_str!("./sql/ratings_for_product.sql");

/// Feedback rows in Postgres.
///
/// Partial unique indexes enforce the one-submission rule at the storage
/// layer as well, so a race between concurrent submissions cannot slip a
/// duplicate past the service's pre-insert check.
pub struct PgFeedbackRepository {
    db: Db,
}

impl PgFeedbackRepository {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

impl FromRow<'_, PgRow> for Feedback {
    fn from_row(row: &PgRow) -> sqlx::Result<Self> {
        use sqlx::Row;

        let rating: i16 = row.try_get("rating")?;
        let created_at: SqlxTimestamp = row.try_get("created_at")?;

        Ok(Self {
            id: row.try_get::<uuid::Uuid, _>("id")?.into(),
            order: row.try_get::<uuid::Uuid, _>("order_id")?.into(),
            customer: row.try_get::<uuid::Uuid, _>("customer_id")?.into(),
            product: row
                .try_get::<Option<uuid::Uuid>, _>("product_id")?
                .map(Into::into),
            rating: u8::try_from(rating.unsigned_abs()).unwrap_or(u8::MAX),
            comment: row.try_get("comment")?,
            created_at: created_at.to_jiff(),
        })
    }
}

#[async_trait]
impl FeedbackRepository for PgFeedbackRepository {
    async fn exists(
        &self,
        order: OrderUuid,
        customer: CustomerUuid,
        product: Option<ProductUuid>,
    ) -> Result<bool, FeedbackServiceError> {
        let exists: bool = sqlx::query_scalar(EXISTS_QUERY)
            .bind(order.into_uuid())
            .bind(customer.into_uuid())
            .bind(product.map(ProductUuid::into_uuid))
            .fetch_one(self.db.pool())
            .await?;

        Ok(exists)
    }

    async fn insert(&self, feedback: Feedback) -> Result<(), FeedbackServiceError> {
        sqlx::query(INSERT_QUERY)
            .bind(feedback.id.into_uuid())
            .bind(feedback.order.into_uuid())
            .bind(feedback.customer.into_uuid())
            .bind(feedback.product.map(ProductUuid::into_uuid))
            .bind(i16::from(feedback.rating))
            .bind(&feedback.comment)
            .bind(SqlxTimestamp::from(feedback.created_at))
            .execute(self.db.pool())
            .await?;

        Ok(())
    }

    async fn ratings_for_product(
        &self,
        product: ProductUuid,
    ) -> Result<Vec<u8>, FeedbackServiceError> {
        let ratings: Vec<i16> = sqlx::query_scalar(RATINGS_FOR_PRODUCT_QUERY)
            .bind(product.into_uuid())
            .fetch_all(self.db.pool())
            .await?;

        Ok(ratings
            .into_iter()
            .map(|rating| u8::try_from(rating.unsigned_abs()).unwrap_or(u8::MAX))
            .collect())
    }
}
