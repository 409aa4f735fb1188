//! Orders repository backed by `PostgreSQL`.

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use rust_decimal::Decimal;
use sqlx::{FromRow, Postgres, Row, postgres::PgRow, query, query_as, types::Json};
use thiserror::Error;

use canteen_core::discounts::Discount;

use crate::{
    database::Db,
    domain::orders::{
        errors::OrdersServiceError,
        models::{Order, OrderItem, OrderStatus, PaymentMethod, PaymentRecord},
        repository::OrdersRepository,
    },
    ids::{CustomerUuid, OrderUuid},
};

const INSERT_ORDER_SQL: &str = include_str!("sql/insert_order.sql");
const GET_ORDER_SQL: &str = include_str!("sql/get_order.sql");
const GET_ORDER_FOR_OWNER_SQL: &str = include_str!("sql/get_order_for_owner.sql");
const LIST_ORDERS_FOR_OWNER_SQL: &str = include_str!("sql/list_orders_for_owner.sql");
const UPDATE_ORDER_STATUS_SQL: &str = include_str!("sql/update_order_status.sql");

/// A persisted enum value that no longer parses.
#[derive(Debug, Error)]
#[error("unrecognised {column} value {value:?}")]
pub struct UnknownVariantError {
    column: &'static str,
    value: String,
}

fn decode_error(column: &'static str, value: &str) -> sqlx::Error {
    sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(UnknownVariantError {
            column,
            value: value.to_string(),
        }),
    }
}

/// Orders stored in the `orders` table.
#[derive(Debug, Clone)]
pub struct PgOrdersRepository {
    db: Db,
}

impl PgOrdersRepository {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrdersRepository for PgOrdersRepository {
    async fn insert(&self, order: Order) -> Result<(), OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        query(INSERT_ORDER_SQL)
            .bind(order.id.into_uuid())
            .bind(order.owner.into_uuid())
            .bind(Json(&order.items))
            .bind(&order.address)
            .bind(&order.phone)
            .bind(order.subtotal)
            .bind(order.discount_total)
            .bind(order.tax_amount)
            .bind(order.total)
            .bind(Json(&order.discounts))
            .bind(order.payment.method.as_str())
            .bind(order.payment.authorized)
            .bind(order.payment.transaction_id.as_deref())
            .bind(order.payment.amount)
            .bind(order.status.as_str())
            .bind(SqlxTimestamp::from(order.created_at))
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }

    async fn find(&self, order: OrderUuid) -> Result<Order, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let found = query_as::<Postgres, Order>(GET_ORDER_SQL)
            .bind(order.into_uuid())
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(found)
    }

    async fn find_for_owner(
        &self,
        owner: CustomerUuid,
        order: OrderUuid,
    ) -> Result<Order, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let found = query_as::<Postgres, Order>(GET_ORDER_FOR_OWNER_SQL)
            .bind(order.into_uuid())
            .bind(owner.into_uuid())
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(found)
    }

    async fn list_for_owner(
        &self,
        owner: CustomerUuid,
    ) -> Result<Vec<Order>, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let orders = query_as::<Postgres, Order>(LIST_ORDERS_FOR_OWNER_SQL)
            .bind(owner.into_uuid())
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(orders)
    }

    async fn update_status(
        &self,
        order: OrderUuid,
        status: OrderStatus,
    ) -> Result<Order, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let updated = query_as::<Postgres, Order>(UPDATE_ORDER_STATUS_SQL)
            .bind(order.into_uuid())
            .bind(status.as_str())
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }
}

impl<'r> FromRow<'r, PgRow> for Order {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let items: Json<Vec<OrderItem>> = row.try_get("items")?;
        let discounts: Json<Vec<Discount>> = row.try_get("discounts")?;

        let method_raw: String = row.try_get("payment_method")?;
        let method = PaymentMethod::parse(&method_raw)
            .ok_or_else(|| decode_error("payment_method", &method_raw))?;

        let status_raw: String = row.try_get("status")?;
        let status =
            OrderStatus::parse(&status_raw).ok_or_else(|| decode_error("status", &status_raw))?;

        Ok(Self {
            id: OrderUuid::from_uuid(row.try_get("uuid")?),
            owner: CustomerUuid::from_uuid(row.try_get("owner_uuid")?),
            items: items.0,
            address: row.try_get("address")?,
            phone: row.try_get("phone")?,
            subtotal: row.try_get::<Decimal, _>("subtotal")?,
            discount_total: row.try_get::<Decimal, _>("discount_total")?,
            tax_amount: row.try_get::<Decimal, _>("tax_amount")?,
            total: row.try_get::<Decimal, _>("total")?,
            discounts: discounts.0,
            payment: PaymentRecord {
                method,
                authorized: row.try_get("payment_authorized")?,
                transaction_id: row.try_get("transaction_id")?,
                amount: row.try_get::<Decimal, _>("payment_amount")?,
            },
            status,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
