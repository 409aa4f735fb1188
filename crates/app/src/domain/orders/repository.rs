//! Orders repository seam.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    domain::orders::{
        errors::OrdersServiceError,
        models::{Order, OrderStatus},
    },
    ids::{CustomerUuid, OrderUuid},
};

/// Storage operations the ledger is built on. Implemented by
/// [`postgres::PgOrdersRepository`](crate::domain::orders::postgres::PgOrdersRepository)
/// and [`memory::MemoryOrdersRepository`](crate::domain::orders::memory::MemoryOrdersRepository).
#[automock]
#[async_trait]
pub trait OrdersRepository: Send + Sync {
    /// Persists a new order record.
    async fn insert(&self, order: Order) -> Result<(), OrdersServiceError>;

    /// Fetches an order regardless of owner (admin reads).
    async fn find(&self, order: OrderUuid) -> Result<Order, OrdersServiceError>;

    /// Fetches an order scoped to its owner; non-owners get `NotFound`.
    async fn find_for_owner(
        &self,
        owner: CustomerUuid,
        order: OrderUuid,
    ) -> Result<Order, OrdersServiceError>;

    /// Lists an owner's orders, newest first.
    async fn list_for_owner(&self, owner: CustomerUuid)
    -> Result<Vec<Order>, OrdersServiceError>;

    /// Overwrites an order's status and returns the updated record.
    async fn update_status(
        &self,
        order: OrderUuid,
        status: OrderStatus,
    ) -> Result<Order, OrdersServiceError>;
}
