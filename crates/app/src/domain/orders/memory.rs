//! In-memory orders repository, used by tests and standalone mode.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    domain::orders::{
        errors::OrdersServiceError,
        models::{Order, OrderStatus},
        repository::OrdersRepository,
    },
    ids::{CustomerUuid, OrderUuid},
};

/// Orders held in a process-local map.
#[derive(Debug, Default)]
pub struct MemoryOrdersRepository {
    orders: RwLock<HashMap<OrderUuid, Order>>,
}

impl MemoryOrdersRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrdersRepository for MemoryOrdersRepository {
    async fn insert(&self, order: Order) -> Result<(), OrdersServiceError> {
        self.orders.write().await.insert(order.id, order);

        Ok(())
    }

    async fn find(&self, order: OrderUuid) -> Result<Order, OrdersServiceError> {
        self.orders
            .read()
            .await
            .get(&order)
            .cloned()
            .ok_or(OrdersServiceError::NotFound)
    }

    async fn find_for_owner(
        &self,
        owner: CustomerUuid,
        order: OrderUuid,
    ) -> Result<Order, OrdersServiceError> {
        self.orders
            .read()
            .await
            .get(&order)
            .filter(|found| found.owner == owner)
            .cloned()
            .ok_or(OrdersServiceError::NotFound)
    }

    async fn list_for_owner(
        &self,
        owner: CustomerUuid,
    ) -> Result<Vec<Order>, OrdersServiceError> {
        let mut orders: Vec<Order> = self
            .orders
            .read()
            .await
            .values()
            .filter(|order| order.owner == owner)
            .cloned()
            .collect();

        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(orders)
    }

    async fn update_status(
        &self,
        order: OrderUuid,
        status: OrderStatus,
    ) -> Result<Order, OrdersServiceError> {
        let mut orders = self.orders.write().await;

        let found = orders.get_mut(&order).ok_or(OrdersServiceError::NotFound)?;
        found.status = status;

        Ok(found.clone())
    }
}
