//! Order ledger service.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::info;

use crate::{
    domain::orders::{
        errors::OrdersServiceError,
        models::{DraftOrder, Order, OrderStatus, PaymentRecord},
        repository::OrdersRepository,
    },
    ids::{CustomerUuid, OrderUuid},
};

/// The persistence and lifecycle-state authority for orders.
///
/// Creation happens exactly once per order: immediately for cash, or only
/// after a successful authorization for card/UPI. A declined authorization
/// creates nothing.
#[automock]
#[async_trait]
pub trait OrderLedger: Send + Sync {
    /// Persists a cash (collect-on-delivery) order: status `pending`,
    /// payment not authorized, payment amount equal to the order total.
    async fn create_cash(
        &self,
        owner: CustomerUuid,
        draft: DraftOrder,
        now: Timestamp,
    ) -> Result<Order, OrdersServiceError>;

    /// Persists an order whose payment a gateway just captured: status
    /// `paid`, payment authorized, transaction id recorded.
    async fn create_paid(
        &self,
        owner: CustomerUuid,
        draft: DraftOrder,
        transaction_id: String,
        now: Timestamp,
    ) -> Result<Order, OrdersServiceError>;

    /// Owner-scoped read; non-owners get `NotFound`.
    async fn get_order(
        &self,
        owner: CustomerUuid,
        order: OrderUuid,
    ) -> Result<Order, OrdersServiceError>;

    /// Owner-scoped list, newest first.
    async fn list_orders(&self, owner: CustomerUuid) -> Result<Vec<Order>, OrdersServiceError>;

    /// Admin read, unscoped.
    async fn get_any_order(&self, order: OrderUuid) -> Result<Order, OrdersServiceError>;

    /// Admin-scoped status transition, validated against the state machine.
    async fn set_status(
        &self,
        order: OrderUuid,
        status: OrderStatus,
    ) -> Result<Order, OrdersServiceError>;
}

/// [`OrderLedger`] over an [`OrdersRepository`].
pub struct LedgerService {
    repository: Arc<dyn OrdersRepository>,
}

impl LedgerService {
    #[must_use]
    pub fn new(repository: Arc<dyn OrdersRepository>) -> Self {
        Self { repository }
    }

    fn order_from_draft(
        owner: CustomerUuid,
        draft: DraftOrder,
        payment: PaymentRecord,
        status: OrderStatus,
        created_at: Timestamp,
    ) -> Order {
        Order {
            id: OrderUuid::new(),
            owner,
            items: draft.items,
            address: draft.address,
            phone: draft.phone,
            subtotal: draft.pricing.subtotal,
            discount_total: draft.pricing.discount_total,
            tax_amount: draft.pricing.gst,
            total: draft.pricing.total,
            discounts: draft.discounts,
            payment,
            status,
            created_at,
        }
    }
}

#[async_trait]
impl OrderLedger for LedgerService {
    async fn create_cash(
        &self,
        owner: CustomerUuid,
        draft: DraftOrder,
        now: Timestamp,
    ) -> Result<Order, OrdersServiceError> {
        let payment = PaymentRecord {
            method: draft.payment_method,
            authorized: false,
            transaction_id: None,
            amount: draft.pricing.total,
        };

        let order = Self::order_from_draft(owner, draft, payment, OrderStatus::Pending, now);

        self.repository.insert(order.clone()).await?;

        info!(order = %order.id, "created cash order");

        Ok(order)
    }

    async fn create_paid(
        &self,
        owner: CustomerUuid,
        draft: DraftOrder,
        transaction_id: String,
        now: Timestamp,
    ) -> Result<Order, OrdersServiceError> {
        let payment = PaymentRecord {
            method: draft.payment_method,
            authorized: true,
            transaction_id: Some(transaction_id),
            amount: draft.pricing.total,
        };

        let order = Self::order_from_draft(owner, draft, payment, OrderStatus::Paid, now);

        self.repository.insert(order.clone()).await?;

        info!(order = %order.id, "created paid order");

        Ok(order)
    }

    async fn get_order(
        &self,
        owner: CustomerUuid,
        order: OrderUuid,
    ) -> Result<Order, OrdersServiceError> {
        self.repository.find_for_owner(owner, order).await
    }

    async fn list_orders(&self, owner: CustomerUuid) -> Result<Vec<Order>, OrdersServiceError> {
        self.repository.list_for_owner(owner).await
    }

    async fn get_any_order(&self, order: OrderUuid) -> Result<Order, OrdersServiceError> {
        self.repository.find(order).await
    }

    async fn set_status(
        &self,
        order: OrderUuid,
        status: OrderStatus,
    ) -> Result<Order, OrdersServiceError> {
        let current = self.repository.find(order).await?;

        if !current.status.can_transition_to(status) {
            return Err(OrdersServiceError::InvalidTransition {
                from: current.status,
                to: status,
            });
        }

        let updated = self.repository.update_status(order, status).await?;

        info!(order = %order, from = ?current.status, to = ?status, "order status changed");

        Ok(updated)
    }
}
