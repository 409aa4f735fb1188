//! Checkout service.

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use jiff::Zoned;
use mockall::automock;
use tokio::time::timeout;
use tracing::warn;

use canteen_core::{discounts::applicable_discounts, pricing::price_cart};

use crate::{
    domain::{
        checkout::{
            errors::CheckoutError,
            models::{CheckoutItem, CheckoutRequest, PaymentReceipt},
        },
        orders::{
            models::{DraftOrder, Order},
            service::OrderLedger,
        },
        payments::{
            errors::PaymentError,
            gateway::PaymentAuthorizer,
            models::{AuthorizationOutcome, PaymentDetails},
        },
    },
    ids::CustomerUuid,
};

/// Upper bound on one authorization round-trip. Expiry is fatal for the
/// request; no order is created.
pub const AUTHORIZATION_TIMEOUT: Duration = Duration::from_secs(10);

/// Drives a cart through discounts, pricing, payment, and the ledger.
///
/// There is no idempotency key: a client that submits the same draft twice
/// produces two distinct paid orders.
#[automock]
#[async_trait]
pub trait CheckoutService: Send + Sync {
    /// Validates a checkout request and prices it into an unpersisted draft.
    async fn draft_order(
        &self,
        request: CheckoutRequest,
        now: Zoned,
    ) -> Result<DraftOrder, CheckoutError>;

    /// Drafts and immediately persists a cash order.
    async fn place_cash_order(
        &self,
        owner: CustomerUuid,
        request: CheckoutRequest,
        now: Zoned,
    ) -> Result<Order, CheckoutError>;

    /// Authorizes payment for a draft; persists the order only on success.
    async fn process_payment(
        &self,
        owner: CustomerUuid,
        draft: DraftOrder,
        details: PaymentDetails,
        now: Zoned,
    ) -> Result<PaymentReceipt, CheckoutError>;
}

/// [`CheckoutService`] over the ledger and the payment authorizer.
pub struct Checkout {
    ledger: Arc<dyn OrderLedger>,
    authorizer: Arc<dyn PaymentAuthorizer>,
    authorization_timeout: Duration,
}

impl Checkout {
    #[must_use]
    pub fn new(ledger: Arc<dyn OrderLedger>, authorizer: Arc<dyn PaymentAuthorizer>) -> Self {
        Self::with_timeout(ledger, authorizer, AUTHORIZATION_TIMEOUT)
    }

    #[must_use]
    pub fn with_timeout(
        ledger: Arc<dyn OrderLedger>,
        authorizer: Arc<dyn PaymentAuthorizer>,
        authorization_timeout: Duration,
    ) -> Self {
        Self {
            ledger,
            authorizer,
            authorization_timeout,
        }
    }

    fn validated_draft(request: CheckoutRequest, now: &Zoned) -> Result<DraftOrder, CheckoutError> {
        if request.items.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        if request.address.trim().is_empty() {
            return Err(CheckoutError::MissingAddress);
        }

        if request.phone.trim().is_empty() {
            return Err(CheckoutError::MissingPhone);
        }

        let coupon = match request.coupon.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(code) if canteen_core::discounts::known_coupon(code) => Some(code),
            Some(code) => return Err(CheckoutError::UnknownCoupon(code.to_string())),
        };

        let cart: Vec<_> = request.items.iter().map(CheckoutItem::as_cart_item).collect();
        let discounts = applicable_discounts(&cart, now.datetime(), coupon);
        let pricing = price_cart(&cart, &discounts);

        Ok(DraftOrder {
            items: request.items.iter().map(CheckoutItem::to_order_item).collect(),
            address: request.address.trim().to_string(),
            phone: request.phone.trim().to_string(),
            discounts,
            pricing,
            payment_method: request.payment_method,
        })
    }
}

#[async_trait]
impl CheckoutService for Checkout {
    async fn draft_order(
        &self,
        request: CheckoutRequest,
        now: Zoned,
    ) -> Result<DraftOrder, CheckoutError> {
        Self::validated_draft(request, &now)
    }

    async fn place_cash_order(
        &self,
        owner: CustomerUuid,
        request: CheckoutRequest,
        now: Zoned,
    ) -> Result<Order, CheckoutError> {
        let draft = Self::validated_draft(request, &now)?;

        let order = self.ledger.create_cash(owner, draft, now.timestamp()).await?;

        Ok(order)
    }

    async fn process_payment(
        &self,
        owner: CustomerUuid,
        draft: DraftOrder,
        details: PaymentDetails,
        now: Zoned,
    ) -> Result<PaymentReceipt, CheckoutError> {
        if details.method() != draft.payment_method {
            return Err(PaymentError::from(
                crate::domain::payments::errors::PaymentValidationError::MethodMismatch,
            )
            .into());
        }

        let attempt = self
            .authorizer
            .authorize(draft.pricing.total, &details, now.date());

        let outcome = match timeout(self.authorization_timeout, attempt).await {
            Ok(resolved) => resolved?,
            Err(_elapsed) => {
                warn!("payment authorization exceeded its timeout");

                return Err(PaymentError::Timeout.into());
            }
        };

        match outcome {
            AuthorizationOutcome::Captured { transaction_id } => {
                let order = self
                    .ledger
                    .create_paid(owner, draft, transaction_id.clone(), now.timestamp())
                    .await?;

                Ok(PaymentReceipt {
                    order,
                    transaction_id: Some(transaction_id),
                })
            }
            AuthorizationOutcome::Deferred => {
                let order = self.ledger.create_cash(owner, draft, now.timestamp()).await?;

                Ok(PaymentReceipt {
                    order,
                    transaction_id: None,
                })
            }
        }
    }
}
