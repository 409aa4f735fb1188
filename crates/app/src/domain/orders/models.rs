//! Order models.

use jiff::{SignedDuration, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use canteen_core::{discounts::Discount, pricing::PriceBreakdown};

use crate::ids::{CustomerUuid, OrderUuid, ProductUuid};

/// How long after creation a non-terminal order counts as ready to hand to
/// delivery. Computed server-side so client clock skew cannot move it.
pub const DELIVERY_READY_AFTER: SignedDuration = SignedDuration::from_mins(40);

/// Payment method chosen at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Card,
    Upi,
    Cash,
}

impl PaymentMethod {
    /// Stable string form, used for persistence.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::Upi => "upi",
            Self::Cash => "cash",
        }
    }

    /// Parses the stable string form.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "card" => Some(Self::Card),
            "upi" => Some(Self::Upi),
            "cash" => Some(Self::Cash),
            _ => None,
        }
    }
}

/// Order lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Paid,
    Preparing,
    OutForDelivery,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Delivered and cancelled orders never change again.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled)
    }

    /// Whether an admin may move an order from `self` to `next`.
    ///
    /// Forward progression is `pending`/`paid` → `preparing` →
    /// `out_for_delivery` → `delivered`; any non-terminal state may be
    /// cancelled.
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        match (self, next) {
            (Self::Pending | Self::Paid, Self::Preparing)
            | (Self::Preparing, Self::OutForDelivery)
            | (Self::OutForDelivery, Self::Delivered) => true,
            (current, Self::Cancelled) => !current.is_terminal(),
            _ => false,
        }
    }

    /// Stable string form, used for persistence.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Preparing => "preparing",
            Self::OutForDelivery => "out_for_delivery",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }

    /// Parses the stable string form.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "paid" => Some(Self::Paid),
            "preparing" => Some(Self::Preparing),
            "out_for_delivery" => Some(Self::OutForDelivery),
            "delivered" => Some(Self::Delivered),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }
}

/// One line of an order: a snapshot copy taken at order time, so later
/// catalog edits never alter historical orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Catalog reference the snapshot was taken from.
    pub product: ProductUuid,
    /// Name at order time.
    pub name: String,
    /// Unit price at order time.
    pub unit_price: Decimal,
    /// Quantity ordered.
    pub quantity: u32,
    /// Image reference at order time, if the product had one.
    pub image_ref: Option<String>,
}

/// Payment details recorded on a persisted order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub method: PaymentMethod,
    /// True only when a gateway captured funds. Cash orders carry `false`
    /// until collected on delivery.
    pub authorized: bool,
    /// Gateway transaction reference, absent for cash.
    pub transaction_id: Option<String>,
    /// Amount the payment covers; equals the order total.
    pub amount: Decimal,
}

/// A computed-but-unpersisted order payload.
///
/// Drafts have no id and no status; the client carries one into the payment
/// step, and only a successful authorization (or a cash checkout) turns it
/// into an [`Order`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftOrder {
    pub items: Vec<OrderItem>,
    pub address: String,
    pub phone: String,
    pub discounts: Vec<Discount>,
    pub pricing: PriceBreakdown,
    pub payment_method: PaymentMethod,
}

/// A persisted order. Created exactly once by the ledger and never deleted;
/// cancellation is a status, not a removal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderUuid,
    /// Purchasing account; immutable.
    pub owner: CustomerUuid,
    pub items: Vec<OrderItem>,
    pub address: String,
    pub phone: String,
    pub subtotal: Decimal,
    pub discount_total: Decimal,
    pub tax_amount: Decimal,
    pub total: Decimal,
    /// Audit copy of the discounts applied at checkout.
    pub discounts: Vec<Discount>,
    pub payment: PaymentRecord,
    pub status: OrderStatus,
    /// Creation timestamp; immutable.
    pub created_at: Timestamp,
}

impl Order {
    /// Whether the order has aged past [`DELIVERY_READY_AFTER`] and is still
    /// in a non-terminal state.
    #[must_use]
    pub fn delivery_ready(&self, now: Timestamp) -> bool {
        !self.status.is_terminal() && now.duration_since(self.created_at) >= DELIVERY_READY_AFTER
    }
}
