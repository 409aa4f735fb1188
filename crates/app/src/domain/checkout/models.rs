//! Checkout request models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use canteen_core::discounts::CartItem;

use crate::{
    domain::orders::models::{Order, OrderItem, PaymentMethod},
    ids::ProductUuid,
};

/// One cart line as submitted by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutItem {
    pub product: ProductUuid,
    pub name: String,
    pub category: String,
    pub unit_price: Decimal,
    pub quantity: u32,
    pub image_ref: Option<String>,
}

impl CheckoutItem {
    /// View for the discount and pricing steps.
    #[must_use]
    pub fn as_cart_item(&self) -> CartItem {
        CartItem {
            name: self.name.clone(),
            category: self.category.clone(),
            unit_price: self.unit_price,
            quantity: self.quantity,
        }
    }

    /// Snapshot copy stored on the order.
    #[must_use]
    pub fn to_order_item(&self) -> OrderItem {
        OrderItem {
            product: self.product,
            name: self.name.clone(),
            unit_price: self.unit_price,
            quantity: self.quantity,
            image_ref: self.image_ref.clone(),
        }
    }
}

/// The checkout payload as `POST /orders` receives it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    pub items: Vec<CheckoutItem>,
    pub address: String,
    pub phone: String,
    pub coupon: Option<String>,
    pub payment_method: PaymentMethod,
}

/// Result of a successful payment step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentReceipt {
    /// The order the ledger just persisted.
    pub order: Order,
    /// Gateway reference; absent when payment was deferred to delivery.
    pub transaction_id: Option<String>,
}
