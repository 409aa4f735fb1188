//! Notification payload contract.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use canteen_core::discounts::Discount;

use crate::{
    domain::orders::models::{Order, OrderItem, PaymentMethod},
    ids::OrderUuid,
};

/// Everything a downstream channel needs to confirm a placed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationPayload {
    pub order: OrderUuid,
    pub items: Vec<OrderItem>,
    pub total: Decimal,
    pub subtotal: Decimal,
    pub discounts: Vec<Discount>,
    pub gst_amount: Decimal,
    pub address: String,
    pub phone: String,
    pub payment: PaymentMethod,
}

impl From<&Order> for NotificationPayload {
    fn from(order: &Order) -> Self {
        Self {
            order: order.id,
            items: order.items.clone(),
            total: order.total,
            subtotal: order.subtotal,
            discounts: order.discounts.clone(),
            gst_amount: order.tax_amount,
            address: order.address.clone(),
            phone: order.phone.clone(),
            payment: order.payment.method,
        }
    }
}
