//! Canonical carts and drafts used across service tests.

use canteen_core::{discounts, pricing};
use rust_decimal::Decimal;

use crate::{
    domain::{
        checkout::models::CheckoutItem,
        orders::models::{DraftOrder, PaymentMethod},
    },
    ids::ProductUuid,
    test::clocks,
};

/// One 200-rupee filter coffee, the reference cart.
#[must_use]
pub fn coffee_checkout_item() -> CheckoutItem {
    CheckoutItem {
        product: ProductUuid::new(),
        name: "Filter Coffee".into(),
        category: "Coffee".into(),
        unit_price: Decimal::from(200),
        quantity: 1,
        image_ref: Some("filter-coffee.png".into()),
    }
}

fn draft(payment_method: PaymentMethod) -> DraftOrder {
    let item = coffee_checkout_item();
    let cart = vec![item.as_cart_item()];
    let at = clocks::tuesday_nine_am();

    let discounts = discounts::applicable_discounts(&cart, at.datetime(), None);
    let pricing = pricing::price_cart(&cart, &discounts);

    DraftOrder {
        items: vec![item.to_order_item()],
        address: "12 Canteen Lane".into(),
        phone: "9876543210".into(),
        discounts,
        pricing,
        payment_method,
    }
}

/// Reference cart priced during happy hour, paid on delivery.
#[must_use]
pub fn cash_draft() -> DraftOrder {
    draft(PaymentMethod::Cash)
}

/// Reference cart priced during happy hour, paid by card.
#[must_use]
pub fn card_draft() -> DraftOrder {
    draft(PaymentMethod::Card)
}
