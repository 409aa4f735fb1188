//! Cart pricing.
//!
//! Turns line items plus a discount list into the persisted monetary fields.
//! GST is a flat 18% of the post-discount amount; there are no per-item
//! exemptions.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    discounts::{CartItem, Discount},
    money::round_money,
};

/// Flat consumption tax rate applied to the post-discount amount (18%).
pub const GST_RATE: Decimal = Decimal::from_parts(18, 0, 0, false, 2);

/// The monetary breakdown of one checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    /// Sum of `unit_price × quantity` over all items.
    pub subtotal: Decimal,
    /// Sum of all discount amounts.
    pub discount_total: Decimal,
    /// `max(0, subtotal − discount_total)`.
    pub taxable_amount: Decimal,
    /// GST on the taxable amount, rounded to two decimal places.
    pub gst: Decimal,
    /// `taxable_amount + gst`.
    pub total: Decimal,
}

/// Prices a cart against an already-computed discount list.
#[must_use]
pub fn price_cart(items: &[CartItem], discounts: &[Discount]) -> PriceBreakdown {
    let subtotal: Decimal = items.iter().map(CartItem::line_total).sum();
    let discount_total: Decimal = discounts.iter().map(|discount| discount.amount).sum();

    // Floor at zero so a pathological discount total can never drive the
    // taxable amount negative.
    let taxable_amount = (subtotal - discount_total).max(Decimal::ZERO);
    let gst = round_money(taxable_amount * GST_RATE);
    let total = taxable_amount + gst;

    PriceBreakdown {
        subtotal,
        discount_total,
        taxable_amount,
        gst,
        total,
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use crate::discounts::applicable_discounts;

    use super::*;

    fn item(name: &str, category: &str, price: i64, quantity: u32) -> CartItem {
        CartItem {
            name: name.to_string(),
            category: category.to_string(),
            unit_price: Decimal::new(price, 0),
            quantity,
        }
    }

    #[test]
    fn gst_rate_is_eighteen_percent() {
        assert_eq!(GST_RATE, Decimal::new(18, 2));
    }

    #[test]
    fn prices_the_reference_cart() {
        // Tuesday 09:00, one coffee at 200, no coupon.
        let cart = [item("Filter Coffee", "Coffee", 200, 1)];
        let at = date(2026, 8, 18).at(9, 0, 0, 0);

        let discounts = applicable_discounts(&cart, at, None);
        let breakdown = price_cart(&cart, &discounts);

        assert_eq!(breakdown.subtotal, Decimal::new(200, 0));
        assert_eq!(breakdown.discount_total, Decimal::new(50, 0));
        assert_eq!(breakdown.taxable_amount, Decimal::new(150, 0));
        assert_eq!(breakdown.gst, Decimal::new(27, 0));
        assert_eq!(breakdown.total, Decimal::new(177, 0));
    }

    #[test]
    fn total_is_taxable_plus_gst() {
        let cart = [
            item("Masala Dosa", "South Indian", 120, 2),
            item("Espresso", "Coffee", 90, 3),
        ];

        let breakdown = price_cart(&cart, &[]);

        assert_eq!(breakdown.subtotal, Decimal::new(510, 0));
        assert_eq!(breakdown.taxable_amount, Decimal::new(510, 0));
        assert_eq!(breakdown.gst, round_money(breakdown.taxable_amount * GST_RATE));
        assert_eq!(breakdown.total, breakdown.taxable_amount + breakdown.gst);
    }

    #[test]
    fn taxable_amount_floors_at_zero() {
        let cart = [item("Tea", "Beverages", 10, 1)];
        let oversized = Discount {
            name: "Oversized".to_string(),
            description: "larger than the cart".to_string(),
            amount: Decimal::new(500, 0),
            code: None,
        };

        let breakdown = price_cart(&cart, &[oversized]);

        assert_eq!(breakdown.taxable_amount, Decimal::ZERO);
        assert_eq!(breakdown.gst, Decimal::ZERO);
        assert_eq!(breakdown.total, Decimal::ZERO);
        assert_eq!(breakdown.discount_total, Decimal::new(500, 0));
    }

    #[test]
    fn gst_rounds_to_two_decimal_places() {
        // 99.99 × 0.18 = 17.9982 → 18.00
        let cart = [item("Combo", "Meals", 9_999, 1)];
        let cart = [CartItem {
            unit_price: Decimal::new(9_999, 2),
            ..cart[0].clone()
        }];

        let breakdown = price_cart(&cart, &[]);

        assert_eq!(breakdown.gst, Decimal::new(18_00, 2));
        assert_eq!(breakdown.total, Decimal::new(117_99, 2));
    }

    #[test]
    fn empty_cart_prices_to_zero() {
        let breakdown = price_cart(&[], &[]);

        assert_eq!(breakdown.subtotal, Decimal::ZERO);
        assert_eq!(breakdown.total, Decimal::ZERO);
    }
}
