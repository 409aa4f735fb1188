//! Discount selection.
//!
//! Discounts are computed against the original cart subtotal and summed by
//! the pricing step; overlapping rules deliberately do not compound. A cart
//! full of espresso bought with a student coupon during happy hour receives
//! both reductions, each measured off the undiscounted prices.

use jiff::civil::{DateTime, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The only coupon code currently honoured, matched case-insensitively.
pub const STUDENT_COUPON: &str = "STUDENT20";

/// Category granting happy-hour eligibility outright.
const COFFEE_CATEGORY: &str = "Coffee";

/// Name fragments that qualify an item for happy hour when its category is
/// not `Coffee`. Kept alongside the category check because catalog data has
/// historically been patchy about categorisation.
const COFFEE_KEYWORDS: [&str; 6] = [
    "coffee",
    "espresso",
    "latte",
    "cappuccino",
    "mocha",
    "americano",
];

/// Happy hour runs on weekday mornings, hours `[8, 10)` local time.
const HAPPY_HOUR_START: i8 = 8;
const HAPPY_HOUR_END: i8 = 10;

/// One cart line as the discount and pricing steps see it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Display name, also used for keyword-based coffee detection.
    pub name: String,
    /// Catalog category.
    pub category: String,
    /// Unit price.
    pub unit_price: Decimal,
    /// Quantity ordered.
    pub quantity: u32,
}

impl CartItem {
    /// Price multiplied by quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// A single applied reduction. Transient: orders persist only the resulting
/// totals plus an audit copy of these records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discount {
    /// Human-readable name, e.g. `Happy Hour Discount`.
    pub name: String,
    /// Longer description for receipts.
    pub description: String,
    /// Amount taken off the cart, in the cart currency.
    pub amount: Decimal,
    /// Coupon code that produced this discount, when one did.
    pub code: Option<String>,
}

/// Whether a supplied coupon code is one the engine recognises.
///
/// Unknown codes produce no discount; callers use this to surface a
/// validation message instead of silently charging full price.
#[must_use]
pub fn known_coupon(code: &str) -> bool {
    code.trim().eq_ignore_ascii_case(STUDENT_COUPON)
}

/// Computes every discount applicable to `items` at wall-clock time `at`.
///
/// Rules are independent: each is measured against the original subtotal and
/// the results are later summed, never compounded.
#[must_use]
pub fn applicable_discounts(
    items: &[CartItem],
    at: DateTime,
    coupon: Option<&str>,
) -> Vec<Discount> {
    let mut discounts = Vec::new();

    if let Some(happy_hour) = happy_hour_discount(items, at) {
        discounts.push(happy_hour);
    }

    if let Some(student) = student_discount(items, coupon) {
        discounts.push(student);
    }

    discounts
}

/// 25% off coffee items on weekday mornings.
fn happy_hour_discount(items: &[CartItem], at: DateTime) -> Option<Discount> {
    if !happy_hour_active(at) {
        return None;
    }

    let qualifying: Decimal = items
        .iter()
        .filter(|item| is_coffee(item))
        .map(CartItem::line_total)
        .sum();

    if qualifying == Decimal::ZERO {
        return None;
    }

    Some(Discount {
        name: "Happy Hour Discount".to_string(),
        description: "25% off coffee on weekday mornings (8-10 AM)".to_string(),
        amount: qualifying * Decimal::new(25, 2),
        code: None,
    })
}

/// 20% off the whole cart for a valid student coupon.
fn student_discount(items: &[CartItem], coupon: Option<&str>) -> Option<Discount> {
    let code = coupon?;

    if !known_coupon(code) {
        return None;
    }

    let subtotal: Decimal = items.iter().map(CartItem::line_total).sum();

    Some(Discount {
        name: "Student Discount".to_string(),
        description: "20% off the full order with a student coupon".to_string(),
        amount: subtotal * Decimal::new(20, 2),
        code: Some(STUDENT_COUPON.to_string()),
    })
}

fn happy_hour_active(at: DateTime) -> bool {
    let weekday = matches!(
        at.weekday(),
        Weekday::Monday
            | Weekday::Tuesday
            | Weekday::Wednesday
            | Weekday::Thursday
            | Weekday::Friday
    );

    weekday && (HAPPY_HOUR_START..HAPPY_HOUR_END).contains(&at.hour())
}

fn is_coffee(item: &CartItem) -> bool {
    if item.category == COFFEE_CATEGORY {
        return true;
    }

    let name = item.name.to_lowercase();

    COFFEE_KEYWORDS
        .iter()
        .any(|keyword| name.contains(keyword))
}
