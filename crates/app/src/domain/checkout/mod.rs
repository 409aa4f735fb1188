//! Checkout orchestration: discounts, pricing, payment, persistence.

pub mod errors;
pub mod models;
pub mod service;

pub use errors::CheckoutError;
pub use models::{CheckoutItem, CheckoutRequest, PaymentReceipt};
pub use service::{Checkout, CheckoutService, MockCheckoutService};
