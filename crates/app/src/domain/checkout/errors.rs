//! Checkout errors.

use thiserror::Error;

use crate::domain::{orders::errors::OrdersServiceError, payments::errors::PaymentError};

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("order must contain at least one item")]
    EmptyCart,

    #[error("delivery address is required")]
    MissingAddress,

    #[error("contact phone is required")]
    MissingPhone,

    #[error("unrecognised coupon code {0:?}")]
    UnknownCoupon(String),

    #[error(transparent)]
    Payment(#[from] PaymentError),

    #[error(transparent)]
    Orders(#[from] OrdersServiceError),
}
