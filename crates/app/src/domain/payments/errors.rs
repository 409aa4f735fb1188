//! Payment errors.

use thiserror::Error;

/// Stable decline code surfaced to clients.
pub const PAYMENT_DECLINED_CODE: &str = "payment_declined";

/// Rejections raised before any authorization attempt. No side effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaymentValidationError {
    #[error("card number must be at least 16 digits")]
    CardNumber,

    #[error("card expiry must be in MM/YY form")]
    CardExpiryFormat,

    #[error("card has expired")]
    CardExpired,

    #[error("CVV must be 3 or 4 digits")]
    Cvv,

    #[error("UPI id must look like localpart@handle")]
    UpiId,

    #[error("UPI display name must be at least 2 characters")]
    UpiDisplayName,

    #[error("payment details do not match the chosen method")]
    MethodMismatch,
}

#[derive(Debug, Error)]
pub enum PaymentError {
    #[error(transparent)]
    Validation(#[from] PaymentValidationError),

    /// The simulated gateway declined. Safe to retry with identical input.
    #[error("payment declined")]
    Declined,

    /// The gateway did not resolve within the bounded timeout. Fatal for
    /// this request.
    #[error("payment authorization timed out")]
    Timeout,
}

impl PaymentError {
    /// Stable machine-readable code for API responses.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "invalid_payment_details",
            Self::Declined => PAYMENT_DECLINED_CODE,
            Self::Timeout => "payment_timeout",
        }
    }
}
