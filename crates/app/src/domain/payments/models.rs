//! Payment input and outcome models.

use serde::{Deserialize, Serialize};

use crate::domain::orders::models::PaymentMethod;

/// Card input as submitted at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDetails {
    /// Card number; spaces and dashes are tolerated.
    pub number: String,
    /// Expiry in `MM/YY` form.
    pub expiry: String,
    /// Card verification value, 3 or 4 digits.
    pub cvv: String,
}

/// UPI input as submitted at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpiDetails {
    /// Virtual payment address, `localpart@handle`.
    pub id: String,
    /// Account display name.
    pub display_name: String,
}

/// Method-specific payment input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum PaymentDetails {
    Card(CardDetails),
    Upi(UpiDetails),
    Cash,
}

impl PaymentDetails {
    /// The method these details belong to.
    #[must_use]
    pub const fn method(&self) -> PaymentMethod {
        match self {
            Self::Card(_) => PaymentMethod::Card,
            Self::Upi(_) => PaymentMethod::Upi,
            Self::Cash => PaymentMethod::Cash,
        }
    }
}

/// A successful resolution from the authorizer.
///
/// `Deferred` is deliberately not a capture: a cash checkout "succeeds" but
/// the resulting order must still report its payment as unauthorized until
/// collection on delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorizationOutcome {
    /// Funds captured by the gateway.
    Captured {
        /// Gateway transaction reference.
        transaction_id: String,
    },
    /// Cash on delivery; nothing captured, no transaction id.
    Deferred,
}
