//! Payment authorization: validation plus a simulated gateway.
//!
//! No real gateway is integrated; only the authorization contract and its
//! failure semantics matter. Declines have no side effects, so retrying with
//! identical input is always safe.

pub mod errors;
pub mod gateway;
pub mod models;
pub mod validate;

pub use errors::{PaymentError, PaymentValidationError};
pub use gateway::{
    AuthorizationDecider, MockPaymentAuthorizer, PaymentAuthorizer, RandomDecider,
    SimulatedGateway,
};
pub use models::{AuthorizationOutcome, CardDetails, PaymentDetails, UpiDetails};
