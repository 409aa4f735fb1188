//! Simulated payment gateway.

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use jiff::civil::Date;
use mockall::automock;
use rand::Rng;
use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use crate::domain::payments::{
    errors::PaymentError,
    models::{AuthorizationOutcome, PaymentDetails},
    validate::validate,
};

/// Artificial latency standing in for the round-trip to a real gateway.
/// Scoped to the single in-flight call; other requests are never blocked.
pub const SIMULATED_LATENCY: Duration = Duration::from_millis(1200);

/// Decides whether a simulated authorization attempt succeeds.
///
/// The decision is a seam rather than an inline random call so tests can
/// force either branch deterministically.
pub trait AuthorizationDecider: Send + Sync {
    fn approve(&self) -> bool;
}

/// Approves a fixed fraction of attempts at random.
#[derive(Debug, Clone)]
pub struct RandomDecider {
    success_rate: f64,
}

impl RandomDecider {
    /// Observed gateway behavior: nine in ten attempts succeed.
    pub const DEFAULT_SUCCESS_RATE: f64 = 0.9;

    #[must_use]
    pub fn new(success_rate: f64) -> Self {
        Self { success_rate }
    }
}

impl Default for RandomDecider {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SUCCESS_RATE)
    }
}

impl AuthorizationDecider for RandomDecider {
    fn approve(&self) -> bool {
        rand::thread_rng().gen_bool(self.success_rate)
    }
}

/// The authorization contract the checkout pipeline depends on.
#[automock]
#[async_trait]
pub trait PaymentAuthorizer: Send + Sync {
    /// Validates the details, then resolves the attempt.
    ///
    /// # Errors
    ///
    /// - [`PaymentError::Validation`] for malformed details, before any
    ///   authorization is attempted.
    /// - [`PaymentError::Declined`] when the gateway declines.
    async fn authorize(
        &self,
        amount: Decimal,
        details: &PaymentDetails,
        today: Date,
    ) -> Result<AuthorizationOutcome, PaymentError>;
}

/// Gateway stand-in: validates, waits out the simulated latency, then asks
/// the decider.
pub struct SimulatedGateway {
    decider: Arc<dyn AuthorizationDecider>,
    latency: Duration,
}

impl SimulatedGateway {
    #[must_use]
    pub fn new(decider: Arc<dyn AuthorizationDecider>, latency: Duration) -> Self {
        Self { decider, latency }
    }

    /// Production wiring: random decider at the default rate, full latency.
    #[must_use]
    pub fn with_decider(decider: Arc<dyn AuthorizationDecider>) -> Self {
        Self::new(decider, SIMULATED_LATENCY)
    }
}

#[async_trait]
impl PaymentAuthorizer for SimulatedGateway {
    async fn authorize(
        &self,
        amount: Decimal,
        details: &PaymentDetails,
        today: Date,
    ) -> Result<AuthorizationOutcome, PaymentError> {
        validate(details, today)?;

        // Cash is deferred payment: the call succeeds without capturing
        // anything, and without touching the gateway.
        if matches!(details, PaymentDetails::Cash) {
            return Ok(AuthorizationOutcome::Deferred);
        }

        debug!(%amount, method = ?details.method(), "authorizing payment");

        tokio::time::sleep(self.latency).await;

        if self.decider.approve() {
            Ok(AuthorizationOutcome::Captured {
                transaction_id: new_transaction_id(),
            })
        } else {
            Err(PaymentError::Declined)
        }
    }
}

fn new_transaction_id() -> String {
    format!("TXN-{}", Uuid::new_v4().simple())
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};

    use jiff::civil::date;
    use testresult::TestResult;

    use crate::domain::payments::models::{CardDetails, UpiDetails};

    use super::*;

    /// Fixed decision that records whether it was consulted.
    struct FixedDecider {
        approve: bool,
        consulted: AtomicBool,
    }

    impl FixedDecider {
        fn new(approve: bool) -> Arc<Self> {
            Arc::new(Self {
                approve,
                consulted: AtomicBool::new(false),
            })
        }
    }

    impl AuthorizationDecider for FixedDecider {
        fn approve(&self) -> bool {
            self.consulted.store(true, Ordering::SeqCst);
            self.approve
        }
    }

    fn gateway(decider: Arc<FixedDecider>) -> SimulatedGateway {
        SimulatedGateway::new(decider, Duration::ZERO)
    }

    fn valid_card() -> PaymentDetails {
        PaymentDetails::Card(CardDetails {
            number: "4111111111111111".to_string(),
            expiry: "12/27".to_string(),
            cvv: "123".to_string(),
        })
    }

    fn today() -> Date {
        date(2026, 8, 24)
    }

    #[tokio::test]
    async fn approved_card_is_captured_with_a_transaction_id() -> TestResult {
        let outcome = gateway(FixedDecider::new(true))
            .authorize(Decimal::new(177, 0), &valid_card(), today())
            .await?;

        let AuthorizationOutcome::Captured { transaction_id } = outcome else {
            panic!("expected a capture, got {outcome:?}");
        };

        assert!(
            transaction_id.starts_with("TXN-"),
            "unexpected transaction id {transaction_id:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn declined_attempt_surfaces_the_stable_code() {
        let result = gateway(FixedDecider::new(false))
            .authorize(Decimal::new(177, 0), &valid_card(), today())
            .await;

        let Err(error) = result else {
            panic!("expected a decline, got {result:?}");
        };

        assert!(matches!(error, PaymentError::Declined));
        assert_eq!(error.code(), "payment_declined");
    }

    #[tokio::test]
    async fn invalid_details_never_reach_the_decider() {
        let decider = FixedDecider::new(true);

        let expired = PaymentDetails::Card(CardDetails {
            number: "4111111111111111".to_string(),
            expiry: "01/20".to_string(),
            cvv: "123".to_string(),
        });

        let result = gateway(decider.clone())
            .authorize(Decimal::new(100, 0), &expired, today())
            .await;

        assert!(
            matches!(result, Err(PaymentError::Validation(_))),
            "expected a validation error, got {result:?}"
        );
        assert!(
            !decider.consulted.load(Ordering::SeqCst),
            "decider must not be consulted for invalid input"
        );
    }

    #[tokio::test]
    async fn cash_resolves_deferred_without_the_gateway() -> TestResult {
        let decider = FixedDecider::new(false);

        let outcome = gateway(decider.clone())
            .authorize(Decimal::new(50, 0), &PaymentDetails::Cash, today())
            .await?;

        assert_eq!(outcome, AuthorizationOutcome::Deferred);
        assert!(
            !decider.consulted.load(Ordering::SeqCst),
            "cash must bypass the decider"
        );

        Ok(())
    }

    #[tokio::test]
    async fn upi_attempts_are_validated_first() {
        let bad_upi = PaymentDetails::Upi(UpiDetails {
            id: "not-a-vpa".to_string(),
            display_name: "Asha K".to_string(),
        });

        let result = gateway(FixedDecider::new(true))
            .authorize(Decimal::new(100, 0), &bad_upi, today())
            .await;

        assert!(matches!(result, Err(PaymentError::Validation(_))));
    }
}
