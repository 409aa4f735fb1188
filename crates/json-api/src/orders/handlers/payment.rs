//! Process Payment Handler
//!
//! Takes the draft produced at checkout together with the payment details,
//! and persists an order only when authorization succeeds. Declines carry a
//! stable machine-readable code so clients can branch without string
//! matching.

use std::sync::Arc;

use jiff::Zoned;
use salvo::prelude::*;
use serde::{Deserialize, Serialize};

use canteen_app::domain::{
    checkout::CheckoutError,
    orders::models::{DraftOrder, Order},
    payments::{PaymentDetails, errors::PaymentError},
};

use crate::{extensions::*, orders::errors::checkout_into_status_error, state::State};

/// Process Payment Request
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ProcessPaymentRequest {
    /// The draft produced by `POST /orders`.
    pub draft: DraftOrder,
    /// Payment instrument details; must match the draft's method.
    pub details: PaymentDetails,
}

/// Payment Succeeded Response
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct PaymentSucceededResponse {
    pub success: bool,
    /// Gateway reference; absent when payment is collected on delivery.
    pub transaction_id: Option<String>,
    pub order: Order,
}

/// Payment Failed Response
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct PaymentFailedResponse {
    pub success: bool,
    pub error: String,
    /// Stable decline code, `payment_declined`.
    pub code: String,
}

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let principal = depot.principal_or_401()?;

    let request: ProcessPaymentRequest = req
        .parse_json()
        .await
        .map_err(|_invalid| StatusError::bad_request().brief("Malformed payment payload"))?;

    let receipt = state
        .app
        .checkout
        .process_payment(principal.customer, request.draft, request.details, Zoned::now())
        .await;

    match receipt {
        Ok(receipt) => {
            res.render(Json(PaymentSucceededResponse {
                success: true,
                transaction_id: receipt.transaction_id,
                order: receipt.order,
            }));
        }
        Err(CheckoutError::Payment(declined @ PaymentError::Declined)) => {
            res.status_code(StatusCode::PAYMENT_REQUIRED);
            res.render(Json(PaymentFailedResponse {
                success: false,
                error: "Payment was declined by the gateway".to_string(),
                code: declined.code().to_string(),
            }));
        }
        Err(error) => return Err(checkout_into_status_error(error)),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use canteen_app::domain::{
        checkout::{MockCheckoutService, models::PaymentReceipt},
        orders::models::{OrderStatus, PaymentMethod},
        payments::errors::PaymentValidationError,
    };

    use crate::test_helpers::{TEST_CUSTOMER, checkout_service, persisted_order, priced_draft};

    use super::*;

    fn make_service(checkout: MockCheckoutService) -> Service {
        checkout_service(checkout, Router::with_path("process-payment").post(handler))
    }

    fn card_details() -> serde_json::Value {
        json!({
            "method": "card",
            "number": "4111 1111 1111 1111",
            "expiry": "12/27",
            "cvv": "123",
        })
    }

    #[tokio::test]
    async fn captured_payment_returns_the_paid_order() -> TestResult {
        let order = persisted_order(
            PaymentMethod::Card,
            OrderStatus::Paid,
            Some("TXN-fixed".to_string()),
        );
        let order_id = order.id;

        let mut checkout = MockCheckoutService::new();

        checkout
            .expect_process_payment()
            .once()
            .withf(|owner, draft, details, _now| {
                *owner == TEST_CUSTOMER
                    && draft.payment_method == PaymentMethod::Card
                    && matches!(details, PaymentDetails::Card(_))
            })
            .return_once(move |_, _, _, _| {
                Ok(PaymentReceipt {
                    order,
                    transaction_id: Some("TXN-fixed".to_string()),
                })
            });
        checkout.expect_draft_order().never();
        checkout.expect_place_cash_order().never();

        let mut res = TestClient::post("http://example.com/process-payment")
            .json(&json!({
                "draft": priced_draft(PaymentMethod::Card),
                "details": card_details(),
            }))
            .send(&make_service(checkout))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: PaymentSucceededResponse = res.take_json().await?;

        assert!(body.success, "capture must report success");
        assert_eq!(body.transaction_id.as_deref(), Some("TXN-fixed"));
        assert_eq!(body.order.id, order_id);
        assert_eq!(body.order.status, OrderStatus::Paid);

        Ok(())
    }

    #[tokio::test]
    async fn declined_payment_returns_402_with_the_stable_code() -> TestResult {
        let mut checkout = MockCheckoutService::new();

        checkout
            .expect_process_payment()
            .once()
            .return_once(|_, _, _, _| Err(CheckoutError::Payment(PaymentError::Declined)));
        checkout.expect_draft_order().never();
        checkout.expect_place_cash_order().never();

        let mut res = TestClient::post("http://example.com/process-payment")
            .json(&json!({
                "draft": priced_draft(PaymentMethod::Card),
                "details": card_details(),
            }))
            .send(&make_service(checkout))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::PAYMENT_REQUIRED));

        let body: PaymentFailedResponse = res.take_json().await?;

        assert!(!body.success, "decline must report failure");
        assert_eq!(body.code, "payment_declined");

        Ok(())
    }

    #[tokio::test]
    async fn mismatched_details_return_400() -> TestResult {
        let mut checkout = MockCheckoutService::new();

        checkout.expect_process_payment().once().return_once(|_, _, _, _| {
            Err(CheckoutError::Payment(PaymentError::Validation(
                PaymentValidationError::MethodMismatch,
            )))
        });
        checkout.expect_draft_order().never();
        checkout.expect_place_cash_order().never();

        let res = TestClient::post("http://example.com/process-payment")
            .json(&json!({
                "draft": priced_draft(PaymentMethod::Upi),
                "details": card_details(),
            }))
            .send(&make_service(checkout))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn deferred_cash_payment_reports_no_transaction_id() -> TestResult {
        let order = persisted_order(PaymentMethod::Cash, OrderStatus::Pending, None);

        let mut checkout = MockCheckoutService::new();

        checkout
            .expect_process_payment()
            .once()
            .return_once(move |_, _, _, _| {
                Ok(PaymentReceipt {
                    order,
                    transaction_id: None,
                })
            });
        checkout.expect_draft_order().never();
        checkout.expect_place_cash_order().never();

        let mut res = TestClient::post("http://example.com/process-payment")
            .json(&json!({
                "draft": priced_draft(PaymentMethod::Cash),
                "details": { "method": "cash" },
            }))
            .send(&make_service(checkout))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: PaymentSucceededResponse = res.take_json().await?;

        assert!(body.success, "deferred payment still succeeds");
        assert_eq!(body.transaction_id, None);
        assert_eq!(body.order.status, OrderStatus::Pending);

        Ok(())
    }
}
