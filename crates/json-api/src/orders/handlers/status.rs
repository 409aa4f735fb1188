//! Update Order Status Handler
//!
//! Admin-only lifecycle transitions, validated against the order state
//! machine. Invalid moves are conflicts, not validation errors: the payload
//! is well-formed, the order just is not in a state that allows it.

use std::sync::Arc;

use salvo::prelude::*;
use serde::{Deserialize, Serialize};

use canteen_app::domain::orders::models::OrderStatus;

use crate::{
    extensions::*,
    orders::{errors::orders_into_status_error, handlers::get::order_param},
    state::State,
};

/// Update Order Status Request
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct UpdateStatusRequest {
    pub status: OrderStatus,
}

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let _admin = depot.admin_or_403()?;
    let order = order_param(req)?;

    let request: UpdateStatusRequest = req
        .parse_json()
        .await
        .map_err(|_invalid| StatusError::bad_request().brief("Malformed status payload"))?;

    let order = state
        .app
        .orders
        .set_status(order, request.status)
        .await
        .map_err(orders_into_status_error)?;

    res.render(Json(order));

    Ok(())
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use canteen_app::{
        domain::orders::{
            MockOrderLedger, OrdersServiceError,
            models::{Order, PaymentMethod},
        },
        ids::OrderUuid,
    };

    use crate::test_helpers::{admin_ledger_service, ledger_service, persisted_order};

    use super::*;

    fn make_service(ledger: MockOrderLedger) -> Service {
        admin_ledger_service(
            ledger,
            Router::with_path("admin/orders/{order}/status").put(handler),
        )
    }

    #[tokio::test]
    async fn admin_moves_an_order_forward() -> TestResult {
        let order = persisted_order(PaymentMethod::Cash, OrderStatus::Preparing, None);
        let order_id = order.id;

        let mut ledger = MockOrderLedger::new();

        ledger
            .expect_set_status()
            .once()
            .withf(move |id, status| *id == order_id && *status == OrderStatus::Preparing)
            .return_once(move |_, _| Ok(order));

        let mut res =
            TestClient::put(format!("http://example.com/admin/orders/{order_id}/status"))
                .json(&json!({ "status": "preparing" }))
                .send(&make_service(ledger))
                .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: Order = res.take_json().await?;

        assert_eq!(body.status, OrderStatus::Preparing);

        Ok(())
    }

    #[tokio::test]
    async fn invalid_transition_returns_409() -> TestResult {
        let order_id = OrderUuid::new();

        let mut ledger = MockOrderLedger::new();

        ledger.expect_set_status().once().return_once(|_, _| {
            Err(OrdersServiceError::InvalidTransition {
                from: OrderStatus::Delivered,
                to: OrderStatus::Preparing,
            })
        });

        let res = TestClient::put(format!("http://example.com/admin/orders/{order_id}/status"))
            .json(&json!({ "status": "preparing" }))
            .send(&make_service(ledger))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }

    #[tokio::test]
    async fn unknown_order_returns_404() -> TestResult {
        let order_id = OrderUuid::new();

        let mut ledger = MockOrderLedger::new();

        ledger
            .expect_set_status()
            .once()
            .return_once(|_, _| Err(OrdersServiceError::NotFound));

        let res = TestClient::put(format!("http://example.com/admin/orders/{order_id}/status"))
            .json(&json!({ "status": "cancelled" }))
            .send(&make_service(ledger))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn customers_cannot_change_status() -> TestResult {
        let order_id = OrderUuid::new();

        let mut ledger = MockOrderLedger::new();

        ledger.expect_set_status().never();

        let res = TestClient::put(format!("http://example.com/admin/orders/{order_id}/status"))
            .json(&json!({ "status": "preparing" }))
            .send(&ledger_service(
                ledger,
                Router::with_path("admin/orders/{order}/status").put(handler),
            ))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));

        Ok(())
    }
}
