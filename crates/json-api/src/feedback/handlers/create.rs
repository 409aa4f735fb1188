//! Create Feedback Handler
//!
//! Whole-order feedback: one submission per customer per order.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use canteen_app::{
    domain::feedback::models::{Feedback, NewFeedback},
    ids::OrderUuid,
};

use crate::{extensions::*, feedback::errors::into_status_error, state::State};

/// Create Feedback Request
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct CreateFeedbackRequest {
    pub order: Uuid,
    /// Integer rating, 1–5.
    pub rating: u8,
    pub comment: Option<String>,
}

impl From<CreateFeedbackRequest> for NewFeedback {
    fn from(request: CreateFeedbackRequest) -> Self {
        NewFeedback {
            order: OrderUuid::from_uuid(request.order),
            product: None,
            rating: request.rating,
            comment: request.comment,
        }
    }
}

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<Feedback>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let principal = depot.principal_or_401()?;

    let request: CreateFeedbackRequest = req
        .parse_json()
        .await
        .map_err(|_invalid| StatusError::bad_request().brief("Malformed feedback payload"))?;

    let feedback = state
        .app
        .feedback
        .submit(principal.customer, request.into(), Timestamp::now())
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(feedback))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use canteen_app::{
        domain::feedback::{FeedbackServiceError, MockFeedbackService},
        ids::FeedbackUuid,
    };

    use crate::test_helpers::{TEST_CUSTOMER, feedback_route_service};

    use super::*;

    fn make_service(feedback: MockFeedbackService) -> Service {
        feedback_route_service(feedback, Router::with_path("feedback").post(handler))
    }

    fn stored(new: &NewFeedback) -> Feedback {
        Feedback {
            id: FeedbackUuid::new(),
            order: new.order,
            customer: TEST_CUSTOMER,
            product: new.product,
            rating: new.rating,
            comment: new.comment.clone(),
            created_at: Timestamp::UNIX_EPOCH,
        }
    }

    #[tokio::test]
    async fn records_order_feedback() -> TestResult {
        let order = OrderUuid::new();

        let mut feedback = MockFeedbackService::new();

        feedback
            .expect_submit()
            .once()
            .withf(move |owner, new, _now| {
                *owner == TEST_CUSTOMER
                    && new.order == order
                    && new.product.is_none()
                    && new.rating == 4
            })
            .returning(|_, new, _| Ok(stored(&new)));

        let mut res = TestClient::post("http://example.com/feedback")
            .json(&json!({ "order": order.into_uuid(), "rating": 4, "comment": "tasty" }))
            .send(&make_service(feedback))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        let body: Feedback = res.take_json().await?;

        assert_eq!(body.order, order);
        assert_eq!(body.rating, 4);

        Ok(())
    }

    #[tokio::test]
    async fn duplicate_feedback_returns_409() -> TestResult {
        let mut feedback = MockFeedbackService::new();

        feedback
            .expect_submit()
            .once()
            .return_once(|_, _, _| Err(FeedbackServiceError::Duplicate));

        let res = TestClient::post("http://example.com/feedback")
            .json(&json!({ "order": OrderUuid::new().into_uuid(), "rating": 5 }))
            .send(&make_service(feedback))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }

    #[tokio::test]
    async fn out_of_range_rating_returns_400() -> TestResult {
        let mut feedback = MockFeedbackService::new();

        feedback
            .expect_submit()
            .once()
            .return_once(|_, _, _| Err(FeedbackServiceError::RatingOutOfRange));

        let res = TestClient::post("http://example.com/feedback")
            .json(&json!({ "order": OrderUuid::new().into_uuid(), "rating": 9 }))
            .send(&make_service(feedback))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn feedback_for_a_foreign_order_returns_404() -> TestResult {
        let mut feedback = MockFeedbackService::new();

        feedback
            .expect_submit()
            .once()
            .return_once(|_, _, _| Err(FeedbackServiceError::OrderNotFound));

        let res = TestClient::post("http://example.com/feedback")
            .json(&json!({ "order": OrderUuid::new().into_uuid(), "rating": 3 }))
            .send(&make_service(feedback))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
