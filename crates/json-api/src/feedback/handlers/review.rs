//! Create Product Review Handler
//!
//! Product-scoped feedback: rates one product from a delivered order and
//! triggers the product's reputation recompute.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use canteen_app::{
    domain::feedback::models::{Feedback, NewFeedback},
    ids::{OrderUuid, ProductUuid},
};

use crate::{extensions::*, feedback::errors::into_status_error, state::State};

/// Create Review Request
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct CreateReviewRequest {
    /// The order the product was purchased in.
    pub order: Uuid,
    /// Integer rating, 1–5.
    pub rating: u8,
    pub comment: Option<String>,
}

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<Feedback>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let principal = depot.principal_or_401()?;

    let product = req
        .param::<Uuid>("product")
        .map(ProductUuid::from_uuid)
        .ok_or_else(|| StatusError::bad_request().brief("Invalid product id"))?;

    let request: CreateReviewRequest = req
        .parse_json()
        .await
        .map_err(|_invalid| StatusError::bad_request().brief("Malformed review payload"))?;

    let new = NewFeedback {
        order: OrderUuid::from_uuid(request.order),
        product: Some(product),
        rating: request.rating,
        comment: request.comment,
    };

    let feedback = state
        .app
        .feedback
        .submit(principal.customer, new, Timestamp::now())
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(feedback))
}
