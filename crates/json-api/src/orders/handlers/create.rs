//! Create Order Handler
//!
//! Cash checkouts persist immediately; card and UPI checkouts return a
//! priced draft for the client to carry into the payment step.

use std::sync::Arc;

use jiff::Zoned;
use salvo::{http::header::LOCATION, prelude::*};
use tracing::warn;

use canteen_app::domain::{
    checkout::models::CheckoutRequest, notifications::NotificationPayload,
    orders::models::PaymentMethod,
};

use crate::{extensions::*, orders::errors::checkout_into_status_error, state::State};

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let principal = depot.principal_or_401()?;

    let request: CheckoutRequest = req
        .parse_json()
        .await
        .map_err(|_invalid| StatusError::bad_request().brief("Malformed checkout payload"))?;

    let now = Zoned::now();

    match request.payment_method {
        PaymentMethod::Cash => {
            let order = state
                .app
                .checkout
                .place_cash_order(principal.customer, request, now)
                .await
                .map_err(checkout_into_status_error)?;

            // A notification outage must never fail a placed order.
            if let Err(error) = state
                .app
                .notifications
                .dispatch(NotificationPayload::from(&order))
                .await
            {
                warn!(order = %order.id, "order confirmation not dispatched: {error}");
            }

            res.add_header(LOCATION, format!("/orders/{}", order.id), true)
                .or_500("failed to set location header")?
                .status_code(StatusCode::CREATED);
            res.render(Json(order));
        }
        PaymentMethod::Card | PaymentMethod::Upi => {
            let draft = state
                .app
                .checkout
                .draft_order(request, now)
                .await
                .map_err(checkout_into_status_error)?;

            res.render(Json(draft));
        }
    }

    Ok(())
}
