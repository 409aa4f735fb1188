//! Get Order Handler

use std::sync::Arc;

use jiff::Timestamp;
use salvo::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use canteen_app::{domain::orders::models::Order, ids::OrderUuid};

use crate::{extensions::*, orders::errors::orders_into_status_error, state::State};

/// An order as returned to its owner, with the server-computed delivery
/// readiness flag.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct OrderResponse {
    #[serde(flatten)]
    pub order: Order,
    /// Whether the order has aged past the kitchen's handoff window and is
    /// still in a non-terminal state.
    pub delivery_ready: bool,
}

impl OrderResponse {
    pub(crate) fn new(order: Order, now: Timestamp) -> Self {
        let delivery_ready = order.delivery_ready(now);

        Self {
            order,
            delivery_ready,
        }
    }
}

pub(crate) fn order_param(req: &Request) -> Result<OrderUuid, StatusError> {
    req.param::<Uuid>("order")
        .map(OrderUuid::from_uuid)
        .ok_or_else(|| StatusError::bad_request().brief("Invalid order id"))
}

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let principal = depot.principal_or_401()?;
    let order = order_param(req)?;

    let order = state
        .app
        .orders
        .get_order(principal.customer, order)
        .await
        .map_err(orders_into_status_error)?;

    Ok(Json(OrderResponse::new(order, Timestamp::now())))
}
