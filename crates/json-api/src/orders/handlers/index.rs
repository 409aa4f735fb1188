//! Order Index Handler

use std::sync::Arc;

use jiff::Timestamp;
use salvo::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{extensions::*, orders::handlers::get::OrderResponse, state::State};

/// Order Index Response
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct OrdersResponse {
    /// The caller's orders, newest first.
    pub orders: Vec<OrderResponse>,
}

#[salvo::handler]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<OrdersResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let principal = depot.principal_or_401()?;

    let orders = state
        .app
        .orders
        .list_orders(principal.customer)
        .await
        .or_500("failed to fetch orders")?;

    let now = Timestamp::now();

    Ok(Json(OrdersResponse {
        orders: orders
            .into_iter()
            .map(|order| OrderResponse::new(order, now))
            .collect(),
    }))
}
