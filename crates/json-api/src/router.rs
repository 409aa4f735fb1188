//! App Router

use salvo::Router;

use crate::{auth, feedback, orders};

pub(crate) fn app_router() -> Router {
    Router::new()
        .hoop(auth::middleware::handler)
        .push(
            Router::with_path("orders")
                .post(orders::create::handler)
                .get(orders::index::handler)
                .push(Router::with_path("{order}").get(orders::get::handler)),
        )
        .push(Router::with_path("process-payment").post(orders::payment::handler))
        .push(Router::with_path("admin/orders/{order}/status").put(orders::status::handler))
        .push(Router::with_path("feedback").post(feedback::create::handler))
        .push(Router::with_path("products/{product}/reviews").post(feedback::review::handler))
}
