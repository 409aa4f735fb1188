//! Order endpoint error mapping.

use salvo::http::StatusError;
use tracing::error;

use canteen_app::domain::{
    checkout::CheckoutError, orders::OrdersServiceError, payments::errors::PaymentError,
};

pub(crate) fn orders_into_status_error(error: OrdersServiceError) -> StatusError {
    match error {
        OrdersServiceError::NotFound => StatusError::not_found().brief("Order not found"),
        OrdersServiceError::InvalidTransition { from, to } => StatusError::conflict().brief(
            format!("Order cannot move from {} to {}", from.as_str(), to.as_str()),
        ),
        OrdersServiceError::Storage(source) => {
            error!("order storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}

pub(crate) fn checkout_into_status_error(error: CheckoutError) -> StatusError {
    match error {
        CheckoutError::EmptyCart
        | CheckoutError::MissingAddress
        | CheckoutError::MissingPhone
        | CheckoutError::UnknownCoupon(_) => StatusError::bad_request().brief(error.to_string()),
        CheckoutError::Payment(payment) => payment_into_status_error(payment),
        CheckoutError::Orders(orders) => orders_into_status_error(orders),
    }
}

pub(crate) fn payment_into_status_error(error: PaymentError) -> StatusError {
    match error {
        PaymentError::Validation(validation) => {
            StatusError::bad_request().brief(validation.to_string())
        }
        PaymentError::Declined => StatusError::payment_required().brief("Payment was declined"),
        PaymentError::Timeout => {
            error!("payment authorization timed out");

            StatusError::gateway_timeout().brief("Payment authorization timed out")
        }
    }
}
