//! Feedback endpoint error mapping.

use salvo::http::StatusError;
use tracing::error;

use canteen_app::domain::feedback::FeedbackServiceError;

pub(crate) fn into_status_error(error: FeedbackServiceError) -> StatusError {
    match error {
        FeedbackServiceError::RatingOutOfRange => {
            StatusError::bad_request().brief(error.to_string())
        }
        FeedbackServiceError::Duplicate => {
            StatusError::conflict().brief("Feedback already submitted")
        }
        FeedbackServiceError::OrderNotFound => StatusError::not_found().brief("Order not found"),
        FeedbackServiceError::ProductNotFound => {
            StatusError::not_found().brief("Product not found")
        }
        FeedbackServiceError::Storage(source) => {
            error!("feedback storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
