//! Notification dispatch port.

use async_trait::async_trait;
use mockall::automock;
use thiserror::Error;
use tracing::info;

use crate::domain::notifications::models::NotificationPayload;

#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("notification channel unavailable")]
    ChannelUnavailable,
}

/// Hands a confirmation payload to whatever channel is configured.
#[automock]
#[async_trait]
pub trait NotificationDispatcher: Send + Sync {
    async fn dispatch(&self, payload: NotificationPayload) -> Result<(), NotificationError>;
}

/// Logs the payload instead of sending it anywhere. The default until a real
/// channel is wired up.
#[derive(Debug, Default)]
pub struct LogDispatcher;

#[async_trait]
impl NotificationDispatcher for LogDispatcher {
    async fn dispatch(&self, payload: NotificationPayload) -> Result<(), NotificationError> {
        info!(
            order = %payload.order,
            total = %payload.total,
            payment = payload.payment.as_str(),
            "order confirmation dispatched",
        );

        Ok(())
    }
}
