//! Order confirmation notifications.
//!
//! Delivery transport (push, SMS, email) lives outside this workspace; the
//! contract here is the payload and the dispatch port. Dispatch failures are
//! logged and swallowed by callers so a notification outage never fails a
//! placed order.

pub mod dispatcher;
pub mod models;

pub use dispatcher::{LogDispatcher, MockNotificationDispatcher, NotificationDispatcher};
pub use models::NotificationPayload;
