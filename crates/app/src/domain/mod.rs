//! Domain modules.

pub mod checkout;
pub mod feedback;
pub mod notifications;
pub mod orders;
pub mod payments;
pub mod products;
