//! Product reputation storage.

pub mod errors;
pub mod memory;
pub mod postgres;
pub mod repository;

pub use errors::ReputationError;
pub use repository::{MockProductReputations, ProductReputations};
