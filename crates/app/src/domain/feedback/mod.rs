//! Customer feedback and the reputation recompute it triggers.

pub mod errors;
pub mod memory;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use errors::FeedbackServiceError;
pub use service::{FeedbackIntake, FeedbackService, MockFeedbackService};
