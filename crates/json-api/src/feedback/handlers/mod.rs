//! Feedback handlers.

pub(crate) mod create;
pub(crate) mod review;
