//! Shared fixtures for service tests.

pub mod drafts;
