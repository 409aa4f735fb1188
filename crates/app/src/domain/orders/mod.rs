//! Orders: the ledger is the only component that creates or mutates order
//! records.

pub mod errors;
pub mod memory;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use errors::OrdersServiceError;
pub use service::{LedgerService, MockOrderLedger, OrderLedger};
