//! Domain services and persistence for the canteen storefront.
//!
//! The order finalization pipeline lives here: checkout orchestration,
//! simulated payment authorization, the order ledger, and feedback-driven
//! reputation updates. Pure pricing math comes from `canteen-core`; HTTP
//! transport lives in `canteen-json`.

pub mod auth;
pub mod context;
pub mod database;
pub mod domain;
pub mod ids;

#[cfg(test)]
mod test;
