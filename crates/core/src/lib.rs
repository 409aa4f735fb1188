//! Pure pricing domain for the canteen storefront.
//!
//! Everything in this crate is side-effect free: discount selection, cart
//! pricing, and reputation recomputation are plain functions over owned data.
//! Persistence, payment simulation, and transport live in `canteen-app` and
//! `canteen-json`.

pub mod discounts;
pub mod money;
pub mod pricing;
pub mod ratings;
