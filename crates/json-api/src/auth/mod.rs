//! Bearer authentication.

pub(crate) mod middleware;
