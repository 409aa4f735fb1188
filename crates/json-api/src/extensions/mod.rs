//! Small extension traits shared across handlers.

pub(crate) mod depot;
pub(crate) mod result;

pub(crate) use depot::DepotExt;
pub(crate) use result::ResultExt;
