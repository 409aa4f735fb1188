//! Entity identifiers.
//!
//! One newtype per entity keeps order, customer, product, and feedback ids
//! from being confused at call sites.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! entity_uuid {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Mints a fresh identifier.
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Wraps an existing UUID.
            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Unwraps into the raw UUID.
            #[must_use]
            pub const fn into_uuid(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

entity_uuid!(
    /// Identifies one order.
    OrderUuid
);

entity_uuid!(
    /// Identifies one purchasing account.
    CustomerUuid
);

entity_uuid!(
    /// Identifies one catalog product.
    ProductUuid
);

entity_uuid!(
    /// Identifies one feedback record.
    FeedbackUuid
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_ids_are_distinct() {
        assert_ne!(OrderUuid::new(), OrderUuid::new());
    }

    #[test]
    fn round_trips_through_uuid() {
        let raw = Uuid::now_v7();

        assert_eq!(OrderUuid::from_uuid(raw).into_uuid(), raw);
    }
}
