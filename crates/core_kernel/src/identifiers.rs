//! Strongly-typed identifiers for domain entities
//!
//! Customer identities are assigned by the store from an ascending integer
//! sequence. Wrapping the raw integer keeps it from being mixed up with ages
//! or counts that share the same primitive type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

macro_rules! define_id {
    ($name:ident, $repr:ty) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name($repr);

        impl $name {
            /// Wraps a raw store-assigned value
            pub const fn new(value: $repr) -> Self {
                Self(value)
            }

            /// Returns the raw value
            pub const fn value(&self) -> $repr {
                self.0
            }

            /// Returns the identifier that follows this one in the sequence
            ///
            /// `None` once the sequence is exhausted.
            pub fn next(&self) -> Option<Self> {
                self.0.checked_add(1).map(Self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().parse()?))
            }
        }

        impl From<$repr> for $name {
            fn from(value: $repr) -> Self {
                Self(value)
            }
        }

        impl From<$name> for $repr {
            fn from(id: $name) -> $repr {
                id.0
            }
        }
    };
}

// Backed by the `integer` column fed from `customer_id_seq`
define_id!(CustomerId, i32);
