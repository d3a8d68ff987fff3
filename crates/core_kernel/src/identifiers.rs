//! Strongly-typed identifiers for backend reference data
//!
//! The claims backend keys its lookup tables with numeric ids. Wrapping them
//! in newtypes keeps a document type id from being passed where a location id
//! is expected, while serializing exactly like the bare number.
//!
//! Deserialization also accepts a numeric string (`"7"` as well as `7`), so a
//! backend that quotes its ids still loads. Anything else fails to decode.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Wire form of an id: a JSON number or a numeric string
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(i64),
    Text(String),
}

macro_rules! define_id {
    ($name:ident, $label:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a raw backend id
            pub const fn new(raw: i64) -> Self {
                Self(raw)
            }

            /// Returns the raw backend id
            pub const fn value(&self) -> i64 {
                self.0
            }

            /// Returns the human-readable label used in error messages
            pub fn label() -> &'static str {
                $label
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse::<i64>().map(Self).map_err(|_| {
                    CoreError::invalid_identifier(format!("{} '{}' is not numeric", $label, s))
                })
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                match RawId::deserialize(deserializer)? {
                    RawId::Number(raw) => Ok(Self(raw)),
                    RawId::Text(text) => text.parse().map_err(serde::de::Error::custom),
                }
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> i64 {
                id.0
            }
        }
    };
}

define_id!(DocumentTypeId, "document type id");
define_id!(LocationId, "location id");
