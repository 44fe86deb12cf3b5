//! Strongly-typed identifiers for domain entities
//!
//! Each id wraps a UUID. On the wire it is the bare UUID; for people it is
//! shown as `PREFIX-uuid` (`ITM-…`, `CLM-…`), and both spellings are accepted
//! back wherever an id is read.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// A string that is not a valid id of the requested kind
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{input}' is not a valid {kind} id")]
pub struct IdParseError {
    pub kind: &'static str,
    pub input: String,
}

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal, $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(Uuid);

        impl $name {
            /// Random identifier
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Time-ordered identifier; sorts by creation time
            pub fn new_v7() -> Self {
                Self(Uuid::now_v7())
            }

            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            pub fn prefix() -> &'static str {
                $prefix
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}-{}", $prefix, self.0)
            }
        }

        impl FromStr for $name {
            type Err = IdParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                let raw = s.strip_prefix(concat!($prefix, "-")).unwrap_or(s);
                Uuid::parse_str(raw).map(Self).map_err(|_| IdParseError {
                    kind: $kind,
                    input: s.to_string(),
                })
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                self.0.serialize(serializer)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Uuid {
                id.0
            }
        }
    };
}

define_id!(
    /// A reported lost, found or anonymous item
    ItemId, "ITM", "item"
);
define_id!(
    /// An ownership claim against a found item
    ClaimRequestId, "CLM", "claim"
);
define_id!(QuestionId, "QST", "question");
define_id!(
    /// Anyone taking part in a report: owner, finder or claimant
    ParticipantId, "PTC", "participant"
);
define_id!(NotificationId, "NTF", "notification");
