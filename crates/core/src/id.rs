//! Entity identifiers.

use serde::{Deserialize, Serialize};

/// Identifier of an entity: either text or an integer.
///
/// Compared by value. The two variants never compare equal to each other,
/// so `EntityId::from("1")` and `EntityId::from(1)` key different entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Text(String),
    Number(i64),
}

impl core::fmt::Display for EntityId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            EntityId::Text(s) => core::fmt::Display::fmt(s, f),
            EntityId::Number(n) => core::fmt::Display::fmt(n, f),
        }
    }
}

impl From<String> for EntityId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<i64> for EntityId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}
