//! Wire DTOs for the item collection resource.
//!
//! DESIGN
//! ======
//! These types mirror the server's JSON shapes so serde round-trips stay
//! lossless. `description` is optional on the wire; absent and `null` both
//! decode to `None`, and the client treats `None` as the empty string.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned item identifier.
///
/// Opaque to the client: it is only compared, displayed, and echoed back in
/// request paths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub i64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for ItemId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(Self)
    }
}

/// An item as returned by the collection resource.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier assigned by the server on create.
    pub id: ItemId,
    /// Display name; never empty for items created through this client.
    pub name: String,
    /// Optional free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Completion flag.
    #[serde(default)]
    pub completed: bool,
}

impl Item {
    /// Description text with absent treated as empty.
    #[must_use]
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

/// Request body for create and full-replacement update.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPayload {
    pub name: String,
    pub description: String,
    pub completed: bool,
}

impl ItemPayload {
    /// Payload for a new item; new items always start incomplete.
    #[must_use]
    pub fn new_item(name: &str, description: &str) -> Self {
        Self { name: name.to_owned(), description: description.to_owned(), completed: false }
    }
}

/// Error body returned by the server on non-2xx responses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub detail: Option<String>,
}
