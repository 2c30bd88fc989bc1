//! Identifier types for engine entities
//!
//! Order identifiers are supplied by the client on the wire and are only
//! required to be unique among currently resting orders.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Client-supplied identifier for an order
///
/// Opaque string; the engine never interprets its contents. Uniqueness is
/// only guaranteed among orders currently resting in the book.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    /// Create a new OrderId from a string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the identifier string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for OrderId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
