//! Identifier types for exchange entities
//!
//! Order ids are plain 64-bit integers minted by the engine. Allocation is
//! serialized under the order book's write lock, so a monotonic counter is
//! sufficient for uniqueness; there is no randomness to collide.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for an order, assigned by the engine at placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(u64);

impl OrderId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of the user owning an order. Opaque to the engine; the user
/// registry and settlement live outside this system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Market identifier: a short instrument symbol such as `ETH`.
///
/// The gateway keys one order book per market by this string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarketId(String);

impl MarketId {
    /// Create a new MarketId.
    ///
    /// # Panics
    /// Panics on an empty symbol.
    pub fn new(symbol: impl Into<String>) -> Self {
        let s = symbol.into();
        assert!(!s.is_empty(), "market symbol must be non-empty");
        Self(s)
    }

    /// Try to create a MarketId, returning None for an empty symbol.
    pub fn try_new(symbol: impl Into<String>) -> Option<Self> {
        let s = symbol.into();
        if s.is_empty() {
            None
        } else {
            Some(Self(s))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MarketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for MarketId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_id_ordering() {
        assert!(OrderId::new(1) < OrderId::new(2));
        assert_eq!(OrderId::new(7).as_u64(), 7);
    }

    #[test]
    fn test_order_id_serialization() {
        let id = OrderId::new(42);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "42");

        let deserialized: OrderId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_user_id_display() {
        assert_eq!(UserId::new(8888).to_string(), "8888");
    }

    #[test]
    fn test_market_id_creation() {
        let market = MarketId::new("ETH");
        assert_eq!(market.as_str(), "ETH");
    }

    #[test]
    fn test_market_id_try_new() {
        assert!(MarketId::try_new("ETH").is_some());
        assert!(MarketId::try_new("").is_none());
    }

    #[test]
    #[should_panic(expected = "market symbol must be non-empty")]
    fn test_market_id_empty_panics() {
        MarketId::new("");
    }

    #[test]
    fn test_market_id_serialization() {
        let market = MarketId::new("ETH");
        let json = serde_json::to_string(&market).unwrap();
        assert_eq!(json, "\"ETH\"");

        let deserialized: MarketId = serde_json::from_str(&json).unwrap();
        assert_eq!(market, deserialized);
    }
}
