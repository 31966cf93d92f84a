//! Fixed-point decimal types for prices and sizes
//!
//! Uses rust_decimal so that price keys compare exactly; floating-point
//! equality never reaches the level-map boundary. Both types serialize as
//! JSON strings to avoid number precision loss on the wire, and accept
//! either strings or numbers when deserializing.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;
use std::str::FromStr;

/// Exact price of a price level. Always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(Decimal);

impl Price {
    /// Create a new Price from a Decimal.
    ///
    /// # Panics
    /// Panics if the price is zero or negative.
    pub fn new(value: Decimal) -> Self {
        assert!(value > Decimal::ZERO, "price must be positive");
        Self(value)
    }

    /// Try to create a Price, returning None if non-positive.
    pub fn try_new(value: Decimal) -> Option<Self> {
        if value > Decimal::ZERO {
            Some(Self(value))
        } else {
            None
        }
    }

    pub fn from_u64(value: u64) -> Self {
        Self::new(Decimal::from(value))
    }

    pub fn from_str(s: &str) -> Result<Self, rust_decimal::Error> {
        let decimal = Decimal::from_str(s)?;
        Ok(Self::new(decimal))
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }
}

impl Serialize for Price {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let decimal = <Decimal as Deserialize<'de>>::deserialize(deserializer)?;
        Self::try_new(decimal).ok_or_else(|| serde::de::Error::custom("price must be positive"))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Order size. Positive at creation; fills decrement it and may take it to
/// exactly zero, at which point the order is fully filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quantity(Decimal);

impl Quantity {
    /// Create a new Quantity from a Decimal.
    ///
    /// # Panics
    /// Panics if the quantity is zero or negative.
    pub fn new(value: Decimal) -> Self {
        assert!(value > Decimal::ZERO, "quantity must be positive");
        Self(value)
    }

    /// Try to create a Quantity, returning None if non-positive.
    pub fn try_new(value: Decimal) -> Option<Self> {
        if value > Decimal::ZERO {
            Some(Self(value))
        } else {
            None
        }
    }

    /// The zero quantity, reached through fills.
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    pub fn from_u64(value: u64) -> Self {
        Self::new(Decimal::from(value))
    }

    pub fn from_str(s: &str) -> Result<Self, rust_decimal::Error> {
        let decimal = Decimal::from_str(s)?;
        Ok(Self::new(decimal))
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == Decimal::ZERO
    }

    /// Subtract, clamping at zero. Fill arithmetic never underflows.
    pub fn saturating_sub(self, rhs: Self) -> Self {
        Self((self.0 - rhs.0).max(Decimal::ZERO))
    }
}

impl Add for Quantity {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Serialize for Quantity {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let decimal = <Decimal as Deserialize<'de>>::deserialize(deserializer)?;
        // Zero is representable on the wire; placement rejects it explicitly.
        if decimal >= Decimal::ZERO {
            Ok(Self(decimal))
        } else {
            Err(serde::de::Error::custom("quantity cannot be negative"))
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_creation() {
        let price = Price::from_u64(100);
        assert_eq!(price.as_decimal(), Decimal::from(100));
    }

    #[test]
    #[should_panic(expected = "price must be positive")]
    fn test_price_negative_panics() {
        Price::new(Decimal::from(-100));
    }

    #[test]
    fn test_price_ordering() {
        assert!(Price::from_u64(100) < Price::from_u64(101));
        assert_eq!(Price::from_str("100.0").unwrap(), Price::from_u64(100));
    }

    #[test]
    fn test_price_serialization() {
        let price = Price::from_str("100.25").unwrap();
        let json = serde_json::to_string(&price).unwrap();
        assert_eq!(json, "\"100.25\"");

        let deserialized: Price = serde_json::from_str(&json).unwrap();
        assert_eq!(price, deserialized);
    }

    #[test]
    fn test_price_deserializes_from_number() {
        let price: Price = serde_json::from_str("100.25").unwrap();
        assert_eq!(price, Price::from_str("100.25").unwrap());
    }

    #[test]
    fn test_price_rejects_zero() {
        assert!(serde_json::from_str::<Price>("\"0\"").is_err());
    }

    #[test]
    fn test_quantity_creation() {
        let qty = Quantity::from_str("1.5").unwrap();
        assert_eq!(qty.as_decimal(), Decimal::from_str("1.5").unwrap());
    }

    #[test]
    fn test_quantity_zero() {
        assert!(Quantity::zero().is_zero());
        assert!(!Quantity::from_u64(1).is_zero());
    }

    #[test]
    fn test_quantity_add() {
        let sum = Quantity::from_str("2.5").unwrap() + Quantity::from_str("1.5").unwrap();
        assert_eq!(sum.as_decimal(), Decimal::from(4));
    }

    #[test]
    fn test_quantity_saturating_sub() {
        let q5 = Quantity::from_u64(5);
        let q3 = Quantity::from_u64(3);

        assert_eq!(q5.saturating_sub(q3), Quantity::from_u64(2));
        assert!(q3.saturating_sub(q5).is_zero());
    }

    #[test]
    fn test_quantity_min_picks_smaller() {
        let resting = Quantity::from_u64(5);
        let incoming = Quantity::from_u64(3);
        assert_eq!(resting.min(incoming), incoming);
    }

    #[test]
    fn test_quantity_serialization() {
        let qty = Quantity::from_str("1.5").unwrap();
        let json = serde_json::to_string(&qty).unwrap();
        assert_eq!(json, "\"1.5\"");

        let deserialized: Quantity = serde_json::from_str(&json).unwrap();
        assert_eq!(qty, deserialized);
    }

    #[test]
    fn test_quantity_deserializes_zero_but_not_negative() {
        let zero: Quantity = serde_json::from_str("\"0\"").unwrap();
        assert!(zero.is_zero());
        assert!(serde_json::from_str::<Quantity>("\"-1\"").is_err());
    }
}
