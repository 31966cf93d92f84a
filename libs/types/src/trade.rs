//! Executed trade record

use crate::numeric::{Price, Quantity};
use crate::order::Side;
use serde::{Deserialize, Serialize};

/// One executed fill, persisted in the order book's trade log.
///
/// `side` is the taker's side. The log is append-only and totally ordered:
/// append order equals matching order equals the serialization order of
/// mutations on the book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub price: Price,
    pub size: Quantity,
    pub side: Side,
    pub timestamp: i64,
}

impl Trade {
    pub fn new(price: Price, size: Quantity, side: Side, timestamp: i64) -> Self {
        Self {
            price,
            size,
            side,
            timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trade_serialization() {
        let trade = Trade::new(
            Price::from_u64(100),
            Quantity::from_str("2.5").unwrap(),
            Side::Bid,
            1708123456789000000,
        );

        let json = serde_json::to_string(&trade).unwrap();
        let deserialized: Trade = serde_json::from_str(&json).unwrap();
        assert_eq!(trade, deserialized);
    }
}
