//! Order and side types

use crate::ids::{OrderId, UserId};
use crate::numeric::Quantity;
use serde::{Deserialize, Serialize};

/// Order side (bid buys, ask sells).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    Bid,
    Ask,
}

impl Side {
    /// The side an incoming order consumes liquidity from.
    pub fn opposite(&self) -> Self {
        match self {
            Side::Bid => Side::Ask,
            Side::Ask => Side::Bid,
        }
    }

    pub fn is_bid(&self) -> bool {
        matches!(self, Side::Bid)
    }

    pub fn from_bid(bid: bool) -> Self {
        if bid {
            Side::Bid
        } else {
            Side::Ask
        }
    }
}

/// How an order is submitted. Resting orders are always limit orders; the
/// engine tracks this as a tag on the submission, not as stored state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderType {
    Limit,
    Market,
}

/// A single order, resting or in flight.
///
/// `size` is the remaining size: monotonically non-increasing once the order
/// rests, exactly zero when fully filled. `timestamp` (Unix nanos) is for
/// display and audit only; priority within a price level is queue position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub side: Side,
    pub size: Quantity,
    pub timestamp: i64,
}

impl Order {
    pub fn new(id: OrderId, user_id: UserId, side: Side, size: Quantity, timestamp: i64) -> Self {
        Self {
            id,
            user_id,
            side,
            size,
            timestamp,
        }
    }

    pub fn is_filled(&self) -> bool {
        self.size.is_zero()
    }

    /// Decrement the remaining size by a fill.
    ///
    /// # Panics
    /// Panics if the fill exceeds the remaining size.
    pub fn fill(&mut self, qty: Quantity) {
        assert!(qty <= self.size, "fill exceeds remaining order size");
        self.size = self.size.saturating_sub(qty);
    }
}
