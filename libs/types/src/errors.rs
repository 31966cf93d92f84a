//! Error taxonomy for the matching engine
//!
//! Every failure the engine can report to a caller. All are rejected before
//! any mutation: a failed call leaves the book exactly as it was. Internal
//! inconsistencies (a volume cache drifting from its queue, a dangling
//! location) are programming defects and assert, never an error value.

use crate::ids::OrderId;
use crate::numeric::Quantity;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Order size was zero or negative at placement.
    #[error("invalid quantity: order size must be positive")]
    InvalidQuantity,

    /// A market order asked for more than the opposite side holds. Checked
    /// before matching starts; partial fills against an exhausted book are
    /// not permitted.
    #[error("insufficient liquidity: requested {requested}, available {available}")]
    InsufficientLiquidity {
        requested: Quantity,
        available: Quantity,
    },

    /// Cancel of an id that is not resting (unknown, already filled, or
    /// already cancelled).
    #[error("order not found: {order_id}")]
    OrderNotFound { order_id: OrderId },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_liquidity_display() {
        let err = EngineError::InsufficientLiquidity {
            requested: Quantity::from_u64(10),
            available: Quantity::from_u64(4),
        };
        assert_eq!(
            err.to_string(),
            "insufficient liquidity: requested 10, available 4"
        );
    }

    #[test]
    fn test_order_not_found_display() {
        let err = EngineError::OrderNotFound {
            order_id: OrderId::new(99),
        };
        assert_eq!(err.to_string(), "order not found: 99");
    }
}
