//! Match records produced by the matching walk

use serde::Serialize;
use types::ids::{OrderId, UserId};
use types::numeric::{Price, Quantity};

/// One party to a match. Levels own their orders, so matches carry copies of
/// the identifying fields rather than references into the book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Counterparty {
    pub order_id: OrderId,
    pub user_id: UserId,
}

/// A pairing of the taker with one resting maker order.
///
/// `price` is always the resting order's price: the taker pays what the book
/// offered, never its own hypothetical price.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Match {
    pub bid: Counterparty,
    pub ask: Counterparty,
    pub size_filled: Quantity,
    pub price: Price,
}
