//! Limit order book matching engine
//!
//! Price-time-priority continuous double auction for a single instrument.
//! Limit orders are pure makers: they rest at their price and never cross on
//! entry. Aggression is expressed by market orders, which consume liquidity
//! from the opposite side best-price-first, FIFO within each price level.
//!
//! **Key invariants:**
//! - Every resting order sits in exactly one price level's queue
//! - A level's cached volume equals the sum of its queue at all times
//! - Bids iterate strictly descending by price, asks strictly ascending
//! - The trade log is totally ordered by append order, which equals the
//!   order in which mutations were serialized

pub mod book;
pub mod engine;
pub mod matching;

pub use engine::{BookOrder, BookSnapshot, Orderbook, UserOrders};
pub use matching::{Counterparty, Match};
