//! Order book core
//!
//! One `Orderbook` per market: the two sorted sides, the order-id location
//! index used for O(1) cancellation, the append-only trade log, and the
//! monotonic order-id counter. All mutating entry points run under the
//! caller's write lock and either complete fully or fail before touching
//! any structure.

use std::collections::HashMap;
use types::errors::EngineError;
use types::ids::{OrderId, UserId};
use types::numeric::{Price, Quantity};
use types::order::{Order, Side};
use types::trade::Trade;

use crate::book::{AskBook, BidBook};
use crate::matching::{Counterparty, Match};

/// Where a resting order lives. This is the order's back-reference to its
/// price level, held in the book's index rather than on the order itself so
/// that levels can own their queues outright.
#[derive(Debug, Clone, Copy)]
struct OrderLocation {
    side: Side,
    price: Price,
}

/// A resting order as seen by read-side queries, with the price of the level
/// holding it.
#[derive(Debug, Clone, PartialEq)]
pub struct BookOrder {
    pub id: OrderId,
    pub user_id: UserId,
    pub side: Side,
    pub price: Price,
    pub size: Quantity,
    pub timestamp: i64,
}

impl BookOrder {
    fn from_resting(order: &Order, price: Price) -> Self {
        Self {
            id: order.id,
            user_id: order.user_id,
            side: order.side,
            price,
            size: order.size,
            timestamp: order.timestamp,
        }
    }
}

/// Full-book listing: per-side aggregate volumes plus every resting order,
/// best price first on each side.
#[derive(Debug, Clone)]
pub struct BookSnapshot {
    pub total_bid_volume: Quantity,
    pub total_ask_volume: Quantity,
    pub asks: Vec<BookOrder>,
    pub bids: Vec<BookOrder>,
}

/// One user's resting orders, split by side.
#[derive(Debug, Clone, Default)]
pub struct UserOrders {
    pub asks: Vec<BookOrder>,
    pub bids: Vec<BookOrder>,
}

/// The order book for a single market.
#[derive(Debug)]
pub struct Orderbook {
    bids: BidBook,
    asks: AskBook,
    /// Resting order id -> its side and price level.
    locations: HashMap<OrderId, OrderLocation>,
    /// Executed trades in matching order.
    trades: Vec<Trade>,
    next_order_id: u64,
}

impl Default for Orderbook {
    fn default() -> Self {
        Self::new()
    }
}

impl Orderbook {
    pub fn new() -> Self {
        Self {
            bids: BidBook::new(),
            asks: AskBook::new(),
            locations: HashMap::new(),
            trades: Vec::new(),
            next_order_id: 1,
        }
    }

    /// Mint the next order id. Callers draw ids under the same write lock
    /// that serializes placements, so the counter never races.
    pub fn allocate_order_id(&mut self) -> OrderId {
        let id = OrderId::new(self.next_order_id);
        self.next_order_id += 1;
        id
    }

    /// Rest a limit order at `price`.
    ///
    /// Limit orders are pure makers here: they never match on entry, even
    /// when priced through the opposite side. A marketable limit simply
    /// rests and may leave the book crossed until a market order clears it.
    pub fn place_limit(&mut self, price: Price, order: Order) -> Result<(), EngineError> {
        if order.size.is_zero() {
            return Err(EngineError::InvalidQuantity);
        }

        self.locations.insert(
            order.id,
            OrderLocation {
                side: order.side,
                price,
            },
        );
        match order.side {
            Side::Bid => self.bids.add(price, order),
            Side::Ask => self.asks.add(price, order),
        }
        Ok(())
    }

    /// Fill a market order against the opposite side.
    ///
    /// Fails with `InsufficientLiquidity` before any mutation when the
    /// opposite side cannot absorb the whole size; an accepted market order
    /// always fills completely. Returns one `Match` per resting order
    /// consumed, in matching order, and appends a `Trade` for each.
    pub fn place_market(
        &mut self,
        mut order: Order,
        timestamp: i64,
    ) -> Result<Vec<Match>, EngineError> {
        if order.size.is_zero() {
            return Err(EngineError::InvalidQuantity);
        }

        let available = match order.side.opposite() {
            Side::Ask => self.asks.total_volume(),
            Side::Bid => self.bids.total_volume(),
        };
        if available < order.size {
            return Err(EngineError::InsufficientLiquidity {
                requested: order.size,
                available,
            });
        }

        let matches = match order.side {
            Side::Bid => self.consume_asks(&mut order),
            Side::Ask => self.consume_bids(&mut order),
        };
        assert!(order.is_filled(), "market order left unfilled after walk");

        for m in &matches {
            self.trades
                .push(Trade::new(m.price, m.size_filled, order.side, timestamp));
        }
        Ok(matches)
    }

    /// Walk the ask side best-price-first, filling a market buy.
    fn consume_asks(&mut self, taker: &mut Order) -> Vec<Match> {
        let mut matches = Vec::new();
        while !taker.is_filled() {
            let Some(level) = self.asks.best_level_mut() else {
                break;
            };
            let level_price = level.price();

            while !taker.is_filled() {
                let Some(resting) = level.front() else {
                    break;
                };
                let maker = Counterparty {
                    order_id: resting.id,
                    user_id: resting.user_id,
                };
                let fill = resting.size.min(taker.size);

                matches.push(Match {
                    bid: Counterparty {
                        order_id: taker.id,
                        user_id: taker.user_id,
                    },
                    ask: maker,
                    size_filled: fill,
                    price: level_price,
                });

                if let Some(filled) = level.fill_front(fill) {
                    self.locations.remove(&filled.id);
                }
                taker.fill(fill);
            }

            if level.is_empty() {
                self.asks.remove_level(level_price);
            }
        }
        matches
    }

    /// Walk the bid side best-price-first, filling a market sell.
    fn consume_bids(&mut self, taker: &mut Order) -> Vec<Match> {
        let mut matches = Vec::new();
        while !taker.is_filled() {
            let Some(level) = self.bids.best_level_mut() else {
                break;
            };
            let level_price = level.price();

            while !taker.is_filled() {
                let Some(resting) = level.front() else {
                    break;
                };
                let maker = Counterparty {
                    order_id: resting.id,
                    user_id: resting.user_id,
                };
                let fill = resting.size.min(taker.size);

                matches.push(Match {
                    bid: maker,
                    ask: Counterparty {
                        order_id: taker.id,
                        user_id: taker.user_id,
                    },
                    size_filled: fill,
                    price: level_price,
                });

                if let Some(filled) = level.fill_front(fill) {
                    self.locations.remove(&filled.id);
                }
                taker.fill(fill);
            }

            if level.is_empty() {
                self.bids.remove_level(level_price);
            }
        }
        matches
    }

    /// Cancel a resting order by id.
    ///
    /// Unknown ids (never placed, already filled, already cancelled) are a
    /// typed error and leave the book untouched.
    pub fn cancel(&mut self, order_id: OrderId) -> Result<Order, EngineError> {
        let location = self
            .locations
            .remove(&order_id)
            .ok_or(EngineError::OrderNotFound { order_id })?;

        let removed = match location.side {
            Side::Bid => self.bids.remove(&order_id, location.price),
            Side::Ask => self.asks.remove(&order_id, location.price),
        };
        // Locations and level queues are updated together under the write
        // lock; an indexed order missing from its level is a defect.
        Ok(removed.expect("resting order missing from its price level"))
    }

    /// Head of the best bid level, or None when the side is empty.
    pub fn best_bid(&self) -> Option<BookOrder> {
        let level = self.bids.best_level()?;
        level
            .front()
            .map(|o| BookOrder::from_resting(o, level.price()))
    }

    /// Head of the best ask level, or None when the side is empty.
    pub fn best_ask(&self) -> Option<BookOrder> {
        let level = self.asks.best_level()?;
        level
            .front()
            .map(|o| BookOrder::from_resting(o, level.price()))
    }

    pub fn bid_total_volume(&self) -> Quantity {
        self.bids.total_volume()
    }

    pub fn ask_total_volume(&self) -> Quantity {
        self.asks.total_volume()
    }

    /// Every resting order on both sides, best price first.
    pub fn snapshot(&self) -> BookSnapshot {
        let asks = self
            .asks
            .iter_best_first()
            .flat_map(|level| {
                level
                    .orders()
                    .map(|o| BookOrder::from_resting(o, level.price()))
            })
            .collect();
        let bids = self
            .bids
            .iter_best_first()
            .flat_map(|level| {
                level
                    .orders()
                    .map(|o| BookOrder::from_resting(o, level.price()))
            })
            .collect();

        BookSnapshot {
            total_bid_volume: self.bids.total_volume(),
            total_ask_volume: self.asks.total_volume(),
            asks,
            bids,
        }
    }

    /// The given user's resting orders, split by side, best price first.
    pub fn user_orders(&self, user_id: UserId) -> UserOrders {
        let snapshot = self.snapshot();
        UserOrders {
            asks: snapshot
                .asks
                .into_iter()
                .filter(|o| o.user_id == user_id)
                .collect(),
            bids: snapshot
                .bids
                .into_iter()
                .filter(|o| o.user_id == user_id)
                .collect(),
        }
    }

    /// Executed trades in matching order.
    pub fn trades(&self) -> &[Trade] {
        &self.trades
    }

    /// Number of resting orders across both sides.
    pub fn resting_order_count(&self) -> usize {
        self.locations.len()
    }

    #[cfg(test)]
    fn assert_consistent(&self) {
        let mut indexed = 0;
        for level in self.asks.iter_best_first() {
            assert!(!level.is_empty(), "ask level registered but empty");
            let sum = level
                .orders()
                .fold(Quantity::zero(), |acc, o| acc + o.size);
            assert_eq!(level.total_volume(), sum, "ask volume cache drifted");
            for order in level.orders() {
                assert!(!order.size.is_zero(), "zero-size order resting");
                let loc = self.locations.get(&order.id).expect("ask not indexed");
                assert_eq!(loc.side, Side::Ask);
                assert_eq!(loc.price, level.price());
                indexed += 1;
            }
        }
        for level in self.bids.iter_best_first() {
            assert!(!level.is_empty(), "bid level registered but empty");
            let sum = level
                .orders()
                .fold(Quantity::zero(), |acc, o| acc + o.size);
            assert_eq!(level.total_volume(), sum, "bid volume cache drifted");
            for order in level.orders() {
                assert!(!order.size.is_zero(), "zero-size order resting");
                let loc = self.locations.get(&order.id).expect("bid not indexed");
                assert_eq!(loc.side, Side::Bid);
                assert_eq!(loc.price, level.price());
                indexed += 1;
            }
        }
        assert_eq!(indexed, self.locations.len(), "dangling order locations");
    }
}
