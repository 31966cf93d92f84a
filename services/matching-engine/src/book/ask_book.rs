//! Ask (sell-side) order book
//!
//! Mirror of the bid side with the opposite ordering: the best ask is the
//! lowest price, which is the BTreeMap's first key.

use std::collections::BTreeMap;
use types::ids::OrderId;
use types::numeric::{Price, Quantity};
use types::order::Order;

use super::price_level::PriceLevel;

/// Sell side of the book, best (lowest) price first.
#[derive(Debug, Clone, Default)]
pub struct AskBook {
    levels: BTreeMap<Price, PriceLevel>,
}

impl AskBook {
    pub fn new() -> Self {
        Self {
            levels: BTreeMap::new(),
        }
    }

    /// Add a resting order at `price`, creating the level lazily.
    pub fn add(&mut self, price: Price, order: Order) {
        self.levels
            .entry(price)
            .or_insert_with(|| PriceLevel::new(price))
            .push_order(order);
    }

    /// Remove a resting order, dropping its level if that left it empty.
    pub fn remove(&mut self, order_id: &OrderId, price: Price) -> Option<Order> {
        let level = self.levels.get_mut(&price)?;
        let removed = level.remove_order(order_id)?;
        if level.is_empty() {
            self.levels.remove(&price);
        }
        Some(removed)
    }

    /// Best ask = lowest price.
    pub fn best_price(&self) -> Option<Price> {
        self.levels.keys().next().copied()
    }

    pub fn best_level(&self) -> Option<&PriceLevel> {
        self.levels.values().next()
    }

    pub fn best_level_mut(&mut self) -> Option<&mut PriceLevel> {
        self.levels.values_mut().next()
    }

    pub fn remove_level(&mut self, price: Price) {
        self.levels.remove(&price);
    }

    /// Aggregate resting volume across all levels.
    pub fn total_volume(&self) -> Quantity {
        self.levels
            .values()
            .fold(Quantity::zero(), |acc, level| acc + level.total_volume())
    }

    /// Levels best-first (ascending price).
    pub fn iter_best_first(&self) -> impl Iterator<Item = &PriceLevel> {
        self.levels.values()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }
}
