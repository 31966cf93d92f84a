//! Shared gateway state
//!
//! One order book per market, each behind its own readers-writer lock.
//! Mutations (place, cancel, id allocation) take the write half; top-of-book,
//! volume, and snapshot queries take the read half. Engine calls are
//! synchronous and never await while a lock is held.

use crate::error::AppError;
use matching_engine::Orderbook;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use types::ids::MarketId;

#[derive(Clone)]
pub struct AppState {
    books: Arc<HashMap<MarketId, RwLock<Orderbook>>>,
}

impl AppState {
    /// Seed one empty order book per market. The market set is fixed for the
    /// life of the process.
    pub fn new<I, S>(markets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let books = markets
            .into_iter()
            .map(|symbol| (MarketId::new(symbol), RwLock::new(Orderbook::new())))
            .collect();
        Self {
            books: Arc::new(books),
        }
    }

    pub fn book(&self, market: &MarketId) -> Result<&RwLock<Orderbook>, AppError> {
        self.books
            .get(market)
            .ok_or_else(|| AppError::UnknownMarket(market.to_string()))
    }

    /// All books, for operations addressed by order id rather than market.
    pub fn books(&self) -> impl Iterator<Item = &RwLock<Orderbook>> {
        self.books.values()
    }
}
