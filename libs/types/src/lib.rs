//! Shared type definitions for the exchange
//!
//! Everything the matching engine and the HTTP boundary agree on lives here:
//! identifiers, fixed-point numerics, orders, trades, and the error taxonomy.
//!
//! # Modules
//! - `ids`: identifier newtypes (OrderId, UserId, MarketId)
//! - `numeric`: fixed-point decimal types (Price, Quantity)
//! - `order`: order and side types
//! - `trade`: executed trade record
//! - `errors`: engine error taxonomy

pub mod errors;
pub mod ids;
pub mod numeric;
pub mod order;
pub mod trade;
