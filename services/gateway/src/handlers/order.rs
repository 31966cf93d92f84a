//! Order placement, cancellation, and per-user listing

use crate::error::AppError;
use crate::models::{
    CancelOrderResponse, OrderView, PlaceOrderRequest, PlaceOrderResponse, UserOrdersResponse,
};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use matching_engine::Match;
use rust_decimal::Decimal;
use std::time::{SystemTime, UNIX_EPOCH};
use types::errors::EngineError;
use types::ids::{OrderId, UserId};
use types::order::{Order, OrderType, Side};

pub async fn place_order(
    State(state): State<AppState>,
    Json(payload): Json<PlaceOrderRequest>,
) -> Result<Json<PlaceOrderResponse>, AppError> {
    let book = state.book(&payload.market)?;
    let side = Side::from_bid(payload.bid);

    let order_id = match payload.order_type {
        OrderType::Limit => {
            let price = payload
                .price
                .ok_or_else(|| AppError::Validation("limit order requires a price".into()))?;

            let mut book = book.write();
            let order_id = book.allocate_order_id();
            let order = Order::new(order_id, payload.user_id, side, payload.size, unix_nanos());
            book.place_limit(price, order)?;
            drop(book);

            tracing::info!(
                id = %order_id,
                user = %payload.user_id,
                %price,
                size = %payload.size,
                bid = payload.bid,
                "limit order placed"
            );
            order_id
        }
        OrderType::Market => {
            let mut book = book.write();
            let order_id = book.allocate_order_id();
            let order = Order::new(order_id, payload.user_id, side, payload.size, unix_nanos());
            let matches = book.place_market(order, unix_nanos())?;
            drop(book);

            let (size_filled, avg_price) = fill_summary(&matches);
            tracing::info!(
                id = %order_id,
                user = %payload.user_id,
                %size_filled,
                %avg_price,
                bid = payload.bid,
                "market order filled"
            );
            order_id
        }
    };

    Ok(Json(PlaceOrderResponse { order_id }))
}

pub async fn cancel_order(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<CancelOrderResponse>, AppError> {
    let order_id = OrderId::new(id);

    // The wire addresses cancellation by id alone; try each market's book.
    for book in state.books() {
        match book.write().cancel(order_id) {
            Ok(order) => {
                tracing::info!(id = %order_id, user = %order.user_id, "order canceled");
                return Ok(Json(CancelOrderResponse {
                    msg: "order deleted".to_string(),
                }));
            }
            Err(EngineError::OrderNotFound { .. }) => continue,
            Err(err) => return Err(err.into()),
        }
    }

    Err(AppError::Engine(EngineError::OrderNotFound { order_id }))
}

pub async fn get_user_orders(
    State(state): State<AppState>,
    Path(user_id): Path<u64>,
) -> Result<Json<UserOrdersResponse>, AppError> {
    let user_id = UserId::new(user_id);

    let mut asks = Vec::new();
    let mut bids = Vec::new();
    for book in state.books() {
        let orders = book.read().user_orders(user_id);
        asks.extend(orders.asks.into_iter().map(OrderView::from));
        bids.extend(orders.bids.into_iter().map(OrderView::from));
    }

    Ok(Json(UserOrdersResponse { asks, bids }))
}

/// Total size filled and the size-weighted average price across the matches
/// of one market order.
fn fill_summary(matches: &[Match]) -> (Decimal, Decimal) {
    let mut size_filled = Decimal::ZERO;
    let mut notional = Decimal::ZERO;
    for m in matches {
        size_filled += m.size_filled.as_decimal();
        notional += m.size_filled.as_decimal() * m.price.as_decimal();
    }

    let avg_price = if size_filled.is_zero() {
        Decimal::ZERO
    } else {
        notional / size_filled
    };
    (size_filled, avg_price)
}

fn unix_nanos() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as i64)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use matching_engine::Counterparty;
    use types::numeric::{Price, Quantity};

    fn match_at(price: u64, size: u64) -> Match {
        Match {
            bid: Counterparty {
                order_id: OrderId::new(1),
                user_id: UserId::new(1),
            },
            ask: Counterparty {
                order_id: OrderId::new(2),
                user_id: UserId::new(2),
            },
            size_filled: Quantity::from_u64(size),
            price: Price::from_u64(price),
        }
    }

    #[test]
    fn test_fill_summary_is_size_weighted() {
        // 3 @ 100 and 1 @ 104: the unweighted mean would be 102, the
        // volume-weighted average is 101
        let (filled, avg) = fill_summary(&[match_at(100, 3), match_at(104, 1)]);
        assert_eq!(filled, Decimal::from(4));
        assert_eq!(avg, Decimal::from(101));
    }

    #[test]
    fn test_fill_summary_empty() {
        let (filled, avg) = fill_summary(&[]);
        assert_eq!(filled, Decimal::ZERO);
        assert_eq!(avg, Decimal::ZERO);
    }
}
