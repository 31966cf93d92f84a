//! Wire models for the HTTP API
//!
//! Field names follow the published contract (PascalCase, `UserID`/`ID`/
//! `OrderID` capitalized as shown). Order rows carry raw decimals rather
//! than the engine's positive-only newtypes so that an empty top of book can
//! be rendered as the zero-valued record.

use matching_engine::BookOrder;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use types::ids::{MarketId, OrderId, UserId};
use types::numeric::{Price, Quantity};
use types::order::OrderType;
use types::trade::Trade;

/// Body of `POST /order`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlaceOrderRequest {
    #[serde(rename = "UserID")]
    pub user_id: UserId,
    #[serde(rename = "Type")]
    pub order_type: OrderType,
    pub bid: bool,
    pub size: Quantity,
    /// Required for limit orders, ignored for market orders.
    #[serde(default)]
    pub price: Option<Price>,
    pub market: MarketId,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlaceOrderResponse {
    #[serde(rename = "OrderID")]
    pub order_id: OrderId,
}

#[derive(Debug, Clone, Serialize)]
pub struct CancelOrderResponse {
    pub msg: String,
}

/// A resting order as rendered on the wire. `Default` is the zero-valued
/// record used for an empty top of book.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderView {
    #[serde(rename = "UserID")]
    pub user_id: u64,
    #[serde(rename = "ID")]
    pub id: u64,
    pub price: Decimal,
    pub size: Decimal,
    pub bid: bool,
    pub timestamp: i64,
}

impl From<BookOrder> for OrderView {
    fn from(order: BookOrder) -> Self {
        Self {
            user_id: order.user_id.as_u64(),
            id: order.id.as_u64(),
            price: order.price.as_decimal(),
            size: order.size.as_decimal(),
            bid: order.side.is_bid(),
            timestamp: order.timestamp,
        }
    }
}

/// Body of `GET /book/:market`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BookResponse {
    pub total_bid_volume: Decimal,
    pub total_ask_volume: Decimal,
    pub asks: Vec<OrderView>,
    pub bids: Vec<OrderView>,
}

/// Body of `GET /order/:user_id`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserOrdersResponse {
    pub asks: Vec<OrderView>,
    pub bids: Vec<OrderView>,
}

/// One executed trade as rendered on the wire. `Bid` is the taker's side.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TradeView {
    pub price: Decimal,
    pub size: Decimal,
    pub bid: bool,
    pub timestamp: i64,
}

impl From<&Trade> for TradeView {
    fn from(trade: &Trade) -> Self {
        Self {
            price: trade.price.as_decimal(),
            size: trade.size.as_decimal(),
            bid: trade.side.is_bid(),
            timestamp: trade.timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::order::Side;

    #[test]
    fn test_place_order_request_wire_shape() {
        let json = r#"{
            "UserID": 8888,
            "Type": "LIMIT",
            "Bid": true,
            "Size": "10",
            "Price": "100.5",
            "Market": "ETH"
        }"#;

        let request: PlaceOrderRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.user_id, UserId::new(8888));
        assert_eq!(request.order_type, OrderType::Limit);
        assert!(request.bid);
        assert_eq!(request.size, Quantity::from_u64(10));
        assert_eq!(request.price, Some(Price::from_str("100.5").unwrap()));
        assert_eq!(request.market.as_str(), "ETH");
    }

    #[test]
    fn test_market_order_request_without_price() {
        let json = r#"{
            "UserID": 1,
            "Type": "MARKET",
            "Bid": false,
            "Size": "3",
            "Market": "ETH"
        }"#;

        let request: PlaceOrderRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.order_type, OrderType::Market);
        assert!(request.price.is_none());
    }

    #[test]
    fn test_place_order_response_field_name() {
        let response = PlaceOrderResponse {
            order_id: OrderId::new(7),
        };
        assert_eq!(serde_json::to_string(&response).unwrap(), r#"{"OrderID":7}"#);
    }

    #[test]
    fn test_empty_top_of_book_is_zero_record() {
        let json = serde_json::to_value(OrderView::default()).unwrap();
        assert_eq!(json["UserID"], 0);
        assert_eq!(json["ID"], 0);
        assert_eq!(json["Price"], "0");
        assert_eq!(json["Bid"], false);
    }

    #[test]
    fn test_order_view_from_book_order() {
        let view = OrderView::from(BookOrder {
            id: OrderId::new(3),
            user_id: UserId::new(6667),
            side: Side::Ask,
            price: Price::from_u64(100),
            size: Quantity::from_u64(5),
            timestamp: 42,
        });

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["ID"], 3);
        assert_eq!(json["UserID"], 6667);
        assert_eq!(json["Price"], "100");
        assert_eq!(json["Size"], "5");
        assert_eq!(json["Bid"], false);
        assert_eq!(json["Timestamp"], 42);
    }

    #[test]
    fn test_trade_view_wire_shape() {
        let trade = Trade::new(Price::from_u64(100), Quantity::from_u64(2), Side::Bid, 42);
        let json = serde_json::to_value(TradeView::from(&trade)).unwrap();
        assert_eq!(json["Price"], "100");
        assert_eq!(json["Size"], "2");
        assert_eq!(json["Bid"], true);
        assert_eq!(json["Timestamp"], 42);
    }
}
