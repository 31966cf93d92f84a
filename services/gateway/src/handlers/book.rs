//! Book listing and top-of-book queries

use crate::error::AppError;
use crate::models::{BookResponse, OrderView};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use types::ids::MarketId;

pub async fn get_book(
    State(state): State<AppState>,
    Path(market): Path<MarketId>,
) -> Result<Json<BookResponse>, AppError> {
    let snapshot = state.book(&market)?.read().snapshot();

    Ok(Json(BookResponse {
        total_bid_volume: snapshot.total_bid_volume.as_decimal(),
        total_ask_volume: snapshot.total_ask_volume.as_decimal(),
        asks: snapshot.asks.into_iter().map(OrderView::from).collect(),
        bids: snapshot.bids.into_iter().map(OrderView::from).collect(),
    }))
}

pub async fn get_best_bid(
    State(state): State<AppState>,
    Path(market): Path<MarketId>,
) -> Result<Json<OrderView>, AppError> {
    let best = state.book(&market)?.read().best_bid();
    // zero-valued record when the side is empty
    Ok(Json(best.map(OrderView::from).unwrap_or_default()))
}

pub async fn get_best_ask(
    State(state): State<AppState>,
    Path(market): Path<MarketId>,
) -> Result<Json<OrderView>, AppError> {
    let best = state.book(&market)?.read().best_ask();
    Ok(Json(best.map(OrderView::from).unwrap_or_default()))
}
