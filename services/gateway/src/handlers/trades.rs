//! Trade history

use crate::error::AppError;
use crate::models::TradeView;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use types::ids::MarketId;

pub async fn get_trades(
    State(state): State<AppState>,
    Path(market): Path<MarketId>,
) -> Result<Json<Vec<TradeView>>, AppError> {
    let book = state.book(&market)?.read();
    let trades = book.trades().iter().map(TradeView::from).collect();
    Ok(Json(trades))
}
