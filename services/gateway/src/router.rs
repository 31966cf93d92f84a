use crate::handlers::{book, order, trades};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/order", post(order::place_order))
        // GET takes a user id, DELETE an order id
        .route(
            "/order/:id",
            get(order::get_user_orders).delete(order::cancel_order),
        )
        .route("/book/:market", get(book::get_book))
        .route("/book/:market/bid", get(book::get_best_bid))
        .route("/book/:market/ask", get(book::get_best_ask))
        .route("/trades/:market", get(trades::get_trades))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
