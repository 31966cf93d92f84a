//! Central error type for the gateway
//!
//! Maps the engine's typed failures onto HTTP statuses: validation and
//! liquidity failures are 400s, lookup failures 404s. Nothing here carries
//! partial effects; every error leaves the book as it was.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use types::errors::EngineError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("unknown market: {0}")]
    UnknownMarket(String),

    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("internal server error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        let (status, code) = match &self {
            AppError::UnknownMarket(_) => (StatusCode::BAD_REQUEST, "UNKNOWN_MARKET"),
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION"),
            AppError::Engine(EngineError::InvalidQuantity) => {
                (StatusCode::BAD_REQUEST, "INVALID_QUANTITY")
            }
            AppError::Engine(EngineError::InsufficientLiquidity { .. }) => {
                (StatusCode::BAD_REQUEST, "INSUFFICIENT_LIQUIDITY")
            }
            AppError::Engine(EngineError::OrderNotFound { .. }) => {
                (StatusCode::NOT_FOUND, "ORDER_NOT_FOUND")
            }
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let body = Json(json!({
            "error": code,
            "message": message
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::ids::OrderId;

    #[test]
    fn test_order_not_found_maps_to_404() {
        let err = AppError::Engine(EngineError::OrderNotFound {
            order_id: OrderId::new(1),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_unknown_market_maps_to_400() {
        let response = AppError::UnknownMarket("BTC".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
