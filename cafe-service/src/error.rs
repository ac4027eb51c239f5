use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use diesel_async::pooled_connection::PoolError;
use shared::{CartError, ErrorResponse};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Catalog unavailable: {0}")]
    CatalogUnavailable(String),

    /// Carries the underlying cause verbatim; nothing from the attempt was kept.
    #[error("{0}")]
    OrderPlacementFailed(String),

    /// No connection freed up before the acquire timeout. Callers see it as a
    /// failed placement.
    #[error("Order placement failed: no database connection available ({0})")]
    PoolExhausted(String),

    #[error("Corrupted row: {0}")]
    Corrupted(String),
}

impl StoreError {
    pub(crate) fn read_pool(err: bb8::RunError<PoolError>) -> Self {
        StoreError::CatalogUnavailable(err.to_string())
    }

    pub(crate) fn write_pool(err: bb8::RunError<PoolError>) -> Self {
        match err {
            bb8::RunError::TimedOut => StoreError::PoolExhausted(err.to_string()),
            bb8::RunError::User(e) => StoreError::OrderPlacementFailed(e.to_string()),
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Cart is empty")]
    EmptyCart,

    #[error("Invalid order: {0}")]
    InvalidOrder(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<CartError> for ApiError {
    fn from(err: CartError) -> Self {
        match err {
            CartError::EmptyCart => ApiError::EmptyCart,
            other => ApiError::InvalidOrder(other.to_string()),
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::EmptyCart | ApiError::InvalidOrder(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(ErrorResponse { error: self.to_string() })).into_response()
    }
}
