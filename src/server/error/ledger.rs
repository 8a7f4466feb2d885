use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Collection '{name}' not found for ticker {ticker}")]
    CollectionNotFound { ticker: String, name: String },
    #[error("Inscription or serial number '{0}' not found in any collection")]
    ItemNotFound(String),
    #[error("Invalid serial range '{0}', expected 'start-end' with start <= end")]
    InvalidRangeFormat(String),
    #[error("Collection {0} has no serial ranges configured")]
    NoRanges(i32),
    #[error("Collection {0} has a supply exceeding the representable range")]
    SupplyOverflow(i32),
}

impl IntoResponse for LedgerError {
    fn into_response(self) -> Response {
        match self {
            Self::CollectionNotFound { .. } | Self::ItemNotFound(_) => {
                tracing::debug!("{}", self);

                error_response(StatusCode::NOT_FOUND, self.to_string())
            }
            Self::InvalidRangeFormat(_) | Self::NoRanges(_) | Self::SupplyOverflow(_) => {
                tracing::warn!("{}", self);

                error_response(StatusCode::BAD_REQUEST, self.to_string())
            }
        }
    }
}
