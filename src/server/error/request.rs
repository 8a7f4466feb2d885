use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum RequestError {
    #[error("Unsupported ticker '{ticker}'. Only {supported} is supported.")]
    UnsupportedTicker { ticker: String, supported: String },
    #[error("Missing required field: {0}")]
    MissingField(String),
    #[error("Invalid value for {field}: {reason}")]
    InvalidField { field: String, reason: String },
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        error_response(StatusCode::BAD_REQUEST, self.to_string())
    }
}
