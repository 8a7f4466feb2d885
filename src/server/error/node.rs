use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum NodeError {
    /// The node processed the call and returned a JSON-RPC error object.
    #[error("{message} (code {code})")]
    Rpc { code: i64, message: String },
    #[error("Failed to reach node: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Node responded with HTTP status {0}")]
    Http(u16),
    #[error("Unexpected node response: {0}")]
    InvalidResponse(String),
}

impl IntoResponse for NodeError {
    fn into_response(self) -> Response {
        match self {
            Self::Rpc { .. } => {
                tracing::debug!("{}", self);

                error_response(StatusCode::BAD_REQUEST, self.to_string())
            }
            _ => {
                tracing::error!("{}", self);

                error_response(
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Node is unavailable, please try again later",
                )
            }
        }
    }
}
