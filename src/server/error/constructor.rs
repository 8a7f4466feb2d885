use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::{error_response, InternalServerError};

#[derive(Error, Debug)]
pub enum ConstructorError {
    /// The constructor refused the request, e.g. insufficient funds.
    #[error("{0}")]
    Rejected(String),
    /// The constructor exited unsuccessfully for any other reason.
    #[error("Transaction construction failed: {0}")]
    Failed(String),
    #[error("Failed to parse constructor output: {0}")]
    InvalidOutput(String),
    #[error("Failed to run transaction constructor: {0}")]
    Spawn(#[from] std::io::Error),
}

impl IntoResponse for ConstructorError {
    fn into_response(self) -> Response {
        match self {
            Self::Rejected(_) => {
                tracing::debug!("{}", self);

                error_response(StatusCode::BAD_REQUEST, self.to_string())
            }
            Self::Failed(_) | Self::InvalidOutput(_) => {
                tracing::error!("{}", self);

                error_response(StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            Self::Spawn(_) => InternalServerError(self).into_response(),
        }
    }
}
