use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AllocatorError {
    #[error("No free serial number left in collection {collection_id} ({active} of {space} in use)")]
    RangeExhausted {
        collection_id: i32,
        active: usize,
        space: u64,
    },
}

impl IntoResponse for AllocatorError {
    fn into_response(self) -> Response {
        tracing::warn!("{}", self);

        error_response(StatusCode::CONFLICT, self.to_string())
    }
}
