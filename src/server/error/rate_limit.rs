use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum RateLimitError {
    #[error("Rate limit exceeded, please try again later")]
    Exceeded,
}

impl IntoResponse for RateLimitError {
    fn into_response(self) -> Response {
        error_response(StatusCode::TOO_MANY_REQUESTS, self.to_string())
    }
}
