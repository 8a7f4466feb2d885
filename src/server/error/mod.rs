//! Error types for the mintgate server.
//!
//! Each domain (configuration, ledger, allocation, rate limiting, node RPC, transaction
//! construction, request validation) has its own `thiserror` enum with an `IntoResponse`
//! mapping. They are aggregated into [`Error`], which controllers and services return so
//! `?` converts between them.

pub mod allocator;
pub mod config;
pub mod constructor;
pub mod ledger;
pub mod node;
pub mod rate_limit;
pub mod request;
pub mod retry;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        allocator::AllocatorError, config::ConfigError, constructor::ConstructorError,
        ledger::LedgerError, node::NodeError, rate_limit::RateLimitError, request::RequestError,
    },
};

/// Main error type for the mintgate server.
///
/// Domain errors keep their own HTTP mapping; database and scheduler errors, along with
/// anything else without a specific mapping, become a generic 500 response with the detail
/// logged.
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or invalid environment variable.
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Malformed or unsupported request.
    #[error(transparent)]
    RequestError(#[from] RequestError),
    /// Collection, range or item data is missing or malformed.
    #[error(transparent)]
    LedgerError(#[from] LedgerError),
    /// Serial number allocation failed.
    #[error(transparent)]
    AllocatorError(#[from] AllocatorError),
    /// Request rejected by the rate limiter.
    #[error(transparent)]
    RateLimitError(#[from] RateLimitError),
    /// Node RPC failure.
    #[error(transparent)]
    NodeError(#[from] NodeError),
    /// Transaction constructor failure.
    #[error(transparent)]
    ConstructorError(#[from] ConstructorError),
    /// Internal error indicating a bug in mintgate's code.
    #[error("Internal error, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Cron scheduler error (job registration, scheduler startup).
    #[error(transparent)]
    SchedulerError(#[from] tokio_cron_scheduler::JobSchedulerError),
}

/// Maps domain errors to their own responses, everything else to a 500.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::RequestError(err) => err.into_response(),
            Self::LedgerError(err) => err.into_response(),
            Self::AllocatorError(err) => err.into_response(),
            Self::RateLimitError(err) => err.into_response(),
            Self::NodeError(err) => err.into_response(),
            Self::ConstructorError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Builds a JSON `ErrorDto` response with the provided status and message.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// The error is logged, the client only receives a generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}
