//! HTTP endpoints.
//!
//! Handlers validate the ticker, apply rate limits and delegate to the services. Errors are
//! returned as [`Error`](crate::server::error::Error) and rendered by its `IntoResponse`.

pub mod bitcore;
pub mod node;
pub mod rc001;
pub mod util;
