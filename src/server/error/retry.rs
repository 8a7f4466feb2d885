use sea_orm::DbErr;

use super::{node::NodeError, Error};

/// Strategy for handling errors in a retry context
pub enum ErrorRetryStrategy {
    /// Retry with exponential backoff (transient failures)
    Retry,
    /// Failed permanently
    Fail,
}

impl Error {
    /// Determine error retry strategy based upon application Error type
    pub fn to_retry_strategy(&self) -> ErrorRetryStrategy {
        match self {
            Self::DbErr(db_err) => match db_err {
                // Pool exhausted or connection dropped, transient
                DbErr::ConnectionAcquire(_) => ErrorRetryStrategy::Retry,
                DbErr::Conn(_) => ErrorRetryStrategy::Retry,

                // Query, conversion & record errors won't resolve with a retry
                _ => ErrorRetryStrategy::Fail,
            },

            // Node unreachable or overloaded
            Self::NodeError(NodeError::Transport(_)) => ErrorRetryStrategy::Retry,
            Self::NodeError(NodeError::Http(status)) if *status >= 500 => {
                ErrorRetryStrategy::Retry
            }

            // The node rejected the call, retrying yields the same answer
            Self::NodeError(_) => ErrorRetryStrategy::Fail,

            Self::ConfigError(_) => ErrorRetryStrategy::Fail,
            Self::RequestError(_) => ErrorRetryStrategy::Fail,
            Self::LedgerError(_) => ErrorRetryStrategy::Fail,
            Self::AllocatorError(_) => ErrorRetryStrategy::Fail,
            Self::RateLimitError(_) => ErrorRetryStrategy::Fail,
            Self::ConstructorError(_) => ErrorRetryStrategy::Fail,
            Self::InternalError(_) => ErrorRetryStrategy::Fail,
            Self::SchedulerError(_) => ErrorRetryStrategy::Fail,
        }
    }
}
