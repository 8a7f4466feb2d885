use crate::server::{
    error::{request::RequestError, Error},
    model::app::AppState,
};

/// Uppercase `ticker` when it is the one this instance serves.
///
/// # Returns
/// - `Ok(String)` - The supported ticker
/// - `Err(Error::RequestError)` - Any other ticker
pub fn ensure_supported_ticker(state: &AppState, ticker: &str) -> Result<String, Error> {
    if ticker.trim().eq_ignore_ascii_case(&state.supported_ticker) {
        return Ok(state.supported_ticker.clone());
    }

    Err(RequestError::UnsupportedTicker {
        ticker: ticker.to_string(),
        supported: state.supported_ticker.clone(),
    }
    .into())
}
