//! Fetch error definitions.

use thiserror::Error;

/// Errors that can occur while fetching the stats payload.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Request could not be sent, the connection failed or the body could not be read.
    #[error("transport error: {0}")]
    Transport(String),

    /// Request did not complete within the configured timeout.
    #[error("request timed out after {0} seconds")]
    Timeout(u64),

    /// Endpoint answered with something other than 200 OK.
    #[error("unexpected status code: {code}")]
    UnexpectedStatus { code: u16 },
}

/// Result type for fetch operations.
pub type FetchResult<T> = Result<T, FetchError>;
