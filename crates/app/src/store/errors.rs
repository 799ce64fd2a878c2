//! Store errors.

use thiserror::Error;

/// Errors that can occur when talking to the document store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The bearer token was missing, expired or rejected.
    #[error("store rejected the session token")]
    Unauthorized,

    /// The store returned a non-2xx response or an unexpected body.
    #[error("unexpected response from store: {0}")]
    UnexpectedResponse(String),
}
