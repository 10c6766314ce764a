use thiserror::Error;

/// Errors raised while building a transport.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Invalid target URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("HTTP client construction failed: {0}")]
    Client(#[from] reqwest::Error),
}
