use thiserror::Error;

/// Errors that can occur when talking to the shelter service.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("unauthorized: session cookie missing or expired")]
    Unauthorized,

    #[error("service returned status {0}")]
    Api(u16),
}
