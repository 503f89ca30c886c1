use thiserror::Error;

/// Why a prompt did not produce a response body.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The endpoint answered with a status other than 200.
    #[error("API error: {0}")]
    ApiStatus(u16),

    /// Timeout, DNS failure, refused connection or a broken body stream.
    #[error("Network error: {0}")]
    Network(String),

    /// Anything else, e.g. a prompt that cannot be turned into a URL.
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() || err.is_decode() {
            Self::Unexpected(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}
