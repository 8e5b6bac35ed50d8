//! Errors raised while building the Govee client.

/// Failure to construct a [`GoveeClient`](crate::GoveeClient).
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// No API key was configured.
    #[error("Govee API key is empty")]
    MissingApiKey,

    /// The configured base URL does not parse.
    #[error("invalid Govee base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The underlying HTTP client could not be initialised.
    #[error("failed to build HTTP client")]
    Http(#[from] reqwest::Error),
}
