use thiserror::Error;

/// Top-level error type for the storefront.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Error from the commerce API (transport, HTTP status, or GraphQL errors).
    #[error("commerce error: {0}")]
    Commerce(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error (reading the config file).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON from the commerce API.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
