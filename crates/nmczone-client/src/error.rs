use thiserror::Error;

/// Result type alias for registry operations
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Errors that can occur when talking to the name registry
#[derive(Error, Debug)]
pub enum RegistryError {
    /// The node rejected the RPC credentials
    #[error("authentication failed: check the RPC user and password")]
    Unauthorized,

    /// The node answered with a non-success HTTP status and no RPC error body
    #[error("HTTP status {code}: {message}")]
    Status {
        /// HTTP status code
        code: u16,
        /// Response body, if any
        message: String,
    },

    /// The node returned a JSON-RPC error object
    #[error("RPC error ({code}): {message}")]
    Rpc {
        /// JSON-RPC error code
        code: i64,
        /// Error message from the node
        message: String,
    },

    /// The response carried neither a result nor an error
    #[error("RPC call `{method}` returned no result")]
    MissingResult {
        /// Method that was called
        method: String,
    },

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Request timed out
    #[error("request timed out after {0} seconds")]
    Timeout(u64),

    /// Connection failed
    #[error("connection failed: {0}")]
    Connection(String),

    /// Invalid endpoint URL
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// JSON parsing/serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RegistryError {
    /// Returns true if the error is retryable
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Timeout(_) | Self::Connection(_))
    }

    /// Returns true if the error is due to authentication
    #[must_use]
    pub const fn is_auth_error(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}
