use thiserror::Error;

/// Result type alias for zone operations
pub type Result<T> = std::result::Result<T, ZoneError>;

/// Errors that can abort zone generation
#[derive(Error, Debug)]
pub enum ZoneError {
    /// Block height times multiplier does not fit a serial number
    #[error("zone serial overflow: block {block} x multiplier {multiplier}")]
    SerialOverflow {
        /// Block height reported by the registry
        block: u64,
        /// Configured serial multiplier
        multiplier: u64,
    },

    /// JSON parsing/serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Why a single directive produced no records.
///
/// These never leave the resolver: a failing directive contributes nothing
/// and resolution moves on to the next directive.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The value handed to the resolver is not a JSON object
    #[error("value is not a mapping")]
    NotAMapping,

    /// A directive's value has a shape the directive cannot use
    #[error("directive `{directive}` expected {expected}")]
    UnexpectedShape {
        /// Directive key, e.g. `map`
        directive: &'static str,
        /// Human readable description of the accepted shape
        expected: &'static str,
    },
}
