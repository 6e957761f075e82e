//! Client configuration types.

use nmczone_core::Origin;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Retry configuration for transient failures
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retry attempts
    pub max_retries: u32,

    /// Initial backoff duration
    pub initial_backoff: Duration,

    /// Maximum backoff duration
    pub max_backoff: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl RetryConfig {
    /// Create a new retry configuration
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_retries: 3,
            initial_backoff: Duration::from_millis(500),
            max_backoff: Duration::from_secs(30),
        }
    }

    /// Set maximum retries
    #[must_use]
    pub const fn max_retries(mut self, max: u32) -> Self {
        self.max_retries = max;
        self
    }

    /// Set initial backoff duration
    #[must_use]
    pub const fn initial_backoff(mut self, duration: Duration) -> Self {
        self.initial_backoff = duration;
        self
    }

    /// Set maximum backoff duration
    #[must_use]
    pub const fn max_backoff(mut self, duration: Duration) -> Self {
        self.max_backoff = duration;
        self
    }

    /// Calculate backoff for a given attempt
    #[must_use]
    pub fn backoff_for(&self, attempt: u32) -> Duration {
        let initial = u64::try_from(self.initial_backoff.as_millis()).unwrap_or(u64::MAX);
        let max = u64::try_from(self.max_backoff.as_millis()).unwrap_or(u64::MAX);
        let backoff = initial.saturating_mul(2u64.saturating_pow(attempt));
        Duration::from_millis(backoff.min(max))
    }
}

/// Which RPC call reports the current block height
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeightMethod {
    /// `getinfo`, reading its `blocks` field
    #[default]
    Getinfo,
    /// `getblockcount`
    Getblockcount,
}

impl HeightMethod {
    /// RPC method name
    #[must_use]
    pub const fn rpc_method(self) -> &'static str {
        match self {
            Self::Getinfo => "getinfo",
            Self::Getblockcount => "getblockcount",
        }
    }
}

impl fmt::Display for HeightMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rpc_method())
    }
}

/// Maps registry names to zone names.
///
/// `d/example` is listed as the bare name `example`, which is validated as
/// such and later written as `example.bit.` under the default TLD.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Namespace {
    /// Prefix stripped from registry names
    pub prefix: String,

    /// Zone the stripped names live in; empty keeps names relative
    pub tld: String,
}

impl Default for Namespace {
    fn default() -> Self {
        Self {
            prefix: String::from("d/"),
            tld: String::from("bit"),
        }
    }
}

impl Namespace {
    /// Create a namespace mapping
    pub fn new(prefix: impl Into<String>, tld: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            tld: tld.into(),
        }
    }

    /// Bare name for a registry name, or `None` if it is outside the namespace
    #[must_use]
    pub fn zone_name(&self, registry_name: &str) -> Option<String> {
        registry_name
            .strip_prefix(self.prefix.as_str())
            .map(str::to_owned)
    }

    /// Origin the bare names are qualified against
    #[must_use]
    pub fn origin(&self) -> Origin {
        Origin::for_tld(&self.tld)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backoff_doubles_and_caps() {
        let config = RetryConfig::new()
            .initial_backoff(Duration::from_millis(100))
            .max_backoff(Duration::from_millis(350));

        assert_eq!(config.backoff_for(0), Duration::from_millis(100));
        assert_eq!(config.backoff_for(1), Duration::from_millis(200));
        assert_eq!(config.backoff_for(2), Duration::from_millis(350));
        assert_eq!(config.backoff_for(80), Duration::from_millis(350));
    }

    #[test]
    fn test_namespace_mapping() {
        let ns = Namespace::default();
        assert_eq!(ns.zone_name("d/example").as_deref(), Some("example"));
        assert_eq!(ns.zone_name("id/alice"), None);
        assert_eq!(ns.origin(), Origin::Zone("bit".into()));

        let bare = Namespace::new("d/", "");
        assert_eq!(bare.zone_name("d/example").as_deref(), Some("example"));
        assert_eq!(bare.origin(), Origin::Relative);
    }

    #[test]
    fn test_height_method_names() {
        let parsed: HeightMethod = serde_json::from_str("\"getblockcount\"").unwrap();
        assert_eq!(parsed, HeightMethod::Getblockcount);
        assert_eq!(HeightMethod::default().rpc_method(), "getinfo");
    }
}
