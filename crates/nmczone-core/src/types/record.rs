use serde::{Deserialize, Serialize};
use std::fmt;

/// DNS record types a name can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordKind {
    /// Canonical name (`alias` directive)
    Cname,
    /// IPv4 address (`ip` directive)
    A,
    /// IPv6 address (`ip6` directive)
    Aaaa,
    /// Delegation (`ns` directive)
    Ns,
    /// Subtree redirection (`translate` directive)
    Dname,
    /// Free text (`info` directive)
    Txt,
}

impl RecordKind {
    /// All kinds, in the order used for statistics.
    pub const ALL: [Self; 6] = [
        Self::Cname,
        Self::A,
        Self::Aaaa,
        Self::Ns,
        Self::Dname,
        Self::Txt,
    ];

    /// Master-file mnemonic for the type
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cname => "CNAME",
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Ns => "NS",
            Self::Dname => "DNAME",
            Self::Txt => "TXT",
        }
    }

    /// Returns true for CNAME
    #[must_use]
    pub const fn is_cname(self) -> bool {
        matches!(self, Self::Cname)
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated record produced by the resolver.
///
/// `target` is already in its zone-file form: FQDN for name-valued types,
/// the address literal for A/AAAA and the escaped payload for TXT.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolvedRecord {
    /// Record type
    #[serde(rename = "type")]
    pub kind: RecordKind,

    /// Owner name
    pub domain: String,

    /// Record data
    pub target: String,
}

impl ResolvedRecord {
    /// Create a record
    pub fn new(kind: RecordKind, domain: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            kind,
            domain: domain.into(),
            target: target.into(),
        }
    }

    /// Render the record as one master-file line (no trailing newline)
    #[must_use]
    pub fn zone_line(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ResolvedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            RecordKind::Txt => write!(f, "{} IN TXT \"{}\"", self.domain, self.target),
            kind => write!(f, "{} IN {} {}", self.domain, kind, self.target),
        }
    }
}
