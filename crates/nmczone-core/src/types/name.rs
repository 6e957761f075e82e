use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ResolvedRecord;

/// A registered name and its decoded value, as delivered by the registry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawName {
    /// Name with the namespace prefix removed (e.g. `example`)
    pub name: String,

    /// Decoded JSON value of the name
    pub json: Value,

    /// Block height the listing was taken at
    #[serde(default)]
    pub block: u64,
}

impl RawName {
    /// Create a raw name
    pub fn new(name: impl Into<String>, json: Value, block: u64) -> Self {
        Self {
            name: name.into(),
            json,
            block,
        }
    }
}

/// A deferred `import` directive.
///
/// Collected during resolution and handed on untouched; nothing in this
/// crate follows the reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportIntent {
    /// Name whose records should be imported
    #[serde(rename = "import")]
    pub import_name: String,

    /// Domain the import is anchored at
    pub domain: String,
}

impl ImportIntent {
    /// Create an import intent
    pub fn new(import_name: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            import_name: import_name.into(),
            domain: domain.into(),
        }
    }
}

/// Everything one name (or one subtree of it) resolved to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionResult {
    /// CNAME records, in encounter order
    pub cnames: Vec<ResolvedRecord>,

    /// A, AAAA, NS, DNAME and TXT records, in encounter order
    pub others: Vec<ResolvedRecord>,

    /// Deferred imports, in encounter order
    pub imports: Vec<ImportIntent>,
}

impl ResolutionResult {
    /// Append another result after this one
    pub fn merge(&mut self, other: Self) {
        self.cnames.extend(other.cnames);
        self.others.extend(other.others);
        self.imports.extend(other.imports);
    }

    /// Add a record to the list matching its kind
    pub fn push(&mut self, record: ResolvedRecord) {
        if record.kind.is_cname() {
            self.cnames.push(record);
        } else {
            self.others.push(record);
        }
    }

    /// Total number of records (imports excluded)
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.cnames.len() + self.others.len()
    }

    /// Returns true if nothing was produced
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cnames.is_empty() && self.others.is_empty() && self.imports.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RecordKind;

    #[test]
    fn test_push_routes_by_kind() {
        let mut result = ResolutionResult::default();
        result.push(ResolvedRecord::new(RecordKind::A, "a.bit.", "1.2.3.4"));
        result.push(ResolvedRecord::new(RecordKind::Cname, "b.bit.", "c.bit."));

        assert_eq!(result.cnames.len(), 1);
        assert_eq!(result.others.len(), 1);
        assert_eq!(result.record_count(), 2);
    }

    #[test]
    fn test_merge_keeps_order() {
        let mut first = ResolutionResult::default();
        first.push(ResolvedRecord::new(RecordKind::A, "a.bit.", "1.1.1.1"));
        let mut second = ResolutionResult::default();
        second.push(ResolvedRecord::new(RecordKind::A, "b.bit.", "2.2.2.2"));
        second.imports.push(ImportIntent::new("d/other", "b.bit."));

        first.merge(second);

        assert_eq!(first.others[0].domain, "a.bit.");
        assert_eq!(first.others[1].domain, "b.bit.");
        assert_eq!(first.imports.len(), 1);
    }

    #[test]
    fn test_import_intent_json_shape() {
        let intent = ImportIntent::new("d/other", "www.example.bit.");
        let json = serde_json::to_value(&intent).unwrap();
        assert_eq!(json["import"], "d/other");
        assert_eq!(json["domain"], "www.example.bit.");
    }
}
