//! Record resolver: turns one name's JSON value into typed records.
//!
//! The value is an object whose keys are directives. Each directive is
//! evaluated on its own and yields either a partial [`ResolutionResult`] or a
//! [`ResolveError`]; errors are logged at `debug` and dropped, so a single
//! malformed directive never costs the rest of the name its records.
//!
//! `map` recurses into subdomains depth-first. Output order follows the
//! object's key order, then list order inside each directive.

use serde_json::{json, Value};
use std::borrow::Cow;
use tracing::debug;

use crate::encoding::encode_txt;
use crate::validate::{
    is_valid_domain_name, is_valid_ipv4, is_valid_ipv6, is_valid_txt, string_values, to_fqdn,
};
use crate::{ImportIntent, RecordKind, ResolutionResult, ResolveError, ResolvedRecord};

/// Recognized keys of a name value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// CNAME targets
    Alias,
    /// IPv4 addresses
    Ip,
    /// IPv6 addresses
    Ip6,
    /// Delegated name servers
    Ns,
    /// DNAME targets
    Translate,
    /// TXT strings
    Info,
    /// Subdomain values keyed by label
    Map,
    /// Records to pull in from other names
    Import,
}

impl Directive {
    /// Look up a directive by its JSON key
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "alias" => Some(Self::Alias),
            "ip" => Some(Self::Ip),
            "ip6" => Some(Self::Ip6),
            "ns" => Some(Self::Ns),
            "translate" => Some(Self::Translate),
            "info" => Some(Self::Info),
            "map" => Some(Self::Map),
            "import" => Some(Self::Import),
            _ => None,
        }
    }

    /// The JSON key for this directive
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Alias => "alias",
            Self::Ip => "ip",
            Self::Ip6 => "ip6",
            Self::Ns => "ns",
            Self::Translate => "translate",
            Self::Info => "info",
            Self::Map => "map",
            Self::Import => "import",
        }
    }
}

/// Resolve one name into records.
///
/// An invalid `domain` yields an empty result, as does a `value` that is not
/// a JSON object.
#[must_use]
pub fn resolve(domain: &str, value: &Value) -> ResolutionResult {
    if !is_valid_domain_name(domain) {
        debug!(domain, "skipping name with invalid domain");
        return ResolutionResult::default();
    }

    resolve_subtree(domain, value)
}

/// Resolve a value for an already validated domain.
fn resolve_subtree(domain: &str, value: &Value) -> ResolutionResult {
    let mut result = ResolutionResult::default();

    let Some(directives) = value.as_object() else {
        debug!(domain, error = %ResolveError::NotAMapping, "no records for subtree");
        return result;
    };

    for (key, directive_value) in directives {
        let Some(directive) = Directive::from_key(key) else {
            continue;
        };

        match evaluate(directive, domain, directive_value) {
            Ok(partial) => result.merge(partial),
            Err(error) => {
                debug!(domain, directive = directive.key(), %error, "directive dropped");
            }
        }
    }

    result
}

/// Evaluate a single directive for `domain`.
pub fn evaluate(
    directive: Directive,
    domain: &str,
    value: &Value,
) -> Result<ResolutionResult, ResolveError> {
    let mut out = ResolutionResult::default();

    match directive {
        Directive::Alias => {
            for target in string_values(value).filter(|t| is_valid_domain_name(t)) {
                out.push(ResolvedRecord::new(RecordKind::Cname, domain, to_fqdn(target)));
            }
        }
        Directive::Ip => {
            for literal in string_values(value).filter(|t| is_valid_ipv4(t)) {
                out.push(ResolvedRecord::new(RecordKind::A, domain, literal));
            }
        }
        Directive::Ip6 => {
            for literal in string_values(value).filter(|t| is_valid_ipv6(t)) {
                out.push(ResolvedRecord::new(RecordKind::Aaaa, domain, literal));
            }
        }
        Directive::Ns => {
            // Wildcards cannot be delegated.
            if !domain.starts_with('*') {
                for target in string_values(value).filter(|t| is_ns_target(t)) {
                    out.push(ResolvedRecord::new(RecordKind::Ns, domain, to_fqdn(target)));
                }
            }
        }
        Directive::Translate => {
            for target in string_values(value).filter(|t| is_valid_domain_name(t)) {
                out.push(ResolvedRecord::new(RecordKind::Dname, domain, to_fqdn(target)));
            }
        }
        Directive::Info => {
            for text in string_values(value).filter(|t| is_valid_txt(t)) {
                out.push(ResolvedRecord::new(RecordKind::Txt, domain, encode_txt(text)));
            }
        }
        Directive::Map => out = resolve_map(domain, value)?,
        Directive::Import => out.imports = collect_imports(domain, value)?,
    }

    Ok(out)
}

/// NS targets must be host names, not address literals.
fn is_ns_target(target: &str) -> bool {
    is_valid_domain_name(target) && !is_valid_ipv4(target) && !is_valid_ipv6(target)
}

fn resolve_map(domain: &str, value: &Value) -> Result<ResolutionResult, ResolveError> {
    let entries = value.as_object().ok_or(ResolveError::UnexpectedShape {
        directive: "map",
        expected: "an object keyed by subdomain label",
    })?;

    let mut out = ResolutionResult::default();

    for (label, sub_value) in entries {
        let sub_domain = if label.is_empty() {
            domain.to_owned()
        } else {
            format!("{label}.{domain}")
        };

        let sub_value = normalize_legacy(sub_value);

        if is_valid_domain_name(&sub_domain) {
            out.merge(resolve_subtree(&sub_domain, &sub_value));
        } else {
            debug!(domain = %sub_domain, "skipping invalid subdomain");
        }
    }

    Ok(out)
}

/// Rewrite a bare address (the v1 value format) into an `ip`/`ip6` object.
fn normalize_legacy(value: &Value) -> Cow<'_, Value> {
    match value.as_str() {
        Some(literal) if is_valid_ipv4(literal) => Cow::Owned(json!({ "ip": [literal] })),
        Some(literal) if is_valid_ipv6(literal) => Cow::Owned(json!({ "ip6": [literal] })),
        _ => Cow::Borrowed(value),
    }
}

const IMPORT_SHAPE: ResolveError = ResolveError::UnexpectedShape {
    directive: "import",
    expected: "a name or a list of [name] / [name, subdomain] lists",
};

fn collect_imports(domain: &str, value: &Value) -> Result<Vec<ImportIntent>, ResolveError> {
    match value {
        Value::String(name) => Ok(vec![ImportIntent::new(name.as_str(), domain)]),
        Value::Array(entries) => {
            let mut imports = Vec::with_capacity(entries.len());
            for entry in entries {
                if let Some(intent) = import_entry(domain, entry)? {
                    imports.push(intent);
                }
            }
            Ok(imports)
        }
        _ => Err(IMPORT_SHAPE),
    }
}

/// `[name]` imports at `domain`, `[name, sub, ..]` at `sub.domain`; `[]` is ignored.
fn import_entry(domain: &str, entry: &Value) -> Result<Option<ImportIntent>, ResolveError> {
    let parts = entry.as_array().ok_or(IMPORT_SHAPE)?;

    match parts.as_slice() {
        [] => Ok(None),
        [name] => Ok(Some(ImportIntent::new(import_text(name)?, domain))),
        [name, sub, ..] => Ok(Some(ImportIntent::new(
            import_text(name)?,
            format!("{}.{domain}", import_text(sub)?),
        ))),
    }
}

fn import_text(part: &Value) -> Result<&str, ResolveError> {
    part.as_str().ok_or(IMPORT_SHAPE)
}
