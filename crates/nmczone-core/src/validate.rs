//! Input validators and small normalization helpers.
//!
//! Everything here is a pure predicate or conversion. Values that fail a
//! check are dropped by the resolver, never reported.

use serde_json::Value;
use std::net::{Ipv4Addr, Ipv6Addr};

/// Domain names must be strictly shorter than this.
pub const MAX_DOMAIN_LEN: usize = 64;

/// TXT payloads must be strictly shorter than this many bytes.
pub const MAX_TXT_LEN: usize = 255;

/// Check a domain name.
///
/// Accepts any string built from `[A-Za-z0-9._-]` that starts with an
/// alphanumeric character and is shorter than [`MAX_DOMAIN_LEN`]. Empty
/// labels and leading/trailing hyphens are allowed on purpose: this is the
/// registry's notion of a name, not RFC 1035.
#[must_use]
pub fn is_valid_domain_name(name: &str) -> bool {
    name.len() < MAX_DOMAIN_LEN
        && name.as_bytes().first().is_some_and(u8::is_ascii_alphanumeric)
        && name.bytes().all(is_domain_byte)
}

const fn is_domain_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'.' | b'_' | b'-')
}

/// Check for a complete dotted-quad IPv4 literal
#[must_use]
pub fn is_valid_ipv4(literal: &str) -> bool {
    literal.parse::<Ipv4Addr>().is_ok()
}

/// Check for a complete IPv6 literal
#[must_use]
pub fn is_valid_ipv6(literal: &str) -> bool {
    literal.parse::<Ipv6Addr>().is_ok()
}

/// Check that a TXT string fits a single character-string
#[must_use]
pub fn is_valid_txt(text: &str) -> bool {
    text.len() < MAX_TXT_LEN
}

/// Append the root dot if it is missing
#[must_use]
pub fn to_fqdn(name: &str) -> String {
    if name.ends_with('.') {
        name.to_owned()
    } else {
        format!("{name}.")
    }
}

/// View a directive value as a list.
///
/// Every directive accepts either one value or an array of them; arrays are
/// returned as-is and anything else becomes a one-element slice.
#[must_use]
pub fn as_list(value: &Value) -> &[Value] {
    match value {
        Value::Array(items) => items,
        other => std::slice::from_ref(other),
    }
}

/// The string elements of a directive value, non-strings skipped
pub fn string_values(value: &Value) -> impl Iterator<Item = &str> {
    as_list(value).iter().filter_map(Value::as_str)
}
