//! TXT payload encoding.
//!
//! A TXT value is written as its JSON string literal (quotes included,
//! everything outside printable ASCII escaped as `\uXXXX`), with every
//! double quote then backslash-escaped so the whole literal survives inside
//! the zone file's own quotes. The result is pure ASCII.

/// Encode a TXT value for a zone file line.
///
/// `hello "world"` becomes `\"hello \\"world\\"\"`.
#[must_use]
pub fn encode_txt(text: &str) -> String {
    json_ascii_literal(text).replace('"', "\\\"")
}

/// JSON string literal with all non-printable-ASCII characters escaped.
fn json_ascii_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');

    for ch in text.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0c}' => out.push_str("\\f"),
            ' '..='~' => out.push(ch),
            _ => {
                let mut units = [0u16; 2];
                for unit in ch.encode_utf16(&mut units) {
                    out.push_str(&format!("\\u{unit:04x}"));
                }
            }
        }
    }

    out.push('"');
    out
}
