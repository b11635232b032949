use crate::certificate::AttributeValue;
use unicode_normalization::UnicodeNormalization;

/// Characters that are backslash escaped in attribute values.
pub const ESCAPED_CHARS : &'static [char] = &[',', '+', '<', '>', ';', '"', '\\'];

/// An attribute value rendered for a canonical name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CanonicalValue {
    /// Escaped, case and whitespace untouched.
    pub raw: String,
    /// What two names are compared by.
    pub normalized: String,
}

impl From<&AttributeValue> for CanonicalValue {
    fn from(value: &AttributeValue) -> Self {
        match value {
            AttributeValue::DirectoryString(ds) => {
                let raw = escape(ds.native());
                let normalized = normalize(&raw);
                CanonicalValue { raw: raw, normalized: normalized }
            },
            AttributeValue::Other(der) => {
                let hex = format!("#{}", hex::encode(der));
                CanonicalValue { raw: hex.clone(), normalized: hex }
            },
        }
    }
}

/// Backslash escapes [`ESCAPED_CHARS`] in a single pass, then escapes a
/// leading `#` so the value cannot be mistaken for a hex encoded one.
pub fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len() + 1);
    for c in value.chars() {
        if ESCAPED_CHARS.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    if escaped.starts_with('#') {
        escaped.insert(0, '\\');
    }
    escaped
}

/// Normalizes an escaped value:
///
/// * runs of U+0020 collapse to one space; tabs, no-break spaces and
///   other whitespace are left alone,
/// * anything at or below U+0020 is trimmed from both ends, which covers
///   the C0 controls but not DEL or Unicode whitespace,
/// * the result is upper cased then lower cased, so `ß` becomes `ss` and
///   `ı` becomes `i`,
/// * and finally put in NFKD.
///
/// A value made only of spaces and controls normalizes to the empty
/// string.
pub fn normalize(raw: &str) -> String {
    collapse_spaces(raw)
        .trim_matches(|c: char| c <= ' ')
        .to_uppercase()
        .to_lowercase()
        .nfkd()
        .collect()
}

fn collapse_spaces(value: &str) -> String {
    let mut collapsed = String::with_capacity(value.len());
    let mut previous_space = false;
    for c in value.chars() {
        if c == ' ' && previous_space {
            continue;
        }
        previous_space = c == ' ';
        collapsed.push(c);
    }
    collapsed
}
