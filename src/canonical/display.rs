/// Escapes a raw value for printing, the way Python's `repr` does without
/// the surrounding quotes. Backslashes are doubled, `\t`, `\n` and `\r` keep
/// their usual escapes, and characters that are not printable become
/// `\xNN`, `\uNNNN` or `\UNNNNNNNN`. A `'` is escaped only when the value
/// also holds a `"`. Everything else, non-ASCII letters included, is
/// written as is.
pub fn escape_for_display(raw: &str) -> String {
    let escape_single_quote = raw.contains('\'') && raw.contains('"');
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\t' => escaped.push_str("\\t"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\'' if escape_single_quote => escaped.push_str("\\'"),
            c if is_printable(c) => escaped.push(c),
            c => {
                let cp = u32::from(c);
                escaped.push_str(&match cp {
                    0..=0xff => format!("\\x{:02x}", cp),
                    0x100..=0xffff => format!("\\u{:04x}", cp),
                    _ => format!("\\U{:08x}", cp),
                });
            },
        }
    }
    escaped
}

// Format characters (general category Cf).
const FORMAT_CHARS : &'static [(char, char)] = &[
    ('\u{ad}', '\u{ad}'),
    ('\u{600}', '\u{605}'),
    ('\u{61c}', '\u{61c}'),
    ('\u{6dd}', '\u{6dd}'),
    ('\u{70f}', '\u{70f}'),
    ('\u{890}', '\u{891}'),
    ('\u{8e2}', '\u{8e2}'),
    ('\u{180e}', '\u{180e}'),
    ('\u{200b}', '\u{200f}'),
    ('\u{202a}', '\u{202e}'),
    ('\u{2060}', '\u{2064}'),
    ('\u{2066}', '\u{206f}'),
    ('\u{feff}', '\u{feff}'),
    ('\u{fff9}', '\u{fffb}'),
    ('\u{110bd}', '\u{110bd}'),
    ('\u{110cd}', '\u{110cd}'),
    ('\u{13430}', '\u{1343f}'),
    ('\u{1bca0}', '\u{1bca3}'),
    ('\u{1d173}', '\u{1d17a}'),
    ('\u{e0001}', '\u{e0001}'),
    ('\u{e0020}', '\u{e007f}'),
];

// Private use (general category Co).
const PRIVATE_USE_CHARS : &'static [(char, char)] = &[
    ('\u{e000}', '\u{f8ff}'),
    ('\u{f0000}', '\u{ffffd}'),
    ('\u{100000}', '\u{10fffd}'),
];

// Controls, separators other than the space, format and private use
// characters are not printable. Unassigned code points are not tracked and
// are written as is.
fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true
    }
    let in_ranges = |ranges: &[(char, char)]| ranges.iter().any(|&(lo, hi)| lo <= c && c <= hi);
    !(c.is_control()
        || c.is_whitespace()
        || in_ranges(FORMAT_CHARS)
        || in_ranges(PRIVATE_USE_CHARS))
}
