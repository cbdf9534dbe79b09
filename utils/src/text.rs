//! Small pure text helpers.

/// U+FEFF, the zero-width no-break space (byte order mark).
const BOM: char = '\u{feff}';
/// U+0085, next line. Unicode whitespace, but kept by [`trim`].
const NEL: char = '\u{85}';

/// Unicode whitespace except NEL, plus the byte order mark. U+00A0 is already
/// Unicode whitespace.
fn is_trimmable(c: char) -> bool {
    (c.is_whitespace() && c != NEL) || c == BOM
}

/// Strip leading and trailing whitespace, byte order marks and no-break
/// spaces. Interior characters are left alone.
#[must_use]
pub fn trim(s: &str) -> &str {
    s.trim_matches(is_trimmable)
}

/// Replace the character at char index `index` with `replacement`.
///
/// An index at or past the end appends `replacement`.
#[must_use]
pub fn set_char_at(s: &str, index: usize, replacement: &str) -> String {
    let mut out = String::with_capacity(s.len() + replacement.len());
    out.extend(s.chars().take(index));
    out.push_str(replacement);
    out.extend(s.chars().skip(index.saturating_add(1)));
    out
}

/// Capitalize the first character of every `-` separated segment.
///
/// The rest of each segment keeps its casing, and empty segments stay empty:
/// `X-MY-header` becomes `X-MY-Header`.
#[must_use]
pub fn normalize_header_name(name: &str) -> String {
    name.split('-')
        .map(|segment| match segment.chars().next() {
            Some(first) => set_char_at(segment, 0, &first.to_uppercase().to_string()),
            None => String::new(),
        })
        .collect::<Vec<_>>()
        .join("-")
}
