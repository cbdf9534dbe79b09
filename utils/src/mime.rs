//! Media type parsing.

use unikit_types::Value;

/// Return the media type of a `Content-Type` style string, without its
/// parameters.
///
/// `"text/html; charset=utf-8"` gives `Some("text/html")`. Spaces directly
/// before the first `;` are dropped; the token itself is not validated.
/// Returns `None` for the empty string.
#[must_use]
pub fn parse_mime_type(input: &str) -> Option<&str> {
    if input.is_empty() {
        return None;
    }
    let primary = match input.split_once(';') {
        Some((head, _)) => head.trim_end_matches(' '),
        None => input,
    };
    Some(primary)
}

/// [`parse_mime_type`] for dynamic values. Anything that is not a string has
/// no media type.
#[must_use]
pub fn mime_type(value: &Value) -> Option<&str> {
    value.as_str().and_then(parse_mime_type)
}
