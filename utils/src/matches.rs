//! Substring matching against a list of probes or a lookup table.
//!
//! Typical use is picking a handler from a `Content-Type`: the keys of a
//! table such as `{"json": ..., "xml": ...}` are searched for inside the
//! header, and the values of the keys that occur are returned.

use unikit_types::{Candidates, Mapping, ShapeError, Value};

/// Collect every candidate that occurs in `text`, in candidate order.
///
/// - `Candidates::Elements`: an element whose property key occurs in `text`
///   is returned as is.
/// - `Candidates::Keys`: a key that occurs in `text` contributes the value
///   stored under it.
///
/// An empty probe occurs in every string.
#[must_use]
pub fn match_all<'a>(text: &str, candidates: Candidates<'a>) -> Vec<&'a Value> {
    match candidates {
        Candidates::Elements(items) => items
            .iter()
            .filter(|item| {
                item.to_property_key()
                    .is_some_and(|probe| text.contains(probe.as_ref()))
            })
            .collect(),
        Candidates::Keys(mapping) => match_keys(text, mapping),
    }
}

/// First result of [`match_all`], if any.
#[must_use]
pub fn match_first<'a>(text: &str, candidates: Candidates<'a>) -> Option<&'a Value> {
    match_all(text, candidates).into_iter().next()
}

/// [`match_all`] with the mode taken from the candidates' kind: arrays by
/// element, objects by key.
pub fn match_all_in<'a>(
    text: &str,
    candidates: &'a Value,
) -> Result<Vec<&'a Value>, ShapeError> {
    let candidates = Candidates::try_from(candidates).inspect_err(|e| {
        tracing::trace!(error = %e, "match against unsupported candidates");
    })?;
    Ok(match_all(text, candidates))
}

/// String probes that occur in `text`.
#[must_use]
pub fn match_elements<'a, S: AsRef<str>>(text: &str, probes: &'a [S]) -> Vec<&'a str> {
    probes
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|probe| text.contains(probe))
        .collect()
}

#[must_use]
pub fn first_element_match<'a, S: AsRef<str>>(text: &str, probes: &'a [S]) -> Option<&'a str> {
    probes
        .iter()
        .map(AsRef::<str>::as_ref)
        .find(|probe| text.contains(probe))
}

/// Values of the keys of `table` that occur in `text`.
#[must_use]
pub fn match_keys<'a>(text: &str, table: &'a Mapping) -> Vec<&'a Value> {
    table
        .iter()
        .filter(|(key, _)| text.contains(key))
        .map(|(_, value)| value)
        .collect()
}

#[must_use]
pub fn first_key_match<'a>(text: &str, table: &'a Mapping) -> Option<&'a Value> {
    table
        .iter()
        .find(|(key, _)| text.contains(key))
        .map(|(_, value)| value)
}
