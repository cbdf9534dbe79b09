//! Membership checks.
//!
//! A mapping is searched by key, a sequence by element and a string by
//! substring. The mode is chosen by the caller through [`Haystack`].

use unikit_types::{Haystack, Mapping, ShapeError, Value};

/// Whether `needle`, as a property key, is one of `mapping`'s keys.
#[must_use]
pub fn contains_key(mapping: &Mapping, needle: &Value) -> bool {
    needle
        .to_property_key()
        .is_some_and(|key| mapping.contains_key(&key))
}

/// Whether `items` has an element equal to `needle`.
///
/// `NaN` equals nothing, itself included.
#[must_use]
pub fn contains_element(items: &[Value], needle: &Value) -> bool {
    items.contains(needle)
}

/// Whether `needle`, as a property key, occurs in `text`.
#[must_use]
pub fn contains_substring(text: &str, needle: &Value) -> bool {
    needle
        .to_property_key()
        .is_some_and(|probe| text.contains(probe.as_ref()))
}

#[must_use]
pub fn contains(haystack: Haystack<'_>, needle: &Value) -> bool {
    match haystack {
        Haystack::Keys(mapping) => contains_key(mapping, needle),
        Haystack::Elements(items) => contains_element(items, needle),
        Haystack::Text(text) => contains_substring(text, needle),
    }
}

/// [`contains`] with the mode taken from the haystack's kind: objects by
/// key, arrays by element, strings by substring.
pub fn contains_in(haystack: &Value, needle: &Value) -> Result<bool, ShapeError> {
    let haystack = Haystack::try_from(haystack).inspect_err(|e| {
        tracing::trace!(error = %e, "containment check on unsearchable value");
    })?;
    Ok(contains(haystack, needle))
}
