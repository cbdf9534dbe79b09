//! Shallow mapping merge.

use unikit_types::{Mapping, Value};

/// Merge `options` over `defaults` into a new mapping.
///
/// Keys from `defaults` come first, in their order; a key also present in
/// `options` keeps its position but takes the `options` value. Keys only in
/// `options` follow, in their order. `None` counts as an empty mapping.
///
/// Values are copied as they are. Nested mappings are replaced, never merged.
#[must_use]
pub fn merge(defaults: Option<&Mapping>, options: Option<&Mapping>) -> Mapping {
    let mut merged = Mapping::new();
    let sources = [defaults, options];
    for source in sources.into_iter().flatten() {
        merged.extend(source.iter().map(|(k, v)| (k, v.clone())));
    }

    tracing::trace!(
        defaults = defaults.map_or(0, Mapping::len),
        options = options.map_or(0, Mapping::len),
        merged = merged.len(),
        "merged mappings"
    );
    merged
}

/// [`merge`] over dynamic values. Anything that is not an object counts as
/// empty.
#[must_use]
pub fn merge_values(defaults: &Value, options: &Value) -> Mapping {
    merge(defaults.as_mapping(), options.as_mapping())
}
