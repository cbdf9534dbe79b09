use unikit_types::{Kind, Value};

/// Name the runtime category of `value`.
///
/// Every value has exactly one label; see [`Kind`] for the full set.
#[must_use]
pub fn classify(value: &Value) -> Kind {
    value.kind()
}
