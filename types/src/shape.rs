//! Explicit shape tags for operations that treat a value either as a mapping
//! or as a sequence.
//!
//! Callers pick the mode by constructing the variant they mean. The
//! `TryFrom<&Value>` impls are the only place a mode is inferred from a value,
//! and they fail loudly for values that fit neither mode.

use thiserror::Error;

use crate::{Kind, Mapping, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("cannot search a value of kind {0} (expected Object, Array or String)")]
    NotAHaystack(Kind),
    #[error("cannot match against a value of kind {0} (expected Object or Array)")]
    NotCandidates(Kind),
}

/// Where a containment check looks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Haystack<'a> {
    /// Own keys of a mapping.
    Keys(&'a Mapping),
    /// Elements of a sequence, by equality.
    Elements(&'a [Value]),
    /// Substrings of a string.
    Text(&'a str),
}

impl<'a> TryFrom<&'a Value> for Haystack<'a> {
    type Error = ShapeError;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(mapping) => Ok(Haystack::Keys(mapping)),
            Value::Array(items) => Ok(Haystack::Elements(items)),
            Value::String(text) => Ok(Haystack::Text(text)),
            other => Err(ShapeError::NotAHaystack(other.kind())),
        }
    }
}

/// What a string is matched against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Candidates<'a> {
    /// Each element is a probe; a hit yields the element itself.
    Elements(&'a [Value]),
    /// Each key is a probe; a hit yields the value stored under it.
    Keys(&'a Mapping),
}

impl<'a> TryFrom<&'a Value> for Candidates<'a> {
    type Error = ShapeError;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(items) => Ok(Candidates::Elements(items)),
            Value::Object(mapping) => Ok(Candidates::Keys(mapping)),
            other => Err(ShapeError::NotCandidates(other.kind())),
        }
    }
}
