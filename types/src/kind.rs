//! Runtime category labels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Value;

/// The closed set of categories a [`Value`] can belong to.
///
/// The label is a property of the value's variant, never of any name the
/// value carries: a function named `Widget` is still a `Function`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Kind {
    Object,
    Array,
    String,
    Number,
    Boolean,
    Null,
    Undefined,
    Function,
    RegExp,
    Date,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown kind label: {0:?}")]
pub struct UnknownKindError(pub String);

/// Predicates in priority order. The first one that accepts a value names it.
const PREDICATES: [(fn(&Value) -> bool, Kind); 11] = [
    (Value::is_object, Kind::Object),
    (Value::is_array, Kind::Array),
    (Value::is_string, Kind::String),
    (Value::is_number, Kind::Number),
    (Value::is_boolean, Kind::Boolean),
    (Value::is_null, Kind::Null),
    (Value::is_undefined, Kind::Undefined),
    (Value::is_function, Kind::Function),
    (Value::is_regexp, Kind::RegExp),
    (Value::is_date, Kind::Date),
    (Value::is_error, Kind::Error),
];

impl Kind {
    pub const ALL: [Kind; 11] = [
        Kind::Object,
        Kind::Array,
        Kind::String,
        Kind::Number,
        Kind::Boolean,
        Kind::Null,
        Kind::Undefined,
        Kind::Function,
        Kind::RegExp,
        Kind::Date,
        Kind::Error,
    ];

    /// Classify a value.
    #[must_use]
    pub fn of(value: &Value) -> Kind {
        PREDICATES
            .iter()
            .find_map(|(accepts, kind)| accepts(value).then_some(*kind))
            // Every variant has a predicate above.
            .unwrap_or(Kind::Undefined)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Kind::Object => "Object",
            Kind::Array => "Array",
            Kind::String => "String",
            Kind::Number => "Number",
            Kind::Boolean => "Boolean",
            Kind::Null => "Null",
            Kind::Undefined => "Undefined",
            Kind::Function => "Function",
            Kind::RegExp => "RegExp",
            Kind::Date => "Date",
            Kind::Error => "Error",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = UnknownKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Kind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownKindError(s.to_string()))
    }
}

impl TryFrom<String> for Kind {
    type Error = UnknownKindError;

    fn try_from(value: String) -> Result<Self, UnknownKindError> {
        value.parse()
    }
}

impl From<Kind> for &'static str {
    fn from(kind: Kind) -> Self {
        kind.as_str()
    }
}
