//! Shared test utilities and fixtures

#![allow(dead_code)]

use serde_json::json;
use unikit_types::{Mapping, Value};

/// Build a mapping from a JSON object literal.
pub fn mapping(value: serde_json::Value) -> Mapping {
    match Value::from(value) {
        Value::Object(m) => m,
        other => panic!("fixture is not an object: {other:?}"),
    }
}

/// Body parsers keyed by a fragment of the media type.
pub fn parser_table() -> Mapping {
    mapping(json!({
        "json": "json-parser",
        "xml": "xml-parser",
        "x-www-form-urlencoded": "form-parser",
        "text": "text-parser",
    }))
}

/// Request defaults as a client would ship them.
pub fn request_defaults() -> Mapping {
    mapping(json!({
        "method": "GET",
        "timeout": 30,
        "headers": {"accept": "*/*"},
        "follow_redirects": true,
    }))
}
