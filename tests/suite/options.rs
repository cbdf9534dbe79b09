//! Option merging as done when a request overrides client defaults

use pretty_assertions::assert_eq;
use serde_json::json;
use unikit_types::Value;
use unikit_utils::{merge, merge_values};

use crate::common::{mapping, request_defaults};

#[test]
fn request_overrides_defaults() {
    let defaults = request_defaults();
    let options = mapping(json!({"method": "POST", "body": "{}"}));

    let merged = merge(Some(&defaults), Some(&options));

    assert_eq!(
        merged,
        mapping(json!({
            "method": "POST",
            "timeout": 30,
            "headers": {"accept": "*/*"},
            "follow_redirects": true,
            "body": "{}",
        }))
    );
    assert_eq!(
        merged.keys().collect::<Vec<_>>(),
        vec!["method", "timeout", "headers", "follow_redirects", "body"]
    );
}

#[test]
fn every_key_survives_and_right_side_wins() {
    let a = mapping(json!({"x": 1, "y": 2}));
    let b = mapping(json!({"y": 3, "z": 4}));

    let merged = merge(Some(&a), Some(&b));

    for key in a.keys().chain(b.keys()) {
        assert!(merged.contains_key(key), "{key}");
    }
    for (key, value) in &b {
        assert_eq!(merged.get(key), Some(value));
    }
}

#[test]
fn header_tables_are_not_merged_deeply() {
    let defaults = request_defaults();
    let options = mapping(json!({"headers": {"content-type": "text/plain"}}));

    let merged = merge(Some(&defaults), Some(&options));

    assert_eq!(
        merged.get("headers"),
        Some(&Value::from(json!({"content-type": "text/plain"})))
    );
    // Defaults still carry their own header table.
    assert_eq!(
        defaults.get("headers"),
        Some(&Value::from(json!({"accept": "*/*"})))
    );
}

#[test]
fn missing_options_leave_defaults() {
    let defaults = request_defaults();
    assert_eq!(merge(Some(&defaults), None), defaults);
    assert_eq!(merge_values(&Value::from(defaults.clone()), &Value::Undefined), defaults);
}
