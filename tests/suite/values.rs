//! Classification, containment and identifiers over dynamic values

use chrono::{TimeZone, Utc};
use serde_json::json;
use unikit_types::{Callable, ErrorValue, Haystack, IdConfig, Kind, Pattern, ShapeError, Value};
use unikit_utils::{IdGenerator, classify, contains, contains_in, generate_id};

#[test]
fn classify_every_kind() {
    let date = Utc.with_ymd_and_hms(1999, 12, 31, 23, 59, 59).unwrap();
    let cases = [
        (Value::from(json!({"a": {"b": 1}})), "Object"),
        (Value::from(json!([[1], [2]])), "Array"),
        (Value::from("text"), "String"),
        (Value::from(f64::INFINITY), "Number"),
        (Value::from(true), "Boolean"),
        (Value::Null, "Null"),
        (Value::Undefined, "Undefined"),
        (Value::from(Callable::new("Point", |_| Value::Null)), "Function"),
        (Value::from(Pattern::new(r"\d+").unwrap()), "RegExp"),
        (Value::from(date), "Date"),
        (Value::from(ErrorValue::named("RangeError", "out of range")), "Error"),
    ];

    for (value, label) in cases {
        assert_eq!(classify(&value).as_str(), label);
        assert_eq!(label.parse::<Kind>(), Ok(classify(&value)));
    }
}

#[test]
fn containment_examples() {
    let object = Value::from(json!({"a": 1, "b": 2}));
    let array = Value::from(json!([1, 2, 3]));

    assert_eq!(contains_in(&object, &Value::from("a")), Ok(true));
    assert_eq!(contains_in(&Value::from(json!({"a": 1})), &Value::from("z")), Ok(false));
    assert_eq!(contains_in(&array, &Value::from(2)), Ok(true));
    assert_eq!(contains_in(&Value::from("hello"), &Value::from("ell")), Ok(true));
}

#[test]
fn explicit_mode_disambiguates_length_like_keys() {
    // A mapping with a "length" key is still searched by key.
    let object = Value::from(json!({"length": 2, "0": "a"}));
    let mapping = object.as_mapping().unwrap();

    assert!(contains(Haystack::Keys(mapping), &Value::from("length")));
    assert!(contains(Haystack::Keys(mapping), &Value::from(0)));
    assert!(!contains(Haystack::Keys(mapping), &Value::from("a")));
}

#[test]
fn containment_on_scalars_is_an_error() {
    assert_eq!(
        contains_in(&Value::from(12), &Value::from(1)),
        Err(ShapeError::NotAHaystack(Kind::Number))
    );
}

#[test]
fn identifiers() {
    assert_eq!(generate_id(0), "");
    let id = generate_id(10);
    assert_eq!(id.len(), 10);
    assert!(id.chars().all(|c| matches!(c, 'a'..='z' | '1'..='9')));

    let config: IdConfig = serde_json::from_str(r#"{"alphabet": "AB"}"#).unwrap();
    let generator = IdGenerator::new(config);
    assert!(generator.generate(20).chars().all(|c| c == 'A' || c == 'B'));
}
