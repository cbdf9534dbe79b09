//! Content-Type handling: header names, media types and parser lookup

use unikit_types::{Candidates, Value};
use unikit_utils::{
    first_key_match, match_all, match_first, mime_type, normalize_header_name, parse_mime_type,
    trim,
};

use crate::common::parser_table;

#[test]
fn raw_header_line_to_parser() {
    let line = "content-type:\u{feff} application/json ; charset=utf-8 \u{a0}";
    let (name, value) = line.split_once(':').unwrap();

    assert_eq!(normalize_header_name(name), "Content-Type");

    let media = parse_mime_type(trim(value)).unwrap();
    assert_eq!(media, "application/json");

    let table = parser_table();
    assert_eq!(
        first_key_match(media, &table),
        Some(&Value::from("json-parser"))
    );
}

#[test]
fn form_bodies_pick_the_form_parser() {
    let table = parser_table();
    let media = parse_mime_type("application/x-www-form-urlencoded; charset=utf-8").unwrap();

    assert_eq!(
        match_all(media, Candidates::Keys(&table)),
        vec![&Value::from("form-parser")]
    );
}

#[test]
fn several_parsers_can_match() {
    let table = parser_table();
    // "text/xml" contains both the "xml" and the "text" key.
    let found = match_all("text/xml", Candidates::Keys(&table));
    assert_eq!(
        found,
        vec![&Value::from("xml-parser"), &Value::from("text-parser")]
    );
    assert_eq!(
        match_first("text/xml", Candidates::Keys(&table)),
        Some(&Value::from("xml-parser"))
    );
}

#[test]
fn unknown_media_type_has_no_parser() {
    let table = parser_table();
    assert_eq!(match_first("image/png", Candidates::Keys(&table)), None);
}

#[test]
fn missing_header_value_is_not_parseable() {
    assert_eq!(mime_type(&Value::Undefined), None);
    assert_eq!(mime_type(&Value::Null), None);
    assert_eq!(parse_mime_type(""), None);
}

#[test]
fn normalized_names_are_stable() {
    for name in ["content-type", "Content-Length", "x-request-id", "ETag", "-"] {
        let once = normalize_header_name(name);
        assert_eq!(normalize_header_name(&once), once, "{name}");
    }
}
