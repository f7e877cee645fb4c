//! End-to-end properties of the recovery pipeline.

use json_salvage::prelude::*;
use serde_json::{json, Value};

#[test]
fn test_inputs_without_a_brace_pair_yield_nothing() {
    for input in ["", "plain prose", "open { only", "close } only", "] [ , :"] {
        assert!(
            extract_first_json_object(input).is_none(),
            "input: {input:?}"
        );
    }
}

#[test]
fn test_exact_object_roundtrips() {
    let object = extract_first_json_object(r#"{"a": true}"#).unwrap();
    assert_eq!(Value::Object(object), json!({"a": true}));
}

#[test]
fn test_nested_object_recovered_through_repair() {
    let object = extract_first_json_object(r#"prefix {"a": {"b": 1}} suffix"#).unwrap();
    assert_eq!(Value::Object(object), json!({"a": {"b": 1}}));
}

#[test]
fn test_first_candidate_wins() {
    let object = extract_first_json_object(r#"{"x": 1} then {"y": 2}"#).unwrap();
    assert_eq!(Value::Object(object), json!({"x": 1}));
}

#[test]
fn test_swapping_candidates_swaps_the_result() {
    let object = extract_first_json_object(r#"{"y": 2} then {"x": 1}"#).unwrap();
    assert_eq!(Value::Object(object), json!({"y": 2}));
}

#[test]
fn test_never_balancing_input_yields_nothing() {
    assert!(extract_first_json_object("{{{").is_none());
    assert!(extract_first_json_object(r#"{"a": {"b": 1}"#).is_none());
}

#[test]
fn test_malformed_first_candidate_does_not_block_later_ones() {
    let object = extract_first_json_object(r#"{broken} {"ok": 1}"#).unwrap();
    assert_eq!(Value::Object(object), json!({"ok": 1}));
}

#[test]
fn test_extraction_is_idempotent_on_its_own_output() {
    let reply = r#"note {"a": {"b": [1, 2]}, "c": null} trailing"#;
    let first = extract_first_json_object(reply).unwrap();
    let serialized = serde_json::to_string(&first).unwrap();
    let second = extract_first_json_object(&serialized).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_top_level_arrays_and_scalars_are_not_objects() {
    assert!(extract_first_json_object("[1, 2, 3]").is_none());
    assert!(extract_first_json_object("42").is_none());
}

#[test]
fn test_cleaned_fenced_reply_extracts() {
    let reply = "```json\n{\"isPrescription\": true, \"drugExist\": false}\n```";
    let cleaned = ResponseCleaner::default().clean(reply);
    let object = extract_first_json_object(&cleaned).unwrap();
    assert_eq!(object["isPrescription"], true);
    assert_eq!(object["drugExist"], false);
}

#[test]
fn test_fenced_reply_extracts_even_without_cleanup() {
    // Cleanup is a courtesy; the scanner does not depend on it.
    let reply = "```json\n{\"ok\": 1}\n```";
    let object = extract_first_json_object(reply).unwrap();
    assert_eq!(Value::Object(object), json!({"ok": 1}));
}

#[test]
fn test_multibyte_text_around_candidates() {
    let reply = r#"résumé → {"läge": "bra"} ✓"#;
    let object = extract_first_json_object(reply).unwrap();
    assert_eq!(Value::Object(object), json!({"läge": "bra"}));
}

#[test]
fn test_all_objects_in_discovery_order() {
    let reply = r#"{"a": {"x": 1}} noise {"b": 2} tail"#;
    let objects = extract_all_json_objects(reply);
    let objects: Vec<Value> = objects.into_iter().map(Value::Object).collect();
    assert_eq!(objects, vec![json!({"a": {"x": 1}}), json!({"b": 2})]);
}
