use super::*;
use serde_json::{Value, json};

// =============================================================================
// EXTRACTION STATES
// =============================================================================

#[test]
fn missing_target_is_no_target() {
    assert_eq!(extract_target(&json!({"id": "x"})), TargetExtraction::NoTarget);
    assert_eq!(extract_target(&json!(null)), TargetExtraction::NoTarget);
    assert_eq!(extract_target(&json!("text")), TargetExtraction::NoTarget);
}

#[test]
fn target_without_source_is_no_source() {
    assert_eq!(extract_target(&json!({"target": {}})), TargetExtraction::NoSource);
    assert_eq!(extract_target(&json!({"target": "bare"})), TargetExtraction::NoSource);
    // A non-string source is unusable.
    assert_eq!(extract_target(&json!({"target": {"source": 7}})), TargetExtraction::NoSource);
}

#[test]
fn source_without_selector_is_plain() {
    let doc = json!({"target": {"source": "http://x/img.png"}});
    assert_eq!(extract_target(&doc), TargetExtraction::Plain { source: "http://x/img.png" });
}

#[test]
fn selector_without_value_is_plain() {
    let doc = json!({"target": {"source": "http://x/img.png", "selector": {"type": "SvgSelector"}}});
    assert_eq!(extract_target(&doc), TargetExtraction::Plain { source: "http://x/img.png" });
}

#[test]
fn selector_value_yields_overlay() {
    let doc = json!({
        "target": {
            "source": "http://x/img.png",
            "selector": {"type": "SvgSelector", "value": "<svg ><rect x=\"1\"/></svg>"}
        }
    });
    assert_eq!(
        extract_target(&doc),
        TargetExtraction::WithOverlay { source: "http://x/img.png", overlay: "<svg ><rect x=\"1\"/></svg>" }
    );
}

#[test]
fn multi_target_array_uses_first_element() {
    let doc = json!({"target": [{"source": "http://x/a.png"}, {"source": "http://x/b.png"}]});
    assert_eq!(extract_target(&doc), TargetExtraction::Plain { source: "http://x/a.png" });
}

// =============================================================================
// BODY DIMENSION FALLBACK
// =============================================================================

fn doc_with_body(body: Value) -> Value {
    json!({"target": {"source": "s"}, "body": body})
}

#[test]
fn finds_dimensions_regardless_of_order_or_key() {
    let doc = doc_with_body(json!([
        {"type": "TextualBody", "value": "unrelated"},
        {"purpose": "imageHeight", "value": 1080},
        {"anyKeyAtAll": "imageWidth", "value": "1920"}
    ]));
    assert_eq!(find_body_dimensions(&doc), Some((1920, 1080)));
}

#[test]
fn marker_must_be_an_attribute_value_not_a_key() {
    let doc = doc_with_body(json!([{"imageWidth": 640, "value": 640}]));
    assert_eq!(find_body_dimensions(&doc), None);
}

#[test]
fn missing_companion_value_is_no_fallback() {
    let doc = doc_with_body(json!([
        {"purpose": "imageWidth"},
        {"purpose": "imageHeight", "value": 100}
    ]));
    assert_eq!(find_body_dimensions(&doc), None);
}

#[test]
fn both_dimensions_required() {
    let doc = doc_with_body(json!([{"purpose": "imageWidth", "value": 640}]));
    assert_eq!(find_body_dimensions(&doc), None);
}

#[test]
fn single_body_object_is_a_one_element_collection() {
    let doc = doc_with_body(json!({"purpose": "imageWidth", "value": 640}));
    assert!(search_body_object(&doc, "imageWidth").is_some());
    assert_eq!(find_body_dimensions(&doc), None);
}

#[test]
fn non_positive_or_non_numeric_values_are_rejected() {
    for value in [json!(0), json!(-3), json!("abc"), json!(null), json!([])] {
        let doc = doc_with_body(json!([
            {"purpose": "imageWidth", "value": value},
            {"purpose": "imageHeight", "value": 100}
        ]));
        assert_eq!(find_body_dimensions(&doc), None, "{value:?}");
    }
}

#[test]
fn absent_body_is_no_fallback() {
    assert_eq!(find_body_dimensions(&json!({"target": {"source": "s"}})), None);
}
