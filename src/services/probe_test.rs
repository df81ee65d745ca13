use super::*;

// =============================================================================
// METHOD PARSING
// =============================================================================

#[test]
fn methods_parse_case_insensitively() {
    assert_eq!(ProbeMethod::parse("get").unwrap(), ProbeMethod::Get);
    assert_eq!(ProbeMethod::parse("Post").unwrap(), ProbeMethod::Post);
    assert_eq!(ProbeMethod::parse("DELETE").unwrap(), ProbeMethod::Delete);
    assert_eq!(ProbeMethod::parse("options").unwrap(), ProbeMethod::Options);
}

#[test]
fn unknown_method_is_rejected() {
    let err = ProbeMethod::parse("TRACE").unwrap_err();
    assert!(matches!(err, ProbeError::InvalidMethod(m) if m == "TRACE"));
}

#[test]
fn method_round_trips_through_as_str() {
    for raw in ["GET", "POST", "PUT", "DELETE", "HEAD", "OPTIONS"] {
        assert_eq!(ProbeMethod::parse(raw).unwrap().as_str(), raw);
    }
}

// =============================================================================
// CONTAINER DETECTION
// =============================================================================

#[test]
fn detects_all_container_type_spellings() {
    for t in ["ldp:Container", "ldp:BasicContainer", "AnnotationCollection", "http://www.w3.org/ns/ldp#BasicContainer"]
    {
        let payload = format!(r#"{{"@type": "{t}", "label": "c"}}"#);
        assert!(is_container_payload(&payload), "{t}");
    }
}

#[test]
fn detects_container_type_inside_array_with_whitespace() {
    let payload = "{\"@type\" :\n  [ \"ldp:BasicContainer\", \"AnnotationCollection\" ]}";
    assert!(is_container_payload(payload));
}

#[test]
fn container_type_match_is_case_insensitive() {
    assert!(is_container_payload(r#"{"@type": "LDP:basiccontainer"}"#));
}

#[test]
fn plain_annotations_are_not_containers() {
    assert!(!is_container_payload(r#"{"@type": "Annotation"}"#));
    assert!(!is_container_payload(r#"{"type": "ldp:BasicContainer"}"#));
    assert!(!is_container_payload(r#"{"@type": "ldp:BasicContainerX"}"#));
    assert!(!is_container_payload("not json at all"));
}

#[test]
fn later_type_declarations_still_match() {
    let payload = r#"{"@type": "Annotation", "nested": {"@type": "ldp:Container"}}"#;
    assert!(is_container_payload(payload));
}

// =============================================================================
// PROBER CONSTRUCTION
// =============================================================================

#[test]
fn prober_builds_with_timeouts() {
    assert!(EndpointProber::new(30, 10).is_ok());
}
