use super::*;

// =============================================================================
// RAW VIEW
// =============================================================================

#[test]
fn raw_view_is_escaped_and_preformatted() {
    let out = raw_view("{\"a\": \"<x> & y\"}");
    assert!(out.starts_with("<pre><code>"));
    assert!(out.ends_with("</code></pre>"));
    assert!(out.contains("&lt;x&gt; &amp; y"));
}

#[test]
fn raw_view_contains_no_unescaped_sensitive_characters() {
    let out = raw_view("a < b > c & d");
    let inner = out
        .strip_prefix("<pre><code>")
        .unwrap()
        .strip_suffix("</code></pre>")
        .unwrap();
    assert!(!inner.contains('<'));
    assert!(!inner.contains('>'));
    // Every '&' starts one of the three entities.
    for (i, _) in inner.match_indices('&') {
        let tail = &inner[i..];
        assert!(
            tail.starts_with("&amp;") || tail.starts_with("&lt;") || tail.starts_with("&gt;"),
            "bare & at {i} in {inner}"
        );
    }
}

#[test]
fn raw_view_of_empty_text_is_empty_block() {
    assert_eq!(raw_view(""), "<pre><code></code></pre>");
}

// =============================================================================
// PRETTY VIEW
// =============================================================================

#[test]
fn pretty_view_composes_all_three_stages() {
    let text = r#"{"source": "http://example.org/img.png", "n": 7}"#;
    let out = pretty_view(text);
    assert!(out.contains("<span class=\"key\">"));
    assert!(out.contains("<a href=\"http://example.org/img.png\""));
    assert!(out.contains("cascade-toggle"));
}

#[test]
fn link_wrapping_never_splits_a_classified_span() {
    let out = pretty_view(r#"{"u": "http://example.org/x"}"#);
    // The anchor opens after the string span opens and closes before it closes.
    let span_open = out.find("<span class=\"string\">").unwrap();
    let anchor_open = out.find("<a href=").unwrap();
    let anchor_close = out.find("</a>").unwrap();
    let span_close = out[anchor_close..].find("</span>").unwrap() + anchor_close;
    assert!(span_open < anchor_open && anchor_open < anchor_close && anchor_close < span_close);
}

#[test]
fn pretty_view_is_pure() {
    let text = r#"{"a": [true, "2"]}"#;
    assert_eq!(pretty_view(text), pretty_view(text));
}

#[test]
fn pretty_region_count_matches_structure() {
    assert_eq!(pretty_region_count(r#"{"a": [1, {"b": []}]}"#), 4);
    assert_eq!(pretty_region_count("no structure"), 0);
}

#[test]
fn malformed_input_still_renders_something() {
    let out = pretty_view("not { json [ at all");
    assert!(out.starts_with("<pre><code>"));
    assert_eq!(pretty_region_count("not { json [ at all"), 2);
}
