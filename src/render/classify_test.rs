use super::*;

fn classes_of(markup: &str) -> Vec<String> {
    let mut found = Vec::new();
    let mut rest = markup;
    while let Some(idx) = rest.find("<span class=\"") {
        let tail = &rest[idx + 13..];
        let end = tail.find('"').unwrap();
        found.push(tail[..end].to_owned());
        rest = &tail[end..];
    }
    found
}

// =============================================================================
// ESCAPING
// =============================================================================

#[test]
fn escape_neutralizes_sensitive_characters() {
    assert_eq!(escape_html("a & b < c > d"), "a &amp; b &lt; c &gt; d");
}

#[test]
fn escape_leaves_quotes_and_unicode_alone() {
    assert_eq!(escape_html("\"héllo\""), "\"héllo\"");
}

#[test]
fn highlight_output_has_no_unescaped_angle_brackets_outside_tags() {
    let markup = highlight(r#"{"a": "<b>&"}"#);
    // Every '<' in the output opens either our span tags or an entity.
    for (i, _) in markup.match_indices('<') {
        let tail = &markup[i..];
        assert!(
            tail.starts_with("<span") || tail.starts_with("</span"),
            "raw '<' leaked at {i} in {markup}"
        );
    }
    assert!(markup.contains("&lt;b&gt;&amp;"));
}

// =============================================================================
// TOKEN GRAMMAR
// =============================================================================

#[test]
fn key_token_includes_colon() {
    let spans = classify(r#""id": 1"#);
    assert_eq!(spans[0].text, r#""id":"#);
    assert_eq!(spans[0].class, Some(TokenClass::Key));
}

#[test]
fn key_token_spans_whitespace_before_colon() {
    let spans = classify("\"id\" \t: 1");
    assert_eq!(spans[0].text, "\"id\" \t:");
    assert_eq!(spans[0].class, Some(TokenClass::Key));
}

#[test]
fn string_value_is_string() {
    let spans = classify(r#""hello""#);
    assert_eq!(spans, vec![ClassifiedSpan { text: r#""hello""#.into(), class: Some(TokenClass::Str) }]);
}

#[test]
fn quoted_true_is_boolean() {
    let spans = classify(r#""true""#);
    assert_eq!(spans[0].class, Some(TokenClass::Boolean));
}

#[test]
fn quoted_true_is_case_insensitive() {
    let spans = classify(r#""TRUE""#);
    assert_eq!(spans[0].class, Some(TokenClass::Boolean));
}

#[test]
fn quoted_null_is_null() {
    let spans = classify(r#""Null""#);
    assert_eq!(spans[0].class, Some(TokenClass::Null));
}

#[test]
fn quoted_numeric_string_is_number() {
    for s in [r#""12""#, r#""-4.5""#, r#""1e3""#] {
        let spans = classify(s);
        assert_eq!(spans[0].class, Some(TokenClass::Number), "{s}");
    }
}

#[test]
fn quoted_empty_or_wordy_strings_stay_strings() {
    for s in [r#""""#, r#"" ""#, r#""nan""#, r#""inf""#, r#""12px""#] {
        let spans = classify(s);
        assert_eq!(spans[0].class, Some(TokenClass::Str), "{s}");
    }
}

#[test]
fn bare_literals_classify() {
    let spans = classify("true false null");
    let classes: Vec<_> = spans.iter().filter_map(|s| s.class).collect();
    assert_eq!(classes, vec![TokenClass::Boolean, TokenClass::Boolean, TokenClass::Null]);
}

#[test]
fn literal_respects_word_boundaries() {
    let spans = classify("untrue nullify");
    assert!(spans.iter().all(|s| s.class.is_none()), "{spans:?}");
}

#[test]
fn numbers_match_sign_fraction_exponent() {
    for s in ["-5", "3.25", "6.02e23", "1E-9", "7."] {
        let spans = classify(s);
        assert_eq!(spans.len(), 1, "{s}");
        assert_eq!(spans[0].class, Some(TokenClass::Number), "{s}");
        assert_eq!(spans[0].text, s);
    }
}

#[test]
fn dangling_exponent_is_not_consumed() {
    let spans = classify("1e");
    assert_eq!(spans[0].text, "1");
    assert_eq!(spans[0].class, Some(TokenClass::Number));
    assert_eq!(spans[1].text, "e");
    assert_eq!(spans[1].class, None);
}

#[test]
fn escaped_quotes_stay_inside_string_token() {
    let spans = classify(r#""a\"b": 1"#);
    assert_eq!(spans[0].text, r#""a\"b":"#);
    assert_eq!(spans[0].class, Some(TokenClass::Key));
}

#[test]
fn unterminated_string_falls_through_to_plain() {
    let spans = classify(r#""abc 12"#);
    // The opening quote never closes; the digits still classify.
    assert!(spans.iter().any(|s| s.class == Some(TokenClass::Number) && s.text == "12"));
}

// =============================================================================
// TOTALITY
// =============================================================================

#[test]
fn spans_cover_entire_input() {
    let input = r#"{"a": [1, "x", true], "b": null} trailing"#;
    let spans = classify(input);
    let rebuilt: String = spans.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(rebuilt, input);
}

#[test]
fn plain_text_is_unchanged_apart_from_entities() {
    let input = "just words, no tokens here";
    assert_eq!(highlight(input), input);
}

#[test]
fn malformed_json_still_classifies() {
    let markup = highlight(r#"{"broken: [1, 2,,"#);
    assert!(markup.contains("<span class=\"number\">1</span>"));
}

#[test]
fn highlight_mixed_value_kinds() {
    let markup = highlight(r#"{"id": 7, "flag": "true", "n": "12", "s": "hello", "b": true}"#);
    let classes = classes_of(&markup);
    assert_eq!(classes, vec!["key", "number", "key", "boolean", "key", "number", "key", "string", "key", "boolean"]);
}
