use super::*;

fn count_occurrences(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

// =============================================================================
// REGION STRUCTURE
// =============================================================================

#[test]
fn balanced_input_opens_and_closes_equally() {
    let out = cascade(r#"{"a": [1, {"b": 2}]}"#);
    let opens = count_occurrences(&out, "<span class=\"cascade-content\"");
    let closes = count_occurrences(&out, "</span>}") + count_occurrences(&out, "</span>]");
    assert_eq!(opens, 3);
    assert_eq!(closes, 3);
}

#[test]
fn region_ids_are_sequential_in_document_order() {
    let out = cascade("[{}, {}]");
    for region in 0..3 {
        assert!(out.contains(&format!("cascade-toggle\" data-region=\"{region}\"")), "{out}");
    }
    assert!(!out.contains("data-region=\"3\""));
}

#[test]
fn toggle_glyph_precedes_content_region() {
    let out = cascade("{}");
    let toggle = out.find("cascade-toggle").unwrap();
    let content = out.find("cascade-content").unwrap();
    assert!(toggle < content);
    assert!(out.starts_with(&format!("{{<span class=\"cascade-toggle\" data-region=\"0\">{GLYPH_EXPANDED}</span>")));
    assert!(out.ends_with("</span>}"));
}

#[test]
fn unbalanced_input_renders_best_effort() {
    let out = cascade("{{");
    assert_eq!(count_occurrences(&out, "cascade-content"), 2);
    let out = cascade("}}");
    assert_eq!(count_occurrences(&out, "</span>"), 2);
}

#[test]
fn region_count_matches_rendered_openers() {
    for input in ["{}", "[]", r#"{"a": [1, [2, {"b": 3}]]}"#, "plain", "{{{"] {
        let rendered = cascade(input);
        assert_eq!(
            region_count(input),
            count_occurrences(&rendered, "cascade-content"),
            "{input}"
        );
    }
}

// =============================================================================
// TAG SAFETY
// =============================================================================

#[test]
fn delimiters_inside_tags_are_not_substituted() {
    let markup = "<a href=\"http://example.org/a[1]\">x</a> []";
    let out = cascade(markup);
    assert!(out.starts_with("<a href=\"http://example.org/a[1]\">x</a> "));
    assert_eq!(region_count(markup), 1);
}

#[test]
fn nesting_matches_document_order() {
    let out = cascade("[[]]");
    // First-opened is last-closed: region 0 opens before region 1, and the
    // inner close precedes the outer close.
    let open0 = out.find("cascade-content\" data-region=\"0\"").unwrap();
    let open1 = out.find("cascade-content\" data-region=\"1\"").unwrap();
    assert!(open0 < open1);
    // Keeping only brackets and span closes ("C"): each opener is followed
    // by its toggle close, and content regions close innermost-first.
    let rebuilt: String = out
        .replace("</span>", "C")
        .chars()
        .filter(|c| matches!(c, '[' | ']' | 'C'))
        .collect();
    assert_eq!(rebuilt, "[C[CC]C]");
}
