//! Strict renderer — classification from the parsed tree, not the text.
//!
//! The lexical classifier works on raw text and accepts malformed input,
//! at the price of false positives (any numeric-looking string content
//! renders as a number). When the payload did parse, this optional path
//! re-serializes the tree with exact token kinds: a key is whatever sits
//! in key position, a string is a string no matter what it contains.
//! Disclosure regions and hyperlinks are emitted the same way as in the
//! lexical pipeline, so the two panes stay interchangeable in the UI.

use serde_json::Value;

use super::autolink;
use super::cascade::GLYPH_EXPANDED;
use super::classify::escape_html;

/// Render a parsed document as classified, collapsible markup.
#[must_use]
pub fn strict_view(value: &Value) -> String {
    let mut out = String::new();
    let mut region = 0usize;
    walk(value, &mut out, &mut region);
    format!("<pre><code>{out}</code></pre>")
}

fn walk(value: &Value, out: &mut String, region: &mut usize) {
    match value {
        Value::Null => push_token(out, "null", "null"),
        Value::Bool(b) => push_token(out, "boolean", if *b { "true" } else { "false" }),
        Value::Number(n) => push_token(out, "number", &n.to_string()),
        Value::String(s) => {
            let quoted = format!("\"{}\"", escape_html(s));
            out.push_str("<span class=\"string\">");
            out.push_str(&autolink::autolink(&quoted));
            out.push_str("</span>");
        }
        Value::Array(items) => {
            open_region(out, '[', region);
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                walk(item, out, region);
            }
            close_region(out, ']');
        }
        Value::Object(map) => {
            open_region(out, '{', region);
            for (i, (key, item)) in map.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str("<span class=\"key\">\"");
                out.push_str(&escape_html(key));
                out.push_str("\":</span>");
                walk(item, out, region);
            }
            close_region(out, '}');
        }
    }
}

fn push_token(out: &mut String, class: &str, text: &str) {
    out.push_str("<span class=\"");
    out.push_str(class);
    out.push_str("\">");
    out.push_str(text);
    out.push_str("</span>");
}

fn open_region(out: &mut String, delimiter: char, region: &mut usize) {
    out.push(delimiter);
    out.push_str("<span class=\"cascade-toggle\" data-region=\"");
    out.push_str(&region.to_string());
    out.push_str("\">");
    out.push_str(GLYPH_EXPANDED);
    out.push_str("</span><span class=\"cascade-content\" data-region=\"");
    out.push_str(&region.to_string());
    out.push_str("\">");
    *region += 1;
}

fn close_region(out: &mut String, delimiter: char) {
    out.push_str("</span>");
    out.push(delimiter);
}

#[cfg(test)]
#[path = "strict_test.rs"]
mod tests;
