//! Lexical classifier — best-effort token tagging over raw response text.
//!
//! DESIGN
//! ======
//! The input is not required to be valid JSON. A single linear scan tags
//! substrings as key/string/number/boolean/null and leaves everything else
//! untouched, so malformed payloads still render. The only escaping done
//! here is neutralizing `& < >` so the result is safe to mount as markup.
//!
//! Quoted values are reclassified by their content: the JSON *string*
//! `"true"` renders as a boolean and `"12"` as a number, which makes the
//! string/literal distinction visible at the cost of false positives for
//! numeric-looking string content.

// =============================================================================
// TYPES
// =============================================================================

/// Semantic token kind assigned to a classified span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    Key,
    Str,
    Number,
    Boolean,
    Null,
}

impl TokenClass {
    /// CSS class name used in emitted markup.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Key => "key",
            Self::Str => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Null => "null",
        }
    }
}

/// A substring of the input with an optional token kind.
///
/// Spans cover the entire input in order; `class: None` marks text that
/// matched no token and passes through verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedSpan {
    pub text: String,
    pub class: Option<TokenClass>,
}

// =============================================================================
// ESCAPING
// =============================================================================

/// Replace the three HTML-sensitive characters with entities.
#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

// =============================================================================
// CLASSIFICATION
// =============================================================================

/// Escape `raw` and wrap every classified token in a `<span>` carrying its
/// token-kind CSS class. Unclassified text passes through verbatim.
#[must_use]
pub fn highlight(raw: &str) -> String {
    let escaped = escape_html(raw);
    let mut out = String::with_capacity(escaped.len());
    for span in classify(&escaped) {
        match span.class {
            Some(class) => {
                out.push_str("<span class=\"");
                out.push_str(class.css_class());
                out.push_str("\">");
                out.push_str(&span.text);
                out.push_str("</span>");
            }
            None => out.push_str(&span.text),
        }
    }
    out
}

/// Scan already-escaped text into an ordered span sequence.
///
/// Token grammar, in priority order at each position:
/// 1. a double-quoted string with backslash escapes, optionally followed by
///    whitespace and `:` (the colon is part of the span and marks a key);
/// 2. the bareword literals `true`, `false`, `null` at word boundaries;
/// 3. a numeric literal `-?\d+(\.\d*)?([eE][+-]?\d+)?` (no left boundary,
///    so digit runs inside barewords still match — accepted best-effort).
#[must_use]
pub fn classify(escaped: &str) -> Vec<ClassifiedSpan> {
    let bytes = escaped.as_bytes();
    let mut spans = Vec::new();
    let mut plain_start = 0;
    let mut i = 0;

    let flush_plain = |spans: &mut Vec<ClassifiedSpan>, from: usize, to: usize| {
        if from < to {
            spans.push(ClassifiedSpan { text: escaped[from..to].to_owned(), class: None });
        }
    };

    while i < bytes.len() {
        if bytes[i] == b'"' {
            if let Some((end, class)) = scan_quoted(escaped, i) {
                flush_plain(&mut spans, plain_start, i);
                spans.push(ClassifiedSpan { text: escaped[i..end].to_owned(), class: Some(class) });
                i = end;
                plain_start = i;
                continue;
            }
        } else if let Some((end, class)) = scan_literal(bytes, i) {
            flush_plain(&mut spans, plain_start, i);
            spans.push(ClassifiedSpan { text: escaped[i..end].to_owned(), class: Some(class) });
            i = end;
            plain_start = i;
            continue;
        } else if let Some(end) = scan_number(bytes, i) {
            flush_plain(&mut spans, plain_start, i);
            spans.push(ClassifiedSpan { text: escaped[i..end].to_owned(), class: Some(TokenClass::Number) });
            i = end;
            plain_start = i;
            continue;
        }
        i += 1;
    }
    flush_plain(&mut spans, plain_start, bytes.len());
    spans
}

/// Scan a quoted token starting at `start` (which must be a `"`).
///
/// Returns the end offset (exclusive) and the token class, or `None` when
/// the string is unterminated.
fn scan_quoted(escaped: &str, start: usize) -> Option<(usize, TokenClass)> {
    let bytes = escaped.as_bytes();
    let mut j = start + 1;
    loop {
        match bytes.get(j) {
            None => return None,
            Some(b'\\') => {
                // Escape consumes the next character; a trailing lone
                // backslash leaves the string unterminated.
                if j + 1 >= bytes.len() {
                    return None;
                }
                j += 2;
            }
            Some(b'"') => break,
            Some(_) => j += 1,
        }
    }
    let close = j;
    let mut end = close + 1;

    // A trailing `:` (after optional whitespace) turns the whole match,
    // colon included, into a key span.
    let mut k = end;
    while k < bytes.len() && bytes[k].is_ascii_whitespace() {
        k += 1;
    }
    if k < bytes.len() && bytes[k] == b':' {
        end = k + 1;
        return Some((end, TokenClass::Key));
    }

    let content = &escaped[start + 1..close];
    Some((end, reclassify_content(content)))
}

/// Reclassify quoted content so string-typed booleans, nulls, and numbers
/// are visually distinguishable from plain strings.
fn reclassify_content(content: &str) -> TokenClass {
    let lower = content.to_ascii_lowercase();
    match lower.as_str() {
        "true" | "false" => TokenClass::Boolean,
        "null" => TokenClass::Null,
        _ if parses_as_number(content) => TokenClass::Number,
        _ => TokenClass::Str,
    }
}

/// True when the exact content round-trips through numeric parsing.
/// `inf`/`nan` spellings are not numeric content.
fn parses_as_number(content: &str) -> bool {
    matches!(content.as_bytes().first(), Some(b'0'..=b'9' | b'-' | b'+' | b'.'))
        && content.parse::<f64>().is_ok()
}

/// Match `true`/`false`/`null` at `start` with word boundaries on both sides.
fn scan_literal(bytes: &[u8], start: usize) -> Option<(usize, TokenClass)> {
    const LITERALS: &[(&[u8], TokenClass)] =
        &[(b"true", TokenClass::Boolean), (b"false", TokenClass::Boolean), (b"null", TokenClass::Null)];

    if start > 0 && is_word_byte(bytes[start - 1]) {
        return None;
    }
    for &(word, class) in LITERALS {
        if bytes[start..].starts_with(word) {
            let end = start + word.len();
            if end < bytes.len() && is_word_byte(bytes[end]) {
                return None;
            }
            return Some((end, class));
        }
    }
    None
}

/// Match `-?\d+(\.\d*)?([eE][+-]?\d+)?` at `start`. Returns the end offset.
fn scan_number(bytes: &[u8], start: usize) -> Option<usize> {
    let mut i = start;
    if bytes.get(i) == Some(&b'-') {
        i += 1;
    }
    let digits_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i == digits_start {
        return None;
    }
    if bytes.get(i) == Some(&b'.') {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
    }
    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }
    Some(i)
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

#[cfg(test)]
#[path = "classify_test.rs"]
mod tests;
