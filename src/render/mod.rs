//! Markup pipeline — classified, hyperlinked, collapsible response views.
//!
//! Two entry points over the same stored raw text: `raw_view` escapes only,
//! for a literal copy-paste-safe pane; `pretty_view` composes the lexical
//! classifier, the link detector, and the cascade renderer, in that order.
//! Classification precedes link detection so anchors never split a
//! classified span; cascade insertion runs last because it only touches the
//! four structural delimiters. Both functions are pure: toggle state lives
//! in the owning document, and re-rendering after a toggle returns
//! identical markup.

pub mod autolink;
pub mod cascade;
pub mod classify;
pub mod strict;

/// Escaped-only rendering inside a preformatted block.
#[must_use]
pub fn raw_view(text: &str) -> String {
    format!("<pre><code>{}</code></pre>", classify::escape_html(text))
}

/// Classifier → Link Detector → Cascade Renderer, preformatted.
#[must_use]
pub fn pretty_view(text: &str) -> String {
    let highlighted = classify::highlight(text);
    let linked = autolink::autolink(&highlighted);
    format!("<pre><code>{}</code></pre>", cascade::cascade(&linked))
}

/// Disclosure regions the pretty view opens for this text.
#[must_use]
pub fn pretty_region_count(text: &str) -> usize {
    let highlighted = classify::highlight(text);
    cascade::region_count(&autolink::autolink(&highlighted))
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
