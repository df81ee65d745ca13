//! Target extraction — optional-field lookup over an arbitrary response.
//!
//! DESIGN
//! ======
//! A Web Annotation names the thing it annotates under `target.source`,
//! with an optional region under `target.selector.value`. The response is
//! untrusted and loosely structured, so every lookup returns an explicit
//! present/absent result; nothing here ever fails on missing or oddly
//! typed structure.

use serde_json::Value;

// =============================================================================
// EXTRACTION
// =============================================================================

/// Result of inspecting a response for a visualizable target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetExtraction<'a> {
    /// No `target` attribute at all.
    NoTarget,
    /// A `target` without a usable `source`.
    NoSource,
    /// A source image with no overlay selector.
    Plain { source: &'a str },
    /// A source image plus overlay markup from `selector.value`.
    WithOverlay { source: &'a str, overlay: &'a str },
}

/// Inspect `doc` for `target.source` and `target.selector.value`.
#[must_use]
pub fn extract_target(doc: &Value) -> TargetExtraction<'_> {
    let Some(target) = attr(doc, "target") else {
        return TargetExtraction::NoTarget;
    };
    let Some(source) = attr(target, "source").and_then(Value::as_str) else {
        return TargetExtraction::NoSource;
    };
    let overlay = attr(target, "selector").and_then(|sel| attr(sel, "value")).and_then(Value::as_str);
    match overlay {
        Some(overlay) => TargetExtraction::WithOverlay { source, overlay },
        None => TargetExtraction::Plain { source },
    }
}

/// Attribute lookup on an arbitrary value. Objects look up the key
/// directly; a multi-target array stands in for its first object element.
fn attr<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.get(key),
        Value::Array(items) => items.first().and_then(|first| first.as_object()).and_then(|map| map.get(key)),
        _ => None,
    }
}

// =============================================================================
// BODY DIMENSION FALLBACK
// =============================================================================

/// Alternative image dimensions carried in the annotation `body`.
///
/// The convention stores the marker strings `"imageWidth"` /
/// `"imageHeight"` as attribute *values* of a body element, with the
/// numeric dimension in that element's `value` attribute. The search is
/// order-independent and both dimensions must resolve to positive numbers.
#[must_use]
pub fn find_body_dimensions(doc: &Value) -> Option<(u32, u32)> {
    let width = search_body_value(doc, "imageWidth")?;
    let height = search_body_value(doc, "imageHeight")?;
    Some((width, height))
}

/// Find the body element carrying `needle` among its attribute values and
/// read its `value` attribute as a positive integer.
fn search_body_value(doc: &Value, needle: &str) -> Option<u32> {
    let element = search_body_object(doc, needle)?;
    numeric_attr(element.as_object()?.get("value")?)
}

/// The whole body element whose own attribute values contain `needle`.
#[must_use]
pub fn search_body_object<'a>(doc: &'a Value, needle: &str) -> Option<&'a Value> {
    let body = doc.as_object()?.get("body")?;
    let elements: Box<dyn Iterator<Item = &Value> + '_> = match body {
        Value::Array(items) => Box::new(items.iter()),
        // A single body object counts as a one-element collection.
        Value::Object(_) => Box::new(std::iter::once(body)),
        _ => return None,
    };
    elements.into_iter().find(|el| {
        el.as_object()
            .is_some_and(|map| map.values().any(|v| v.as_str() == Some(needle)))
    })
}

/// A number or numeric string, truncated to a positive integer.
fn numeric_attr(value: &Value) -> Option<u32> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    if n >= 1.0 && n.is_finite() {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let truncated = n as u32;
        Some(truncated)
    } else {
        None
    }
}

#[cfg(test)]
#[path = "target_test.rs"]
mod tests;
