//! Coordinate normalizer — absolute overlay pixels to percentage units.
//!
//! DESIGN
//! ======
//! The overlay markup arrives with coordinates in the image's natural
//! pixel space. Rewriting them as percentages of the natural dimensions
//! lets the overlay track the displayed size of the image. Only
//! integer-valued attributes of the four supported shape families are
//! rewritten; `d` path data and anything unrecognized passes through
//! byte-for-byte, so unsupported primitives (polygon outlines, paths)
//! render at their literal coordinates.

/// Attributes divided by the natural width.
const HORIZONTAL: &[&str] = &["x1", "x2", "cx", "rx", "width", "x", "r"];

/// Attributes divided by the natural height.
const VERTICAL: &[&str] = &["y1", "y2", "cy", "ry", "height", "y"];

// =============================================================================
// NORMALIZATION
// =============================================================================

/// Rewrite recognized absolute coordinate attributes in `overlay` as
/// integer-floored percentage strings of `width`×`height`.
///
/// `r` normalizes against the width only. The `points` pair list
/// alternates horizontal/vertical per coordinate, preserving separators.
/// Attributes whose value is not a plain digit run are left unchanged.
#[must_use]
pub fn normalize_overlay(overlay: &str, width: u32, height: u32) -> String {
    if width == 0 || height == 0 {
        return overlay.to_owned();
    }
    let bytes = overlay.as_bytes();
    let mut out = String::with_capacity(overlay.len());
    let mut plain_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if !at_attr_boundary(bytes, i) {
            i += 1;
            continue;
        }
        if let Some((name, value_start)) = match_attr_name(overlay, i) {
            if name == "points" {
                if let Some(value_end) = match_points_value(bytes, value_start) {
                    out.push_str(&overlay[plain_start..value_start]);
                    rewrite_points(&overlay[value_start..value_end], width, height, &mut out);
                    i = value_end;
                    plain_start = i;
                    continue;
                }
            } else if let Some((value, value_end)) = match_integer_value(overlay, value_start) {
                let dim = if HORIZONTAL.contains(&name) { width } else { height };
                out.push_str(&overlay[plain_start..value_start]);
                out.push_str(&percent(value, dim));
                i = value_end;
                plain_start = i;
                continue;
            }
        }
        i += 1;
    }
    out.push_str(&overlay[plain_start..]);
    out
}

/// Integer-floored percentage, e.g. `percent(50, 200)` is `"25%"`.
fn percent(value: u64, dim: u32) -> String {
    let p = (100u128 * u128::from(value)) / u128::from(dim);
    format!("{p}%")
}

/// True when position `i` can start an attribute name.
fn at_attr_boundary(bytes: &[u8], i: usize) -> bool {
    i == 0 || !(bytes[i - 1].is_ascii_alphanumeric() || matches!(bytes[i - 1], b'_' | b'-'))
}

/// Match a recognized attribute name plus `="` at `start`. Returns the
/// name and the offset of the first value character.
fn match_attr_name(overlay: &str, start: usize) -> Option<(&'static str, usize)> {
    const NAMES: &[&str] = &[
        "points", "height", "width", "x1", "x2", "y1", "y2", "cx", "cy", "rx", "ry", "x", "y", "r",
    ];
    let rest = &overlay[start..];
    for &name in NAMES {
        if rest.len() > name.len() + 2 && rest.starts_with(name) && rest[name.len()..].starts_with("=\"") {
            return Some((name, start + name.len() + 2));
        }
    }
    None
}

/// A digit-only attribute value. Returns the parsed value and the offset
/// just past the closing quote.
fn match_integer_value(overlay: &str, value_start: usize) -> Option<(u64, usize)> {
    let bytes = overlay.as_bytes();
    let mut i = value_start;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i == value_start || bytes.get(i) != Some(&b'"') {
        return None;
    }
    let value = overlay[value_start..i].parse::<u64>().ok()?;
    Some((value, i + 1))
}

/// A `points` value made only of digits, commas, and spaces. Returns the
/// offset just past the closing quote.
fn match_points_value(bytes: &[u8], value_start: usize) -> Option<usize> {
    let mut i = value_start;
    while i < bytes.len() && matches!(bytes[i], b'0'..=b'9' | b',' | b' ') {
        i += 1;
    }
    if i == value_start || bytes.get(i) != Some(&b'"') {
        return None;
    }
    Some(i + 1)
}

/// Rewrite a points list (including its closing quote) pair-wise:
/// even-indexed coordinates divide by width, odd-indexed by height.
fn rewrite_points(value_and_quote: &str, width: u32, height: u32, out: &mut String) {
    let bytes = value_and_quote.as_bytes();
    let mut i = 0;
    let mut coordinate = 0usize;
    while i < bytes.len() {
        if bytes[i].is_ascii_digit() {
            let start = i;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            let dim = if coordinate % 2 == 0 { width } else { height };
            coordinate += 1;
            match value_and_quote[start..i].parse::<u64>() {
                Ok(v) => out.push_str(&percent(v, dim)),
                Err(_) => out.push_str(&value_and_quote[start..i]),
            }
        } else {
            out.push(char::from(bytes[i]));
            i += 1;
        }
    }
}

#[cfg(test)]
#[path = "scale_test.rs"]
mod tests;
