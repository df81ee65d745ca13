//! Link detector — wraps URLs and email addresses in hyperlink anchors.
//!
//! DESIGN
//! ======
//! Runs after classification, so the input already contains `<span>` markup.
//! The scanner tracks tag boundaries and only matches inside visible text
//! segments; attribute values are never rewritten. Scheme-qualified URLs,
//! `www.`-prefixed hosts, and emails are linked. Bare top-level-domain
//! words are deliberately not matched — a key literally named `com` must
//! not become a link. Phone numbers, mentions, and hashtags are out.
//!
//! Matched text is kept verbatim: no truncation, no prefix stripping, no
//! trailing-slash stripping.

/// CSS class carried by every generated anchor.
const LINK_CLASS: &str = "autolink";

// =============================================================================
// PUBLIC ENTRY
// =============================================================================

/// Wrap recognized links in `markup` with anchors opening in a new
/// viewing context. Existing tags pass through untouched.
#[must_use]
pub fn autolink(markup: &str) -> String {
    let bytes = markup.as_bytes();
    let mut out = String::with_capacity(markup.len());
    let mut i = 0;
    let mut in_anchor = false;
    while i < bytes.len() {
        if bytes[i] == b'<' {
            // Copy the whole tag verbatim; nothing inside may be linked.
            let end = memchr(bytes, b'>', i).map_or(bytes.len(), |p| p + 1);
            let tag = &markup[i..end];
            if tag.starts_with("<a ") || tag.starts_with("<a>") {
                in_anchor = true;
            } else if tag.starts_with("</a") {
                in_anchor = false;
            }
            out.push_str(tag);
            i = end;
        } else {
            let end = memchr(bytes, b'<', i).unwrap_or(bytes.len());
            if in_anchor {
                // Text already inside an anchor stays as-is, which keeps
                // the pass idempotent.
                out.push_str(&markup[i..end]);
            } else {
                link_text_segment(&markup[i..end], &mut out);
            }
            i = end;
        }
    }
    out
}

fn memchr(bytes: &[u8], needle: u8, from: usize) -> Option<usize> {
    bytes[from..].iter().position(|&b| b == needle).map(|p| from + p)
}

// =============================================================================
// TEXT-SEGMENT LINKING
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LinkKind {
    /// Scheme-qualified URL; href is the match itself.
    Url,
    /// Bare `www.` host; href gets an `http://` prefix.
    Www,
    /// Email address; href gets a `mailto:` prefix.
    Email,
}

/// Linkify one tag-free text segment into `out`.
fn link_text_segment(text: &str, out: &mut String) {
    let mut rest = text;
    while let Some((start, end, kind)) = find_link(rest) {
        out.push_str(&rest[..start]);
        let link = &rest[start..end];
        let href = match kind {
            LinkKind::Url => link.to_owned(),
            LinkKind::Www => format!("http://{link}"),
            LinkKind::Email => format!("mailto:{link}"),
        };
        out.push_str("<a href=\"");
        out.push_str(&href);
        out.push_str("\" class=\"");
        out.push_str(LINK_CLASS);
        out.push_str("\" target=\"_blank\" rel=\"noopener noreferrer\">");
        out.push_str(link);
        out.push_str("</a>");
        rest = &rest[end..];
    }
    out.push_str(rest);
}

/// Find the earliest link in `text`. Returns byte range and kind.
fn find_link(text: &str) -> Option<(usize, usize, LinkKind)> {
    let bytes = text.as_bytes();
    for i in 0..bytes.len() {
        let b = bytes[i];
        if b.is_ascii_alphabetic() {
            let prev = i.checked_sub(1).map(|p| bytes[p]);
            let word_boundary = !prev.is_some_and(|p| p.is_ascii_alphanumeric());
            if word_boundary {
                if let Some(end) = match_scheme_url(bytes, i) {
                    return Some((i, end, LinkKind::Url));
                }
                // The stricter boundary keeps `foo.www.x` from half-matching.
                if !prev.is_some_and(|p| matches!(p, b'.' | b'-')) {
                    if let Some(end) = match_www(bytes, i) {
                        return Some((i, end, LinkKind::Www));
                    }
                }
            }
        } else if b == b'@' {
            if let Some((start, end)) = match_email(bytes, i) {
                return Some((start, end, LinkKind::Email));
            }
        }
    }
    None
}

/// `scheme://` followed by at least one URL character.
fn match_scheme_url(bytes: &[u8], start: usize) -> Option<usize> {
    let mut i = start + 1;
    while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || matches!(bytes[i], b'+' | b'.' | b'-')) {
        i += 1;
    }
    if !bytes[i..].starts_with(b"://") {
        return None;
    }
    i += 3;
    let tail_start = i;
    while i < bytes.len() && is_url_byte(bytes[i]) {
        i += 1;
    }
    let end = trim_trailing_punctuation(bytes, tail_start, i);
    if end == tail_start {
        return None;
    }
    Some(end)
}

/// `www.` followed by host characters, then an optional path/query tail.
fn match_www(bytes: &[u8], start: usize) -> Option<usize> {
    if bytes.len() < start + 5 || !bytes[start..start + 4].eq_ignore_ascii_case(b"www.") {
        return None;
    }
    let mut i = start + 4;
    let host_start = i;
    while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || matches!(bytes[i], b'.' | b'-')) {
        i += 1;
    }
    if i < bytes.len() && matches!(bytes[i], b'/' | b'?' | b'#') {
        while i < bytes.len() && is_url_byte(bytes[i]) {
            i += 1;
        }
    }
    let end = trim_trailing_punctuation(bytes, host_start, i);
    if end == host_start {
        return None;
    }
    Some(end)
}

/// Email match centered on the `@` at `at`: backtrack the local part,
/// scan the domain forward, and require a dotted alphabetic TLD.
fn match_email(bytes: &[u8], at: usize) -> Option<(usize, usize)> {
    let mut start = at;
    while start > 0 && is_email_local_byte(bytes[start - 1]) {
        start -= 1;
    }
    if start == at {
        return None;
    }

    let mut i = at + 1;
    let domain_start = i;
    while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || matches!(bytes[i], b'.' | b'-')) {
        i += 1;
    }
    // Trailing dots/hyphens belong to the prose, not the domain.
    let mut end = i;
    while end > domain_start && matches!(bytes[end - 1], b'.' | b'-') {
        end -= 1;
    }
    let domain = &bytes[domain_start..end];
    let dot = domain.iter().rposition(|&b| b == b'.')?;
    let tld = &domain[dot + 1..];
    if tld.len() < 2 || !tld.iter().all(u8::is_ascii_alphabetic) {
        return None;
    }
    Some((start, end))
}

fn is_email_local_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'.' | b'_' | b'%' | b'+' | b'-')
}

fn is_url_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(
            b,
            b'-' | b'.'
                | b'_'
                | b'~'
                | b':'
                | b'/'
                | b'?'
                | b'#'
                | b'['
                | b']'
                | b'@'
                | b'!'
                | b'$'
                | b'&'
                | b'\''
                | b'('
                | b')'
                | b'*'
                | b'+'
                | b','
                | b';'
                | b'='
                | b'%'
        )
}

/// Drop sentence punctuation from the end of a match; slashes stay.
fn trim_trailing_punctuation(bytes: &[u8], start: usize, mut end: usize) -> usize {
    while end > start && matches!(bytes[end - 1], b'.' | b',' | b';' | b':' | b'!' | b'?') {
        end -= 1;
    }
    end
}

#[cfg(test)]
#[path = "autolink_test.rs"]
mod tests;
