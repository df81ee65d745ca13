//! Endpoint prober — performs the user's request against the inspected
//! endpoint.
//!
//! DESIGN
//! ======
//! This is collaborator glue around the rendering engine: it speaks the
//! annotation-endpoint conventions (LD-JSON content type with the anno
//! profile, `If-Match` etags for replace/delete, LDP container `Link` and
//! `Slug` headers on container creation) and hands the response body to
//! the document pipeline. Transport failures are typed, never panics.

use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, IF_MATCH};

/// Content type sent with annotation payloads.
pub const ANNOTATION_CONTENT_TYPE: &str = "application/ld+json; profile=\"http://www.w3.org/ns/anno.jsonld\"";

/// `Link` header announcing an LDP basic container on POST.
pub const LDP_CONTAINER_LINK: &str = "<http://www.w3.org/ns/ldp#BasicContainer>; rel=\"type\"";

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("unsupported method: {0}")]
    InvalidMethod(String),
    #[error("request failed: {0}")]
    Request(String),
    #[error("response body read failed: {0}")]
    BodyRead(String),
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

/// HTTP methods the probe form offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeMethod {
    Get,
    Post,
    Put,
    Delete,
    Head,
    Options,
}

impl ProbeMethod {
    /// Parse the method name case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns `ProbeError::InvalidMethod` for anything outside the set.
    pub fn parse(raw: &str) -> Result<Self, ProbeError> {
        match raw.to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "DELETE" => Ok(Self::Delete),
            "HEAD" => Ok(Self::Head),
            "OPTIONS" => Ok(Self::Options),
            other => Err(ProbeError::InvalidMethod(other.to_owned())),
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Head => "HEAD",
            Self::Options => "OPTIONS",
        }
    }

    fn as_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Delete => reqwest::Method::DELETE,
            Self::Head => reqwest::Method::HEAD,
            Self::Options => reqwest::Method::OPTIONS,
        }
    }
}

/// One request against the inspected endpoint.
#[derive(Debug, Clone)]
pub struct ProbeCall {
    pub url: String,
    pub method: ProbeMethod,
    pub body: Option<String>,
    /// Forwarded as `If-Match` on PUT and DELETE.
    pub etag: Option<String>,
    /// Forwarded as `Slug` when POSTing a container.
    pub slug: Option<String>,
}

/// Status, headers, and body text of the probed response.
#[derive(Debug, Clone)]
pub struct ProbeOutcome {
    pub status: u16,
    pub status_text: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

// =============================================================================
// PROBER
// =============================================================================

pub struct EndpointProber {
    http: reqwest::Client,
}

impl EndpointProber {
    /// Build the prober with request/connect timeouts.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(request_timeout_secs: u64, connect_timeout_secs: u64) -> Result<Self, ProbeError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(request_timeout_secs))
            .connect_timeout(Duration::from_secs(connect_timeout_secs))
            .build()
            .map_err(|e| ProbeError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http })
    }

    /// Perform the call and collect the full response.
    ///
    /// # Errors
    ///
    /// Returns `ProbeError::Request` on transport failure and
    /// `ProbeError::BodyRead` when the body cannot be read.
    pub async fn send(&self, call: &ProbeCall) -> Result<ProbeOutcome, ProbeError> {
        let mut request = self.http.request(call.method.as_reqwest(), call.url.as_str());

        match call.method {
            ProbeMethod::Post => {
                let body = call.body.clone().unwrap_or_default();
                request = request.header(CONTENT_TYPE, ANNOTATION_CONTENT_TYPE);
                if is_container_payload(&body) {
                    request = request.header("Link", LDP_CONTAINER_LINK);
                    if let Some(slug) = &call.slug {
                        request = request.header("Slug", slug);
                    }
                }
                request = request.body(body);
            }
            ProbeMethod::Put => {
                request = request.header(CONTENT_TYPE, ANNOTATION_CONTENT_TYPE);
                if let Some(etag) = &call.etag {
                    request = request.header(IF_MATCH, etag);
                }
                request = request.body(call.body.clone().unwrap_or_default());
            }
            ProbeMethod::Delete => {
                if let Some(etag) = &call.etag {
                    request = request.header(IF_MATCH, etag);
                }
            }
            ProbeMethod::Get | ProbeMethod::Head | ProbeMethod::Options => {}
        }

        let response = request.send().await.map_err(|e| ProbeError::Request(e.to_string()))?;

        let status = response.status();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| (name.to_string(), String::from_utf8_lossy(value.as_bytes()).into_owned()))
            .collect();
        let body = response
            .text()
            .await
            .map_err(|e| ProbeError::BodyRead(e.to_string()))?;

        Ok(ProbeOutcome {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or("").to_owned(),
            headers,
            body,
        })
    }
}

// =============================================================================
// CONTAINER DETECTION
// =============================================================================

/// The `@type` spellings that mark a payload as an annotation container.
const CONTAINER_TYPES: &[&str] =
    &["ldp:Container", "ldp:BasicContainer", "AnnotationCollection", "http://www.w3.org/ns/ldp#BasicContainer"];

/// True when the payload declares a container `@type`, so the POST must
/// carry the LDP `Link` header and a `Slug`.
///
/// Matches `"@type":` followed by an optional `[` and one of the known
/// spellings, with arbitrary whitespace — a textual check, deliberately
/// tolerant of payloads that do not parse.
#[must_use]
pub fn is_container_payload(text: &str) -> bool {
    let mut rest = text;
    while let Some(idx) = rest.find("\"@type\"") {
        let mut tail = rest[idx + 7..].trim_start();
        if let Some(after_colon) = tail.strip_prefix(':') {
            tail = after_colon.trim_start();
            if let Some(after_bracket) = tail.strip_prefix('[') {
                tail = after_bracket.trim_start();
            }
            if let Some(quoted) = tail.strip_prefix('"') {
                let matches_type = CONTAINER_TYPES.iter().any(|t| {
                    quoted.len() > t.len()
                        && quoted.is_char_boundary(t.len())
                        && quoted[..t.len()].eq_ignore_ascii_case(t)
                        && quoted[t.len()..].starts_with('"')
                });
                if matches_type {
                    return true;
                }
            }
        }
        rest = &rest[idx + 7..];
    }
    false
}

#[cfg(test)]
#[path = "probe_test.rs"]
mod tests;
