//! Media probe — asynchronous discovery of an image's natural dimensions.
//!
//! DESIGN
//! ======
//! The visualizer needs the intrinsic pixel size of the target image, which
//! only exists once the resource has been fetched. The probe is the
//! engine's sole asynchronous suspension point and sits behind a trait so
//! the visualizer can be driven by a mock in tests. The HTTP
//! implementation reads just enough of the payload to decode the header
//! dimensions.

use std::io::Cursor;
use std::time::Duration;

// =============================================================================
// TYPES
// =============================================================================

/// Intrinsic pixel dimensions of a fetched image resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageMetadata {
    pub natural_width: u32,
    pub natural_height: u32,
}

impl ImageMetadata {
    /// Both dimensions usable for coordinate scaling.
    #[must_use]
    pub fn is_positive(self) -> bool {
        self.natural_width > 0 && self.natural_height > 0
    }
}

/// Errors produced by metadata discovery.
#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    #[error("image fetch failed: {0}")]
    Fetch(String),
    #[error("image fetch returned status {status}")]
    Status { status: u16 },
    #[error("image exceeds the {limit_bytes} byte probe limit")]
    TooLarge { limit_bytes: u64 },
    #[error("image decode failed: {0}")]
    Decode(String),
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

/// Asynchronous image metadata discovery.
#[async_trait::async_trait]
pub trait MediaProbe: Send + Sync {
    async fn dimensions(&self, source: &str) -> Result<ImageMetadata, MediaError>;
}

// =============================================================================
// HTTP IMPLEMENTATION
// =============================================================================

/// Fetches the image over HTTP and decodes header dimensions.
pub struct HttpMediaProbe {
    http: reqwest::Client,
    max_bytes: u64,
}

impl HttpMediaProbe {
    /// Build the probe with request/connect timeouts and a payload cap.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(request_timeout_secs: u64, connect_timeout_secs: u64, max_bytes: u64) -> Result<Self, MediaError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(request_timeout_secs))
            .connect_timeout(Duration::from_secs(connect_timeout_secs))
            .build()
            .map_err(|e| MediaError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, max_bytes })
    }
}

#[async_trait::async_trait]
impl MediaProbe for HttpMediaProbe {
    async fn dimensions(&self, source: &str) -> Result<ImageMetadata, MediaError> {
        let response = self
            .http
            .get(source)
            .send()
            .await
            .map_err(|e| MediaError::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(MediaError::Status { status: status.as_u16() });
        }
        if let Some(length) = response.content_length() {
            if length > self.max_bytes {
                return Err(MediaError::TooLarge { limit_bytes: self.max_bytes });
            }
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| MediaError::Fetch(e.to_string()))?;
        if bytes.len() as u64 > self.max_bytes {
            return Err(MediaError::TooLarge { limit_bytes: self.max_bytes });
        }
        dimensions_from_bytes(&bytes)
    }
}

/// Decode only the header of an in-memory image payload.
///
/// # Errors
///
/// Returns a decode error when the payload is not a recognizable image.
pub fn dimensions_from_bytes(bytes: &[u8]) -> Result<ImageMetadata, MediaError> {
    let reader = image::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| MediaError::Decode(e.to_string()))?;
    let (natural_width, natural_height) = reader
        .into_dimensions()
        .map_err(|e| MediaError::Decode(e.to_string()))?;
    Ok(ImageMetadata { natural_width, natural_height })
}

#[cfg(test)]
#[path = "media_test.rs"]
mod tests;
