//! Document — the scoped render session for one displayed response.
//!
//! DESIGN
//! ======
//! A raw response payload (absent, a string, or a pre-parsed object)
//! normalizes into a canonical `(raw_text, parsed)` pair. The `Document`
//! owns everything that outlives a single render of that pair: the
//! per-region cascade toggle state, the visualization render target, and
//! the generation counter that invalidates stale asynchronous
//! completions. Replacing the displayed document discards all of it.

use std::collections::HashSet;
use std::time::Instant;

use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::render;

// =============================================================================
// PAYLOAD NORMALIZATION
// =============================================================================

/// Normalize an arbitrary payload into `(raw_text, parsed)`.
///
/// A string payload keeps its exact text and parses opportunistically; a
/// structured payload stringifies; absent or null input yields empty text
/// and no object — never an error.
#[must_use]
pub fn normalize_payload(payload: Option<Value>) -> (String, Option<Value>) {
    match payload {
        None | Some(Value::Null) => (String::new(), None),
        Some(Value::String(text)) => {
            let parsed = serde_json::from_str(&text).ok();
            (text, parsed)
        }
        Some(value) => {
            let text = serde_json::to_string(&value).unwrap_or_default();
            (text, Some(value))
        }
    }
}

// =============================================================================
// CASCADE STATE
// =============================================================================

/// Per-region disclosure toggle state. Initial state is expanded, so only
/// collapsed regions are stored.
#[derive(Debug, Default)]
pub struct CascadeState {
    region_count: usize,
    collapsed: HashSet<usize>,
}

impl CascadeState {
    #[must_use]
    pub fn new(region_count: usize) -> Self {
        Self { region_count, collapsed: HashSet::new() }
    }

    #[must_use]
    pub fn region_count(&self) -> usize {
        self.region_count
    }

    /// Flip one region. Returns the new expanded state, or `None` for a
    /// region the rendered markup never opened.
    pub fn toggle(&mut self, region: usize) -> Option<bool> {
        if region >= self.region_count {
            return None;
        }
        if self.collapsed.remove(&region) {
            Some(true)
        } else {
            self.collapsed.insert(region);
            Some(false)
        }
    }

    #[must_use]
    pub fn is_expanded(&self, region: usize) -> bool {
        !self.collapsed.contains(&region)
    }
}

// =============================================================================
// VISUALIZATION RENDER TARGET
// =============================================================================

/// Where the target visualizer currently stands for this document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VisualizationState {
    /// Not yet visualized.
    Init,
    /// The response carries no `target`.
    NoTarget,
    /// The `target` carries no usable `source`.
    NoSource,
    /// Image only, no overlay selector.
    PlainImage,
    /// Placeholder shown while metadata discovery is in flight.
    AwaitingMetadata,
    /// Overlay rewritten into the image's coordinate space.
    Scaled,
    /// Overlay rendered at its literal coordinates.
    RenderedUnscaled,
    /// Metadata discovery failed; an error panel is shown.
    Failed,
}

/// The visualization pane the asynchronous completion writes into.
#[derive(Debug, Clone, Serialize)]
pub struct VisualizationPane {
    pub state: VisualizationState,
    pub html: String,
}

impl VisualizationPane {
    #[must_use]
    pub fn initial() -> Self {
        Self { state: VisualizationState::Init, html: String::new() }
    }
}

// =============================================================================
// DOCUMENT
// =============================================================================

/// One displayed response and the state scoped to it.
pub struct Document {
    pub id: Uuid,
    pub raw_text: String,
    pub parsed: Option<Value>,
    pub cascade: CascadeState,
    pub visualization: VisualizationPane,
    /// Bumped on every visualizer invocation; stale completions compare
    /// against it and are discarded.
    pub generation: u64,
    pub created_at: Instant,
}

impl Document {
    /// Build a document from an arbitrary payload.
    #[must_use]
    pub fn new(payload: Option<Value>) -> Self {
        let (raw_text, parsed) = normalize_payload(payload);
        let regions = render::pretty_region_count(&raw_text);
        Self {
            id: Uuid::new_v4(),
            raw_text,
            parsed,
            cascade: CascadeState::new(regions),
            visualization: VisualizationPane::initial(),
            generation: 0,
            created_at: Instant::now(),
        }
    }

    /// Escaped literal pane.
    #[must_use]
    pub fn raw_view(&self) -> String {
        render::raw_view(&self.raw_text)
    }

    /// Classified, hyperlinked, collapsible pane.
    #[must_use]
    pub fn pretty_view(&self) -> String {
        render::pretty_view(&self.raw_text)
    }

    /// Tree-based pane with exact token kinds; only for payloads that
    /// actually parsed.
    #[must_use]
    pub fn strict_view(&self) -> Option<String> {
        self.parsed.as_ref().map(render::strict::strict_view)
    }
}

#[cfg(test)]
#[path = "document_test.rs"]
mod tests;
