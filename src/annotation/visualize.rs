//! Target visualizer — renders an annotation's image target and overlay.
//!
//! DESIGN
//! ======
//! The synchronous part walks the extraction states: no target, no source,
//! plain image, or image-plus-overlay. Only the overlay path suspends: the
//! natural dimensions of the image are discovered asynchronously while a
//! loading placeholder occupies the pane.
//!
//! Every invocation bumps the owning document's generation counter and the
//! spawned completion re-checks it before writing into the render target.
//! A completion that lost the race (document replaced or visualizer
//! re-invoked) is discarded instead of clobbering the newer pane.
//!
//! A failed metadata fetch renders an explicit error panel; every other
//! degraded state still renders an image or an explanatory message.
//! Nothing here returns an error to the caller.

use serde_json::Value;
use tokio::task::JoinHandle;
use tracing::debug;
use uuid::Uuid;

use super::scale;
use super::target::{self, TargetExtraction};
use crate::document::{Document, VisualizationPane, VisualizationState};
use crate::media::{ImageMetadata, MediaError};
use crate::state::AppState;

// =============================================================================
// SYNCHRONOUS EVALUATION
// =============================================================================

/// What the synchronous pass decided.
pub enum SyncOutcome {
    /// The pane is final; no metadata is needed.
    Terminal(VisualizationPane),
    /// Overlay markup present — metadata discovery must run.
    Pending { source: String, overlay: String },
}

/// Evaluate the extraction states for a parsed response.
#[must_use]
pub fn visualize_target(parsed: Option<&Value>) -> SyncOutcome {
    let Some(doc) = parsed else {
        return SyncOutcome::Terminal(no_target_pane());
    };
    match target::extract_target(doc) {
        TargetExtraction::NoTarget => SyncOutcome::Terminal(no_target_pane()),
        TargetExtraction::NoSource => SyncOutcome::Terminal(no_source_pane()),
        TargetExtraction::Plain { source } => SyncOutcome::Terminal(plain_image_pane(source)),
        TargetExtraction::WithOverlay { source, overlay } => {
            SyncOutcome::Pending { source: source.to_owned(), overlay: overlay.to_owned() }
        }
    }
}

// =============================================================================
// DRIVER
// =============================================================================

/// Run the visualizer for `doc`, writing into its visualization pane.
///
/// Returns the join handle of the metadata task when one was spawned, so
/// callers (and tests) can await the completion deterministically.
pub fn start_visualization(state: &AppState, doc: &mut Document) -> Option<JoinHandle<()>> {
    doc.generation += 1;
    match visualize_target(doc.parsed.as_ref()) {
        SyncOutcome::Terminal(pane) => {
            doc.visualization = pane;
            None
        }
        SyncOutcome::Pending { source, overlay } => {
            doc.visualization = awaiting_pane(&source);
            let generation = doc.generation;
            let id = doc.id;
            let state = state.clone();
            Some(tokio::spawn(async move {
                let outcome = state.media.dimensions(&source).await;
                apply_metadata_completion(&state, id, generation, &source, &overlay, outcome).await;
            }))
        }
    }
}

/// Write a finished metadata discovery into the render target — unless the
/// completion went stale while it was in flight.
pub async fn apply_metadata_completion(
    state: &AppState,
    id: Uuid,
    generation: u64,
    source: &str,
    overlay: &str,
    outcome: Result<ImageMetadata, MediaError>,
) {
    let mut documents = state.documents.write().await;
    let Some(doc) = documents.get_mut(&id) else {
        debug!(%id, "visualization completion for replaced document discarded");
        return;
    };
    if doc.generation != generation {
        debug!(%id, generation, current = doc.generation, "stale visualization completion discarded");
        return;
    }
    doc.visualization = completion_pane(doc.parsed.as_ref(), source, overlay, outcome);
}

/// Resolve the pane for a finished metadata discovery.
///
/// Positive natural dimensions scale the overlay; otherwise the response
/// `body` may carry fallback dimensions; otherwise the overlay renders at
/// its literal coordinates.
#[must_use]
pub fn completion_pane(
    parsed: Option<&Value>,
    source: &str,
    overlay: &str,
    outcome: Result<ImageMetadata, MediaError>,
) -> VisualizationPane {
    match outcome {
        Ok(meta) if meta.is_positive() => scaled_pane(source, overlay, meta.natural_width, meta.natural_height),
        Ok(_) => match parsed.and_then(target::find_body_dimensions) {
            Some((width, height)) => scaled_pane(source, overlay, width, height),
            None => unscaled_pane(source, overlay),
        },
        Err(err) => failed_pane(source, &err),
    }
}

// =============================================================================
// PANES
// =============================================================================

fn no_target_pane() -> VisualizationPane {
    VisualizationPane {
        state: VisualizationState::NoTarget,
        html: "\"<span class=\"bold\">target</span>\" not found! <br>\
               A Web Annotation must have 1 or more targets."
            .to_owned(),
    }
}

fn no_source_pane() -> VisualizationPane {
    VisualizationPane {
        state: VisualizationState::NoSource,
        html: "\"<span class=\"bold\">source</span>\" in \"target\" not found! <br>\
               Target Visualization needs a \"source\" attribute to visualize."
            .to_owned(),
    }
}

fn plain_image_pane(source: &str) -> VisualizationPane {
    let src = attr_escape(source);
    VisualizationPane {
        state: VisualizationState::PlainImage,
        html: format!("<img src=\"{src}\" class=\"fadeIn\" style=\"max-width:100%;\">"),
    }
}

fn awaiting_pane(source: &str) -> VisualizationPane {
    let src = attr_escape(source);
    VisualizationPane {
        state: VisualizationState::AwaitingMetadata,
        html: format!("<img src=\"\" class=\"loading\" alt=\"loading {src}\" style=\"max-width:100%;\">"),
    }
}

fn scaled_pane(source: &str, overlay: &str, width: u32, height: u32) -> VisualizationPane {
    let normalized = scale::normalize_overlay(overlay, width, height);
    VisualizationPane {
        state: VisualizationState::Scaled,
        html: overlay_frame(source, &normalized, true),
    }
}

fn unscaled_pane(source: &str, overlay: &str) -> VisualizationPane {
    VisualizationPane {
        state: VisualizationState::RenderedUnscaled,
        html: overlay_frame(source, overlay, false),
    }
}

fn failed_pane(source: &str, err: &MediaError) -> VisualizationPane {
    let src = crate::render::classify::escape_html(source);
    let reason = crate::render::classify::escape_html(&err.to_string());
    VisualizationPane {
        state: VisualizationState::Failed,
        html: format!("<span class=\"visualize-error\">Could not load \"{src}\": {reason}</span>"),
    }
}

/// Image plus overlay layer inside a shared relatively positioned frame,
/// so the absolutely positioned overlay inherits the displayed size.
fn overlay_frame(source: &str, overlay: &str, fit_width: bool) -> String {
    let src = attr_escape(source);
    let img_style = if fit_width { "max-width:100%;" } else { "" };
    format!(
        "<div class=\"fadeIn overlay-frame\" style=\"position:relative;overflow:visible;\">\
         <img src=\"{src}\" alt=\"{src}\" style=\"{img_style}\">\
         <div class=\"overlay-layer\" style=\"position:absolute;top:0;left:0;width:100%;height:100%;\">\
         {overlay}</div></div>"
    )
}

/// Escape for insertion into a double-quoted attribute value.
fn attr_escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
#[path = "visualize_test.rs"]
mod tests;
