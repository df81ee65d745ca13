//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the live document store (each document is one displayed
//! response with its session-scoped cascade and visualization state), the
//! media probe used for image metadata discovery, and the endpoint
//! prober. Documents are derived, recomputable state: the store is a
//! bounded in-memory map with oldest-first eviction, never persisted.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::config::Config;
use crate::document::Document;
use crate::media::MediaProbe;
use crate::services::probe::EndpointProber;

/// Shared application state. Clone is required by Axum — all inner fields
/// are Arc-wrapped or cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Live documents keyed by document id.
    pub documents: Arc<RwLock<HashMap<Uuid, Document>>>,
    /// Asynchronous image metadata discovery.
    pub media: Arc<dyn MediaProbe>,
    /// Client for requests against the inspected endpoint.
    pub prober: Arc<EndpointProber>,
}

impl AppState {
    #[must_use]
    pub fn new(config: Config, media: Arc<dyn MediaProbe>, prober: Arc<EndpointProber>) -> Self {
        Self { config, documents: Arc::new(RwLock::new(HashMap::new())), media, prober }
    }
}

/// Insert a document under the store cap, evicting oldest-first.
///
/// Runs under the caller's write lock so admission and the visualizer
/// start are atomic with respect to other requests.
pub fn admit_document(documents: &mut HashMap<Uuid, Document>, document: Document, cap: usize) -> Uuid {
    while documents.len() >= cap.max(1) {
        let oldest = documents.values().min_by_key(|d| d.created_at).map(|d| d.id);
        match oldest {
            Some(id) => {
                documents.remove(&id);
            }
            None => break,
        }
    }
    let id = document.id;
    documents.insert(id, document);
    id
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
