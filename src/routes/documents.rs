//! Document routes — create, render, toggle, visualize.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;
use uuid::Uuid;

use crate::annotation::visualize;
use crate::document::{Document, VisualizationPane};
use crate::render::cascade;
use crate::render::classify::escape_html;
use crate::services::examples;
use crate::services::probe::{ProbeCall, ProbeError, ProbeMethod, ProbeOutcome};
use crate::state::{AppState, admit_document};

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Deserialize)]
pub struct InspectBody {
    /// Raw payload: a string, a pre-parsed object, or nothing at all.
    #[serde(default)]
    pub payload: Option<Value>,
}

#[derive(Deserialize)]
pub struct ProbeBody {
    pub url: String,
    pub method: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub etag: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DocumentResponse {
    pub id: Uuid,
    pub raw_html: String,
    pub pretty_html: String,
    pub region_count: usize,
    /// Regions the user has collapsed, so a re-mounted pane can reapply
    /// its toggle state (the markup itself is always fully expanded).
    pub collapsed_regions: Vec<usize>,
    /// Tree-based rendering without lexical false positives; absent when
    /// the payload did not parse.
    pub strict_html: Option<String>,
    pub visualization: VisualizationPane,
}

#[derive(Debug, Serialize)]
pub struct ProbeResponse {
    pub protocol_html: String,
    pub status: Option<u16>,
    /// Absent when the transport itself failed.
    pub document: Option<DocumentResponse>,
}

#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    pub region: usize,
    pub expanded: bool,
    /// Glyph the toggle control should now show.
    pub glyph: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ExampleSummary {
    pub name: &'static str,
    pub title: &'static str,
}

fn document_response(doc: &Document) -> DocumentResponse {
    let collapsed_regions = (0..doc.cascade.region_count())
        .filter(|&region| !doc.cascade.is_expanded(region))
        .collect();
    DocumentResponse {
        id: doc.id,
        raw_html: doc.raw_view(),
        pretty_html: doc.pretty_view(),
        region_count: doc.cascade.region_count(),
        collapsed_regions,
        strict_html: doc.strict_view(),
        visualization: doc.visualization.clone(),
    }
}

// =============================================================================
// DOCUMENT CREATION
// =============================================================================

/// `POST /api/inspect` — create a document straight from a payload.
pub async fn inspect(
    State(state): State<AppState>,
    Json(body): Json<InspectBody>,
) -> Result<Json<DocumentResponse>, StatusCode> {
    let document = Document::new(body.payload);
    let id = document.id;
    let mut documents = state.documents.write().await;
    admit_document(&mut documents, document, state.config.max_documents);
    let Some(doc) = documents.get_mut(&id) else {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    };
    visualize::start_visualization(&state, doc);
    Ok(Json(document_response(doc)))
}

/// `POST /api/probe` — probe the remote endpoint, then inspect the body.
pub async fn probe(
    State(state): State<AppState>,
    Json(body): Json<ProbeBody>,
) -> Result<Json<ProbeResponse>, StatusCode> {
    let method = ProbeMethod::parse(&body.method).map_err(|_| StatusCode::BAD_REQUEST)?;
    let call = ProbeCall { url: body.url, method, body: body.body, etag: body.etag, slug: body.slug };

    match state.prober.send(&call).await {
        Ok(outcome) => {
            let document = Document::new(Some(Value::String(outcome.body.clone())));
            let id = document.id;
            let mut documents = state.documents.write().await;
            admit_document(&mut documents, document, state.config.max_documents);
            let Some(doc) = documents.get_mut(&id) else {
                return Err(StatusCode::INTERNAL_SERVER_ERROR);
            };
            visualize::start_visualization(&state, doc);
            Ok(Json(ProbeResponse {
                protocol_html: protocol_view(&call, &outcome),
                status: Some(outcome.status),
                document: Some(document_response(doc)),
            }))
        }
        Err(err) => {
            warn!(url = %call.url, error = %err, "probe failed");
            Ok(Json(ProbeResponse { protocol_html: probe_error_view(&call, &err), status: None, document: None }))
        }
    }
}

// =============================================================================
// DOCUMENT STATE
// =============================================================================

/// `GET /api/document/:id` — re-render all panes.
pub async fn get_document(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DocumentResponse>, StatusCode> {
    let documents = state.documents.read().await;
    let doc = documents.get(&id).ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(document_response(doc)))
}

/// `GET /api/document/:id/visualization` — poll the visualization pane.
pub async fn get_visualization(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<VisualizationPane>, StatusCode> {
    let documents = state.documents.read().await;
    let doc = documents.get(&id).ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(doc.visualization.clone()))
}

/// `POST /api/document/:id/visualize` — re-run the target visualizer.
pub async fn revisualize(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<VisualizationPane>, StatusCode> {
    let mut documents = state.documents.write().await;
    let doc = documents.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    visualize::start_visualization(&state, doc);
    Ok(Json(doc.visualization.clone()))
}

/// `POST /api/document/:id/cascade/:region` — the toggle-click signal.
pub async fn toggle_cascade(
    State(state): State<AppState>,
    Path((id, region)): Path<(Uuid, usize)>,
) -> Result<Json<ToggleResponse>, StatusCode> {
    let mut documents = state.documents.write().await;
    let doc = documents.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    let expanded = doc.cascade.toggle(region).ok_or(StatusCode::NOT_FOUND)?;
    let glyph = if expanded { cascade::GLYPH_EXPANDED } else { cascade::GLYPH_COLLAPSED };
    Ok(Json(ToggleResponse { region, expanded, glyph }))
}

// =============================================================================
// EXAMPLES
// =============================================================================

/// `GET /api/examples` — names and titles of the embedded payloads.
pub async fn list_examples() -> Json<Vec<ExampleSummary>> {
    Json(
        examples::EXAMPLES
            .iter()
            .map(|e| ExampleSummary { name: e.name, title: e.title })
            .collect(),
    )
}

/// `GET /api/examples/:name` — one payload, served as LD-JSON text.
pub async fn get_example(Path(name): Path<String>) -> Response {
    match examples::find(&name) {
        Some(example) => ([(CONTENT_TYPE, "application/ld+json")], example.text).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

// =============================================================================
// PROTOCOL PANE
// =============================================================================

/// Request line, status line, and response headers as an escaped pane.
fn protocol_view(call: &ProbeCall, outcome: &ProbeOutcome) -> String {
    let mut html = String::new();
    html.push_str("<p class=\"protocol-request\">");
    html.push_str(call.method.as_str());
    html.push(' ');
    html.push_str(&escape_html(&call.url));
    html.push_str("</p><p class=\"protocol-status\">HTTP ");
    html.push_str(&outcome.status.to_string());
    html.push(' ');
    html.push_str(&escape_html(&outcome.status_text));
    html.push_str("</p><ul class=\"protocol-headers\">");
    for (name, value) in &outcome.headers {
        html.push_str("<li>");
        html.push_str(&escape_html(name));
        html.push_str(": ");
        html.push_str(&escape_html(value));
        html.push_str("</li>");
    }
    html.push_str("</ul>");
    html
}

/// Transport failures still render an explanatory pane.
fn probe_error_view(call: &ProbeCall, err: &ProbeError) -> String {
    format!(
        "<p class=\"protocol-request\">{} {}</p><p class=\"protocol-error\">{}</p>",
        call.method.as_str(),
        escape_html(&call.url),
        escape_html(&err.to_string())
    )
}

#[cfg(test)]
#[path = "documents_test.rs"]
mod tests;
