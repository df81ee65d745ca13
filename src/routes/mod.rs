//! Router assembly.
//!
//! API routes cover document creation (direct inspection or a probe of a
//! remote endpoint), the per-document panes and toggle signal, and the
//! embedded examples. The demo page is served as static files at `/`.

pub mod documents;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_service = ServeDir::new(state.config.static_dir.clone()).append_index_html_on_directories(true);

    Router::new()
        .route("/api/inspect", post(documents::inspect))
        .route("/api/probe", post(documents::probe))
        .route("/api/document/{id}", get(documents::get_document))
        .route("/api/document/{id}/visualization", get(documents::get_visualization))
        .route("/api/document/{id}/visualize", post(documents::revisualize))
        .route("/api/document/{id}/cascade/{region}", post(documents::toggle_cascade))
        .route("/api/examples", get(documents::list_examples))
        .route("/api/examples/{name}", get(documents::get_example))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .fallback_service(static_service)
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
