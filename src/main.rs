mod annotation;
mod config;
mod document;
mod media;
mod render;
mod routes;
mod services;
mod state;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = config::Config::from_env();

    let media = media::HttpMediaProbe::new(config.media_timeout_secs, config.connect_timeout_secs, config.media_max_bytes)
        .expect("media probe client build failed");
    let prober = services::probe::EndpointProber::new(config.probe_timeout_secs, config.connect_timeout_secs)
        .expect("prober client build failed");

    let port = config.port;
    let state = state::AppState::new(config, Arc::new(media), Arc::new(prober));

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "annoscope listening");
    axum::serve(listener, app).await.expect("server failed");
}
