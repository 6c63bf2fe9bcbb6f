mod handlers;
mod state;
mod static_files;

pub use state::AppState;

use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/analyze", get(handlers::analyze))
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(state))
}

pub async fn start(state: AppState, host: &str, port: u16) -> std::io::Result<()> {
    let app = build_router(state);
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Market Scout server listening on http://{}", addr);
    eprintln!("  Press Ctrl+C to stop.");

    axum::serve(listener, app).await
}
