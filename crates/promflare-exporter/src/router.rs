//! Axum router wiring.
//!
//! Exposes a single `GET /metrics` route; everything else falls through to
//! axum's default 404.

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::{routing::get, Router};

use crate::app_state::AppState;

const EXPOSITION_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/metrics", get(scrape))
        .with_state(state)
}

/// Render a point-in-time snapshot of the registry. Read-only.
async fn scrape(State(state): State<AppState>) -> impl IntoResponse {
    let body = state.registry().render();
    ([(header::CONTENT_TYPE, EXPOSITION_CONTENT_TYPE)], body)
}
