//! Static UI bundle with single-page-app fallback.
//!
//! Existing files are served as-is. Unknown paths get the bundle's index
//! document so client-side routing can handle them. Paths under `/api` never
//! fall back: an unmatched API call is a plain 404.

use std::path::Path;

use axum::{
    body::Body,
    extract::{Request, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tower::ServiceExt;
use tower_http::services::{ServeDir, ServeFile};

use crate::config::AssetsConfig;
use crate::http::server::AppState;

/// Prefix reserved for the JSON API.
pub const API_PREFIX: &str = "/api";

/// File service for the bundle directory.
pub type StaticAssets = ServeDir<ServeFile>;

pub fn static_assets(config: &AssetsConfig) -> StaticAssets {
    let dir = Path::new(&config.dir);
    ServeDir::new(dir)
        .call_fallback_on_method_not_allowed(true)
        .fallback(ServeFile::new(dir.join(&config.index)))
}

/// Router fallback for every path no explicit route claimed.
pub async fn static_fallback(State(state): State<AppState>, request: Request) -> Response {
    if request.uri().path().starts_with(API_PREFIX) {
        tracing::debug!(path = %request.uri().path(), "Unknown API path");
        return (StatusCode::NOT_FOUND, "404 page not found").into_response();
    }

    match state.assets.oneshot(request).await {
        Ok(response) => response.map(Body::new),
        Err(never) => match never {},
    }
}
