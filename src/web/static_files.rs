//! Static file serving for the embedded viewer frontend.
//!
//! The frontend is a small static bundle embedded into the binary at
//! compile time, so a single binary plus a data directory is a complete
//! deployment. Unknown non-file paths fall back to `index.html`.

use axum::{
    body::Body,
    extract::Request,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use rust_embed::Embed;
use std::path::PathBuf;

/// Embedded static files from the frontend bundle.
#[derive(Embed)]
#[folder = "web/build"]
#[include = "*.html"]
#[include = "*.js"]
#[include = "*.css"]
#[include = "*.png"]
#[include = "*.ico"]
#[include = "*.svg"]
#[include = "assets/**/*"]
pub struct StaticAssets;

/// Serves static files with SPA fallback.
///
/// 1. Tries to serve the exact requested path.
/// 2. If not found and the path doesn't look like a file, serves
///    `index.html`.
pub async fn serve_static(request: Request) -> Response {
    let path = request.uri().path();

    // Remove leading slash for embed lookup
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        return serve_file("index.html");
    }

    if let Some(content) = StaticAssets::get(path) {
        return file_response(path, content.data.as_ref());
    }

    // Check if this looks like a file request (has extension)
    let looks_like_file = PathBuf::from(path)
        .extension()
        .is_some_and(|ext| !ext.is_empty());

    if looks_like_file {
        return (StatusCode::NOT_FOUND, "File not found").into_response();
    }

    // SPA fallback
    serve_file("index.html")
}

/// Serves a specific file from embedded assets.
fn serve_file(path: &str) -> Response {
    match StaticAssets::get(path) {
        Some(content) => file_response(path, content.data.as_ref()),
        None => (StatusCode::NOT_FOUND, "File not found").into_response(),
    }
}

/// Creates an HTTP response for a file with appropriate content type.
fn file_response(path: &str, content: &[u8]) -> Response {
    let mime = mime_guess::from_path(path).first_or_octet_stream();

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, mime.as_ref())
        .header(header::CACHE_CONTROL, cache_control_for_path(path))
        .body(Body::from(content.to_vec()))
        .unwrap_or_else(|_| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to create response",
            )
                .into_response()
        })
}

/// Returns the Cache-Control header value for a file path.
///
/// HTML files always revalidate; everything else gets a short cache.
fn cache_control_for_path(path: &str) -> &'static str {
    if std::path::Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("html"))
    {
        "no-cache, must-revalidate"
    } else {
        "public, max-age=3600"
    }
}

/// Returns true if embedded assets are available.
pub fn has_embedded_assets() -> bool {
    StaticAssets::get("index.html").is_some()
}
