//! Serving the bundled Bootstrap files.
//!
//! Without a folder override the copy compiled into the crate is served;
//! with one, files are read from disk on each request.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{
    extract,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, MethodRouter},
};

use crate::assets::bundled_file;

/// GET handler for a route ending in `/*path`: the compiled-in files, or
/// files under `folder` when an override is configured.
pub fn static_route(folder: Option<PathBuf>) -> MethodRouter {
    match folder {
        Some(root) => {
            let root = Arc::new(root);
            get(move |extract::Path(path): extract::Path<String>| {
                let root = Arc::clone(&root);
                async move { serve_asset(&root, &path).await }
            })
        }
        None => get(|extract::Path(path): extract::Path<String>| async move {
            serve_bundled(&path)
        }),
    }
}

/// Serve a file compiled into the crate.
pub fn serve_bundled(path: &str) -> Response {
    let Some(content) = bundled_file(path) else {
        tracing::debug!("No bundled file {:?}", path);
        return (StatusCode::NOT_FOUND, "File not found").into_response();
    };

    let mime = mime_guess::from_path(path)
        .first_or_octet_stream()
        .to_string();

    ([(header::CONTENT_TYPE, mime)], content).into_response()
}

/// Serve `path` relative to `root`, refusing anything outside it.
pub async fn serve_asset(root: &Path, path: &str) -> Response {
    let canonical_root = match root.canonicalize() {
        Ok(p) => p,
        Err(e) => {
            tracing::warn!("Static folder {} unavailable: {}", root.display(), e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Server configuration error",
            )
                .into_response();
        }
    };

    if path.contains("..") || path.starts_with('/') {
        tracing::warn!("Rejected static path {:?}", path);
        return (StatusCode::NOT_FOUND, "File not found").into_response();
    }

    let canonical_file = match canonical_root.join(path).canonicalize() {
        Ok(p) => p,
        Err(_) => {
            return (StatusCode::NOT_FOUND, "File not found").into_response();
        }
    };

    if !canonical_file.starts_with(&canonical_root) || !canonical_file.is_file() {
        return (StatusCode::NOT_FOUND, "File not found").into_response();
    }

    let content = match tokio::fs::read(&canonical_file).await {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!("Failed to read {}: {}", canonical_file.display(), e);
            return (StatusCode::INTERNAL_SERVER_ERROR, "Failed to read file").into_response();
        }
    };

    let mime = mime_guess::from_path(&canonical_file)
        .first_or_octet_stream()
        .to_string();

    tracing::debug!("Serving {} ({})", canonical_file.display(), mime);
    ([(header::CONTENT_TYPE, mime)], content).into_response()
}
