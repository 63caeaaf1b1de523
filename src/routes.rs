//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything is a static file from the site directory. Paths the client
//! router owns (`/create`, `/profile`, any missing `.html`) get `index.html`
//! so the Leptos app can render them; missing assets are a plain 404.
//! Every response carries the security headers, and `.js`/`.css`/`.html`
//! paths get a fixed content type.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::{Path, PathBuf};

use axum::Router;
use axum::extract::Request;
use axum::handler::HandlerWithoutStateExt;
use axum::http::{HeaderValue, StatusCode, Uri, header};
use axum::middleware::{self, Next};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

/// Content type forced for a request path, by extension. Directory paths
/// serve their `index.html`.
pub fn content_type_for(path: &str) -> Option<&'static str> {
    if path.ends_with(".js") {
        Some("application/javascript")
    } else if path.ends_with(".css") {
        Some("text/css")
    } else if path.ends_with(".html") || path.ends_with('/') {
        Some("text/html; charset=utf-8")
    } else {
        None
    }
}

/// Whether a missing `path` should be answered with `index.html`: client
/// routes (no extension) and `.html` pages.
pub fn falls_back_to_index(path: &str) -> bool {
    let last = path.rsplit('/').next().unwrap_or_default();
    last.ends_with(".html") || !last.contains('.')
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

async fn spa_fallback(index: PathBuf, uri: Uri) -> Response {
    let path = uri.path();
    if !falls_back_to_index(path) {
        return (StatusCode::NOT_FOUND, format!("File not found: {}", path.trim_start_matches('/'))).into_response();
    }
    match tokio::fs::read_to_string(&index).await {
        Ok(body) => Html(body).into_response(),
        Err(e) => {
            tracing::error!(index = %index.display(), error = %e, "index.html unreadable");
            (StatusCode::NOT_FOUND, "File not found: index.html").into_response()
        }
    }
}

async fn force_content_type(req: Request, next: Next) -> Response {
    let forced = content_type_for(req.uri().path());
    let mut resp = next.run(req).await;
    if let Some(content_type) = forced {
        if resp.status().is_success() {
            resp.headers_mut().insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
        }
    }
    resp
}

/// Static site router rooted at `site_dir`.
pub fn app(site_dir: &Path) -> Router {
    let index = site_dir.join("index.html");
    let fallback = (move |uri: Uri| spa_fallback(index.clone(), uri)).into_service();
    let files = ServeDir::new(site_dir).append_index_html_on_directories(true).fallback(fallback);

    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(files)
        .layer(middleware::from_fn(force_content_type))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY")))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_XSS_PROTECTION,
            HeaderValue::from_static("1; mode=block"),
        ))
        .layer(TraceLayer::new_for_http())
}
