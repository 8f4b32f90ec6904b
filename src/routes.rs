//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The gallery page is rendered at `/` (and `/index.html`, so a stale
//! exported file in the root never shadows the live listing). Every other
//! path falls through to the gallery root as static files: dataset images,
//! histograms, archives, and the download button images. Paths with a
//! dot-prefixed segment (`.git`, the export's temporary file) are answered
//! with 404 before they reach the file service.

use std::borrow::Cow;
use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::extract::{Request, State};
use axum::http::{StatusCode, header};
use axum::middleware::{self, Next};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::dataset::{Dataset, list_datasets};
use crate::page::render_page;
use crate::selection::PageState;
use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    let static_files = ServeDir::new(state.root.as_path());

    Router::new()
        .route("/", get(gallery_page))
        .route("/index.html", get(gallery_page))
        .route("/healthz", get(healthz))
        .fallback_service(static_files)
        .layer(middleware::from_fn(reject_hidden))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// `GET /`: rescan the root and render the gallery.
async fn gallery_page(State(state): State<AppState>) -> Response {
    let datasets = scan_or_empty(Arc::clone(&state.root)).await;

    match render_page(&state.page, &datasets, &PageState::new()) {
        Ok(html) => {
            let headers = [(header::CACHE_CONTROL, "no-store")];
            (headers, Html(html)).into_response()
        }
        Err(e) => {
            error!(error = %e, "gallery render failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// An unreadable root renders as an empty gallery rather than an error page.
async fn scan_or_empty(root: Arc<PathBuf>) -> Vec<Dataset> {
    match tokio::task::spawn_blocking(move || list_datasets(&root)).await {
        Ok(Ok(datasets)) => datasets,
        Ok(Err(e)) => {
            warn!(error = %e, "dataset scan failed; rendering empty gallery");
            Vec::new()
        }
        Err(e) => {
            error!(error = %e, "dataset scan task panicked");
            Vec::new()
        }
    }
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

async fn reject_hidden(req: Request, next: Next) -> Response {
    if has_hidden_segment(req.uri().path()) {
        return StatusCode::NOT_FOUND.into_response();
    }
    next.run(req).await
}

/// Segments are compared after percent-decoding, so `%2egit` counts as
/// hidden too. Undecodable segments are checked as sent.
fn has_hidden_segment(path: &str) -> bool {
    path.split('/').any(|segment| {
        urlencoding::decode(segment)
            .unwrap_or(Cow::Borrowed(segment))
            .starts_with('.')
    })
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
