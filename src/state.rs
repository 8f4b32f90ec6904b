//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds only what is fixed at startup: the gallery root and the page
//! options. The dataset listing is deliberately absent; every page request
//! rescans the root so new result folders show up on reload.

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::GalleryConfig;
use crate::page::PageOptions;

/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub root: Arc<PathBuf>,
    pub page: Arc<PageOptions>,
}

impl AppState {
    #[must_use]
    pub fn new(root: PathBuf, page: PageOptions) -> Self {
        Self {
            root: Arc::new(root),
            page: Arc::new(page),
        }
    }

    #[must_use]
    pub fn from_config(config: &GalleryConfig) -> Self {
        Self::new(config.root.clone(), config.page.clone())
    }
}
