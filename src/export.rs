//! Static export of the gallery page.
//!
//! Produces the same document the server renders at `/`, written once to
//! disk so the gallery root can be published by any static file host.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::dataset::{ScanError, list_datasets};
use crate::page::{PageOptions, RenderError, render_page};
use crate::selection::{PageState, SelectionError};

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("dataset '{0}' not found in gallery root")]
    UnknownDataset(String),
    #[error(transparent)]
    Selection(#[from] SelectionError),
    #[error("cannot write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub out: PathBuf,
    pub datasets: usize,
    pub selected: Option<usize>,
}

/// Scan `root`, render the page, and write it to `out`, optionally opening
/// with the dataset named `select` already shown.
///
/// # Errors
///
/// Returns an error if the scan fails, `select` names no listed dataset, or
/// the file cannot be written.
pub fn export_page(
    root: &Path,
    page: &PageOptions,
    out: &Path,
    select: Option<&str>,
) -> Result<ExportSummary, ExportError> {
    let datasets = list_datasets(root)?;

    let mut state = PageState::new();
    if let Some(name) = select {
        let index = datasets
            .iter()
            .position(|d| d.name() == name)
            .ok_or_else(|| ExportError::UnknownDataset(name.to_string()))?;
        state.select(index, datasets.len())?;
    }

    let html = render_page(page, &datasets, &state)?;
    write_replacing(out, html.as_bytes())?;
    Ok(ExportSummary {
        out: out.to_path_buf(),
        datasets: datasets.len(),
        selected: state.selected_index(),
    })
}

/// Write through a hidden sibling file and rename, so a reader never sees a
/// half-written page.
fn write_replacing(out: &Path, bytes: &[u8]) -> Result<(), ExportError> {
    let file_name = out.file_name().map_or_else(
        || "gallery".into(),
        |n| n.to_string_lossy().into_owned(),
    );
    let tmp = out.with_file_name(format!(".{file_name}.tmp"));

    fs::write(&tmp, bytes).map_err(|source| ExportError::Write {
        path: out.to_path_buf(),
        source,
    })?;
    fs::rename(&tmp, out).map_err(|source| {
        let _ = fs::remove_file(&tmp);
        ExportError::Write {
            path: out.to_path_buf(),
            source,
        }
    })
}

#[cfg(test)]
#[path = "export_test.rs"]
mod tests;
