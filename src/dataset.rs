//! Dataset discovery and path derivation.
//!
//! DESIGN
//! ======
//! A dataset is a subfolder of the gallery root. Everything the page shows
//! for it is found by naming convention, so a `Dataset` carries only its name
//! and derives every other path on demand. Listing keeps the order that
//! `read_dir` yields; the zero-based position in that list is the selector
//! key used by both the thumbnail strip and the client `files` array.
//!
//! ERROR HANDLING
//! ==============
//! Failing to open or iterate the root fails the scan. Entries whose
//! metadata cannot be read, or whose names are not UTF-8, are skipped.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Suffix appended to a dataset name for every processed (output) artifact.
pub const PROCESSED_SUFFIX: &str = "_rem_p0_0_quadrangulation_smooth";

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("cannot read gallery root {}: {source}", .path.display())]
    ReadRoot { path: PathBuf, source: io::Error },
    #[error("cannot read entry in {}: {source}", .path.display())]
    ReadEntry { path: PathBuf, source: io::Error },
}

// =============================================================================
// HISTOGRAMS
// =============================================================================

/// The four precomputed distribution charts shipped with every dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistogramKind {
    EdgeLength,
    Flatness,
    Torsion,
    VoronoiArea,
}

impl HistogramKind {
    /// Display order on the page.
    pub const ALL: [Self; 4] = [
        Self::EdgeLength,
        Self::Flatness,
        Self::Torsion,
        Self::VoronoiArea,
    ];

    /// Element id on the page; also the stem of the PNG file name.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::EdgeLength => "edgeLen",
            Self::Flatness => "flatness",
            Self::Torsion => "torsion",
            Self::VoronoiArea => "voroArea",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::EdgeLength => "Edge Length distribution",
            Self::Flatness => "Flatness distribution",
            Self::Torsion => "Torsion distribution",
            Self::VoronoiArea => "Voronoi Area distribution",
        }
    }

    #[must_use]
    pub fn file_name(self) -> String {
        format!("{}Histogram.png", self.id())
    }
}

// =============================================================================
// DATASET
// =============================================================================

/// One qualifying subfolder of the gallery root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    name: String,
}

impl Dataset {
    /// Wrap a folder name. Callers are expected to have passed it through
    /// [`qualifies`]; `list_datasets` always does.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unprocessed mesh render; doubles as the thumbnail.
    #[must_use]
    pub fn top_image(&self) -> String {
        format!("{0}/{0}.obj.jpg", self.name)
    }

    /// Render of the quadrangulated mesh.
    #[must_use]
    pub fn bottom_image(&self) -> String {
        format!("{0}/{0}{PROCESSED_SUFFIX}.obj.jpg", self.name)
    }

    #[must_use]
    pub fn histogram(&self, kind: HistogramKind) -> String {
        format!("{}/{}", self.name, kind.file_name())
    }

    /// All four histogram paths in display order.
    #[must_use]
    pub fn histograms(&self) -> [(HistogramKind, String); 4] {
        HistogramKind::ALL.map(|kind| (kind, self.histogram(kind)))
    }

    #[must_use]
    pub fn input_archive(&self) -> String {
        format!("{0}/{0}.zip", self.name)
    }

    #[must_use]
    pub fn output_archive(&self) -> String {
        format!("{0}/{0}{PROCESSED_SUFFIX}.zip", self.name)
    }
}

// =============================================================================
// LISTING
// =============================================================================

/// Whether a directory entry is shown as a dataset: it must be a directory,
/// carry no extension, and not be hidden.
#[must_use]
pub fn qualifies(name: &str, is_dir: bool) -> bool {
    is_dir && !name.is_empty() && !name.starts_with('.') && !name.contains('.')
}

/// Enumerate the datasets directly under `root`, in filesystem order.
///
/// # Errors
///
/// Returns an error if `root` cannot be opened or the directory stream fails
/// mid-iteration.
pub fn list_datasets(root: &Path) -> Result<Vec<Dataset>, ScanError> {
    let entries = fs::read_dir(root).map_err(|source| ScanError::ReadRoot {
        path: root.to_path_buf(),
        source,
    })?;

    let mut datasets = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| ScanError::ReadEntry {
            path: root.to_path_buf(),
            source,
        })?;
        let path = entry.path();

        let Ok(name) = entry.file_name().into_string() else {
            debug!(path = %path.display(), "skipping non UTF-8 entry");
            continue;
        };

        // Follow symlinks so a linked dataset folder still counts.
        let is_dir = match fs::metadata(&path) {
            Ok(meta) => meta.is_dir(),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "skipping unreadable entry");
                continue;
            }
        };

        if qualifies(&name, is_dir) {
            datasets.push(Dataset::new(name));
        }
    }

    debug!(root = %root.display(), count = datasets.len(), "datasets listed");
    Ok(datasets)
}

#[cfg(test)]
#[path = "dataset_test.rs"]
mod tests;
