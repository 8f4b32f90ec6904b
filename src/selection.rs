//! Page selection state and per-dataset selection views.
//!
//! DESIGN
//! ======
//! The page has two states: nothing selected, and dataset `i` selected.
//! `PageState` is the single owner of that state plus the flag driving the
//! periodic `b` class toggle. The embedded page controller mirrors this type
//! field for field; keeping a Rust model lets the selection rules be tested
//! without a browser.
//!
//! `SelectionView` is everything `show(i)` writes into the page for one
//! dataset. Views are computed here and embedded as the client `files`
//! array, so the client never derives a path itself. View paths are URLs:
//! the folder name is percent-encoded so names like `run#2` still resolve.

use serde::Serialize;

use crate::dataset::Dataset;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("dataset index {index} out of range ({count} datasets)")]
    OutOfRange { index: usize, count: usize },
}

// =============================================================================
// SELECTION VIEW
// =============================================================================

/// Source of one histogram image, keyed by its element id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistogramSource {
    pub id: &'static str,
    pub src: String,
}

/// Derived sources for one dataset, serialized as `files[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionView {
    pub name: String,
    pub top: String,
    pub bottom: String,
    pub histograms: Vec<HistogramSource>,
    pub input: String,
    pub output: String,
}

impl SelectionView {
    #[must_use]
    pub fn for_dataset(dataset: &Dataset) -> Self {
        let url = Dataset::new(urlencoding::encode(dataset.name()));
        let histograms = url
            .histograms()
            .into_iter()
            .map(|(kind, src)| HistogramSource { id: kind.id(), src })
            .collect();

        Self {
            name: dataset.name().to_string(),
            top: url.top_image(),
            bottom: url.bottom_image(),
            histograms,
            input: url.input_archive(),
            output: url.output_archive(),
        }
    }
}

/// Views for a whole listing; position `i` is dataset `i`.
#[must_use]
pub fn views_for(datasets: &[Dataset]) -> Vec<SelectionView> {
    datasets.iter().map(SelectionView::for_dataset).collect()
}

// =============================================================================
// PAGE STATE
// =============================================================================

/// Initial state handed to the page controller. The controller applies the
/// toggle flag on each tick (adding `b` when set) and then flips it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageState {
    selected_index: Option<usize>,
    /// Whether the next toggle tick adds (`true`) or removes the `b` class.
    toggle_flag: bool,
}

impl PageState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            selected_index: None,
            toggle_flag: true,
        }
    }

    /// Select dataset `index` out of `count`. There is no way back to the
    /// unselected state.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` when `index >= count`; the state is unchanged.
    pub fn select(&mut self, index: usize, count: usize) -> Result<(), SelectionError> {
        if index >= count {
            return Err(SelectionError::OutOfRange { index, count });
        }
        self.selected_index = Some(index);
        Ok(())
    }

    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    /// Whether thumbnail `index` carries the selected marker.
    #[must_use]
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected_index == Some(index)
    }

    /// The detail panel stays hidden until the first selection.
    #[must_use]
    pub fn detail_visible(&self) -> bool {
        self.selected_index.is_some()
    }

    #[must_use]
    pub fn toggle_flag(&self) -> bool {
        self.toggle_flag
    }

    /// One toggle tick: apply the flag, then flip it. Returns whether the `b`
    /// class is present after the tick.
    pub fn toggle(&mut self) -> bool {
        let applied = self.toggle_flag;
        self.toggle_flag = !applied;
        applied
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "selection_test.rs"]
mod tests;
