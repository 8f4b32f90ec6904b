//! HTML document assembly.
//!
//! DESIGN
//! ======
//! Rendering is a pure function of the options, the listing, and the initial
//! page state; it performs no I/O. Everything the client script needs travels
//! in a JSON data island, so dataset names never appear inside script source.
//! Thumbnail `i` carries class `a{i}` and handler `show(i)`, and the island's
//! `files[i]` is built from the same slice position, which keeps the two in
//! step within a render.

use std::fmt::Write;

use serde::Serialize;

use super::escape;
use crate::dataset::{Dataset, HistogramKind};
use crate::selection::{PageState, SelectionView, views_for};

const STYLESHEET: &str = include_str!("gallery.css");
const CONTROLLER_SCRIPT: &str = include_str!("gallery.js");

pub const DEFAULT_TITLE: &str = "Dataset Gallery";
pub const DEFAULT_FADE_PERIOD_MS: u64 = 3000;
pub const DEFAULT_TOGGLE_INTERVAL_MS: u64 = 1000;

/// Rendered thumbnail edge, in CSS pixels.
const THUMBNAIL_SIZE: u32 = 170;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to serialize page data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write page markup: {0}")]
    Fmt(#[from] std::fmt::Error),
}

/// Presentation settings that are fixed for the lifetime of the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOptions {
    pub title: String,
    /// Full period of the top image cross-fade animation.
    pub fade_period_ms: u64,
    /// Period of the `b` class toggle on the detail panel.
    pub toggle_interval_ms: u64,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            fade_period_ms: DEFAULT_FADE_PERIOD_MS,
            toggle_interval_ms: DEFAULT_TOGGLE_INTERVAL_MS,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PageData<'a> {
    files: &'a [SelectionView],
    state: PageState,
    toggle_interval_ms: u64,
}

/// Render the full gallery document.
///
/// # Errors
///
/// Returns an error if the page data cannot be serialized or the markup
/// cannot be written.
pub fn render_page(
    options: &PageOptions,
    datasets: &[Dataset],
    state: &PageState,
) -> Result<String, RenderError> {
    let views = views_for(datasets);
    let selected = state.selected_index().and_then(|i| views.get(i));

    let data = PageData {
        files: &views,
        state: *state,
        toggle_interval_ms: options.toggle_interval_ms,
    };
    let data_json = escape::script_json(&serde_json::to_string(&data)?);

    let mut html = String::with_capacity(4096 + views.len() * 160);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n");
    html.push_str("<head>\n<meta charset=\"utf-8\">\n");
    writeln!(html, "<title>{}</title>", escape::html(&options.title))?;
    writeln!(html, "<style>\n{STYLESHEET}</style>\n</head>")?;
    writeln!(
        html,
        "<body style=\"--fade-period: {}ms\">",
        options.fade_period_ms
    )?;

    write_thumbnails(&mut html, &views, state)?;
    write_detail(&mut html, selected, state)?;

    writeln!(
        html,
        "<script type=\"application/json\" id=\"gallery-data\">{data_json}</script>"
    )?;
    writeln!(html, "<script>\n{CONTROLLER_SCRIPT}</script>")?;
    html.push_str("</body>\n</html>\n");
    Ok(html)
}

fn write_thumbnails(
    html: &mut String,
    views: &[SelectionView],
    state: &PageState,
) -> std::fmt::Result {
    html.push_str("<div class=\"panel\">\n");
    for (i, view) in views.iter().enumerate() {
        let sel = if state.is_selected(i) { " sel" } else { "" };
        writeln!(
            html,
            "\t<img class=\"t a{i}{sel}\" onclick=\"show({i})\" \
             width=\"{THUMBNAIL_SIZE}\" height=\"{THUMBNAIL_SIZE}\" \
             loading=\"lazy\" alt=\"{name}\" title=\"{name}\" src=\"{src}\">",
            name = escape::html(&view.name),
            src = escape::html(&view.top),
        )?;
    }
    html.push_str("</div>\n");
    Ok(())
}

fn write_detail(
    html: &mut String,
    selected: Option<&SelectionView>,
    state: &PageState,
) -> std::fmt::Result {
    let mut classes = Vec::new();
    if let Some(i) = state.selected_index() {
        classes.push(format!("a{i}"));
    }
    // A cleared flag means the last tick added `b`.
    if !state.toggle_flag() {
        classes.push("b".to_string());
    }
    let class_attr = if classes.is_empty() {
        String::new()
    } else {
        format!(" class=\"{}\"", classes.join(" "))
    };
    let style_attr = if state.detail_visible() {
        " style=\"visibility:visible\""
    } else {
        ""
    };
    writeln!(html, "<div id=\"show\"{class_attr}{style_attr}>")?;

    let input_href = href_attr(selected.map(|v| v.input.as_str()));
    let output_href = href_attr(selected.map(|v| v.output.as_str()));
    writeln!(
        html,
        "\t<a id=\"input\"{input_href}><img class=\"get input\" \
         title=\"Download input for this dataset\" \
         src=\"./download_input.png\" alt=\"input\"></a>"
    )?;
    writeln!(
        html,
        "\t<a id=\"output\"{output_href}><img class=\"get output\" \
         title=\"Download output for this dataset\" \
         src=\"./download_output.png\" alt=\"output\"></a>"
    )?;

    html.push_str("\t<div class=\"gridcontainer\">\n");
    html.push_str("\t\t<div id=\"bigimgcontainer\">\n");
    writeln!(
        html,
        "\t\t\t<img id=\"showimgbottom\" class=\"bigimg bottom\"{}>",
        src_attr(selected.map(|v| v.bottom.as_str()))
    )?;
    writeln!(
        html,
        "\t\t\t<img id=\"showimgtop\" class=\"bigimg top\"{}>",
        src_attr(selected.map(|v| v.top.as_str()))
    )?;
    html.push_str("\t\t</div>\n\t\t<div id=\"histocontainer\">\n");
    for (slot, kind) in HistogramKind::ALL.iter().enumerate() {
        let src = selected
            .and_then(|v| v.histograms.get(slot))
            .map(|h| h.src.as_str());
        writeln!(
            html,
            "\t\t\t<img id=\"{}\" loading=\"lazy\" class=\"histo\" title=\"{}\"{}>",
            kind.id(),
            kind.title(),
            src_attr(src)
        )?;
    }
    html.push_str("\t\t</div>\n\t</div>\n</div>\n");
    Ok(())
}

/// Unset sources are omitted entirely; an empty `src` would re-request the page.
fn src_attr(src: Option<&str>) -> String {
    src.map(|s| format!(" src=\"{}\"", escape::html(s)))
        .unwrap_or_default()
}

fn href_attr(href: Option<&str>) -> String {
    href.map(|h| format!(" href=\"{}\"", escape::html(h)))
        .unwrap_or_default()
}
