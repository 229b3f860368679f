use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;

use crate::app::App;
use crate::domain::entities::dataset::{SortDirection, SortSpec};

mod app;
mod domain;
mod infra;
mod platform;
mod ui;
mod usecase;

/// Page sizes offered in the pagination bar. The pipeline honors any
/// positive size; these are just the presets.
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [25, 50, 100, 250];
pub const DEFAULT_PAGE_SIZE: usize = 50;
/// Default filename offered by the export save dialog.
pub const EXPORT_FILE_NAME: &str = "export.csv";

fn main() {
    init_logging();
    #[cfg(windows)]
    platform::desktop::hide_console_window();

    let webview_data_dir =
        default_webview_data_dir().expect("should resolve and create WebView2 data directory");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(dioxus::desktop::WindowBuilder::new().with_title("CSV Grid"))
                .with_data_directory(webview_data_dir),
        )
        .launch(App);
}

fn init_logging() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("csvgrid=info")),
        )
        .init();
}

fn ensure_webview_data_dir(base_data_dir: &Path) -> Result<PathBuf> {
    let dir = base_data_dir.join("WebView2");
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create webview data dir: {}", dir.display()))?;
    Ok(dir)
}

fn default_webview_data_dir() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("", "", "csvgrid")
        .context("failed to resolve application directories")?;
    ensure_webview_data_dir(dirs.data_dir())
}

/// Sort state after a click on `clicked_col`'s header: a new column starts
/// ascending, the current column toggles direction. There is no click path
/// back to unsorted; a fresh import clears the sort instead.
pub fn next_sort(current: Option<SortSpec>, clicked_col: usize) -> SortSpec {
    match current {
        Some(sort) if sort.column_idx == clicked_col => SortSpec {
            column_idx: clicked_col,
            direction: match sort.direction {
                SortDirection::Asc => SortDirection::Desc,
                SortDirection::Desc => SortDirection::Asc,
            },
        },
        _ => SortSpec {
            column_idx: clicked_col,
            direction: SortDirection::Asc,
        },
    }
}

pub fn sort_indicator(sort: Option<SortSpec>, col_idx: usize) -> &'static str {
    match sort {
        Some(sort) if sort.column_idx == col_idx => match sort.direction {
            SortDirection::Asc => " \u{2191}",
            SortDirection::Desc => " \u{2193}",
        },
        _ => "",
    }
}

pub fn table_container_style() -> &'static str {
    "border: 1px solid #ccc; border-radius: 8px; overflow: auto; max-height: 70vh; background: #fff;"
}

pub fn table_header_cell_style() -> &'static str {
    "border: 1px solid #bbb; padding: 4px 8px; position: sticky; top: 0; background: #f4f6f8; text-align: left; cursor: pointer; white-space: nowrap;"
}

pub fn table_cell_style(changed: bool, matched: bool) -> String {
    let mut style = String::from("border: 1px solid #ddd; padding: 4px 8px; text-align: left;");
    if matched {
        style.push_str(" background: #fff9c4;");
    }
    if changed {
        style.push_str(" outline: 2px solid #f0a020; outline-offset: -2px;");
    }
    style
}

pub fn changed_row_style(changed: bool) -> &'static str {
    if changed {
        "background: #fff4e0;"
    } else {
        ""
    }
}
