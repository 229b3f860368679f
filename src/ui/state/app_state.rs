use dioxus::prelude::{use_signal, Signal};

use crate::domain::diff::ChangeMap;
use crate::domain::entities::dataset::{PageRow, SortSpec};
use crate::domain::entities::edit::CellKey;
use crate::DEFAULT_PAGE_SIZE;

/// Every signal the grid UI owns, constructed once per `App` mount and
/// destructured into locals. View state lives here and nowhere else; no
/// global side-channels.
pub struct AppState {
    /// Column set of the loaded table.
    pub columns: Signal<Vec<String>>,
    /// The current page's rows, each carrying its true index.
    pub rows: Signal<Vec<PageRow>>,
    /// Rows surviving the current filter.
    pub total_rows: Signal<usize>,
    pub total_pages: Signal<usize>,
    /// 1-based, as served (clamped) by the last query.
    pub page: Signal<usize>,
    pub page_size: Signal<usize>,
    pub search: Signal<String>,
    pub sort: Signal<Option<SortSpec>>,
    /// Change map recomputed after every store mutation.
    pub changes: Signal<ChangeMap>,
    pub editing_cell: Signal<Option<CellKey>>,
    pub editing_value: Signal<String>,
    pub busy: Signal<bool>,
    pub status: Signal<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            columns: use_signal(Vec::<String>::new),
            rows: use_signal(Vec::<PageRow>::new),
            total_rows: use_signal(|| 0_usize),
            total_pages: use_signal(|| 1_usize),
            page: use_signal(|| 1_usize),
            page_size: use_signal(|| DEFAULT_PAGE_SIZE),
            search: use_signal(String::new),
            sort: use_signal(|| None::<SortSpec>),
            changes: use_signal(ChangeMap::new),
            editing_cell: use_signal(|| None::<CellKey>),
            editing_value: use_signal(String::new),
            busy: use_signal(|| false),
            status: use_signal(|| "Ready".to_string()),
        }
    }
}
