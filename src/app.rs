use std::sync::Arc;

use dioxus::prelude::*;
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

use crate::domain::entities::dataset::PageQuery;
use crate::domain::entities::edit::CellKey;
use crate::infra::memory::query::{matches, normalize_search};
use crate::infra::memory::store::MemoryStore;
use crate::platform::desktop::run_blocking;
use crate::ui::state::app_state::AppState;
use crate::usecase::services::edit_service::EditService;
use crate::usecase::services::export_service::ExportService;
use crate::usecase::services::import_service::ImportService;
use crate::usecase::services::query_service::QueryService;
use crate::{
    changed_row_style, next_sort, sort_indicator, table_cell_style, table_container_style,
    table_header_cell_style, EXPORT_FILE_NAME, PAGE_SIZE_OPTIONS,
};

#[component]
pub fn App() -> Element {
    let store = use_hook(|| Arc::new(MemoryStore::new()));
    let import_service = Arc::new(ImportService::new(store.clone()));
    let query_service = Arc::new(QueryService::new(store.clone()));
    let edit_service = Arc::new(EditService::new(store.clone()));
    let export_service = Arc::new(ExportService::new(store.clone()));

    let AppState {
        mut columns,
        mut rows,
        mut total_rows,
        mut total_pages,
        mut page,
        mut page_size,
        mut search,
        mut sort,
        mut changes,
        mut editing_cell,
        mut editing_value,
        mut busy,
        mut status,
    } = AppState::new();

    // Re-derives the visible page from the store. The served page comes back
    // clamped, so callers may pass stale or out-of-range targets.
    let query_service_for_reload = query_service.clone();
    let do_reload = move |target_page: usize| {
        let query = PageQuery {
            page: target_page,
            page_size: page_size(),
            search: search(),
            sort: sort(),
        };
        match run_blocking(|| query_service_for_reload.query_page(query)) {
            Ok(result) => {
                *columns.write() = result.columns;
                *rows.write() = result.rows;
                *total_rows.write() = result.total_rows;
                *total_pages.write() = result.total_pages;
                *page.write() = result.page;
            }
            Err(err) => {
                *status.write() = format!("Failed to load page: {err}");
            }
        }
    };

    let query_service_for_changes = query_service.clone();
    let refresh_changes = move || match query_service_for_changes.changes() {
        Ok(map) => *changes.write() = map,
        Err(err) => *status.write() = format!("Failed to compute changes: {err}"),
    };

    let edit_service_for_commit = edit_service.clone();
    let mut reload_after_commit = do_reload.clone();
    let mut refresh_after_commit = refresh_changes.clone();
    let commit_edit = move |key: CellKey, next_value: String| {
        match run_blocking(|| edit_service_for_commit.set_cell(&key, next_value)) {
            Ok(()) => {
                editing_cell.set(None);
                editing_value.set(String::new());
                reload_after_commit(page());
                refresh_after_commit();
                *status.write() = format!("Updated {} in row {}", key.column, key.row_idx + 1);
            }
            Err(err) => {
                *status.write() = format!("Edit rejected: {err}");
            }
        }
    };

    let current_columns = columns();
    let current_rows = rows();
    let current_total_rows = total_rows();
    let current_total_pages = total_pages();
    let current_page = page();
    let current_page_size = page_size();
    let sort_snapshot = sort();
    let changes_snapshot = changes();
    let editing_cell_snapshot = editing_cell();
    let needle = normalize_search(&search());

    let import_service_for_import = import_service.clone();
    let mut reload_for_import = do_reload.clone();
    let mut refresh_for_import = refresh_changes.clone();

    let edit_service_for_reset = edit_service.clone();
    let mut reload_for_reset = do_reload.clone();
    let mut refresh_for_reset = refresh_changes.clone();

    let export_service_for_export = export_service.clone();

    let mut reload_for_search = do_reload.clone();
    let mut reload_for_page_size = do_reload.clone();
    let mut reload_for_first = do_reload.clone();
    let mut reload_for_prev = do_reload.clone();
    let mut reload_for_next = do_reload.clone();
    let mut reload_for_last = do_reload.clone();

    rsx! {
        div {
            style: "font-family: -apple-system, 'Segoe UI', sans-serif; padding: 16px; background: #f7f8fa; min-height: 100vh;",
            h1 { style: "font-size: 20px; margin: 0 0 12px;", "CSV Grid" }

            div {
                style: "display: flex; gap: 12px; align-items: center; flex-wrap: wrap; padding: 8px 0;",
                input {
                    style: "padding: 6px 10px; border: 1px solid #bbb; border-radius: 6px; min-width: 280px;",
                    placeholder: "Search across all columns",
                    value: search(),
                    oninput: move |event| {
                        search.set(event.value());
                        if columns().is_empty() {
                            return;
                        }
                        // Keep the page; the pipeline clamps it if the
                        // filtered set shrank below it.
                        reload_for_search(page());
                    },
                }
                span { style: "color: #555;", "Rows: {current_total_rows}" }
                div { style: "flex: 1;" }
                button {
                    disabled: busy(),
                    onclick: move |_| {
                        if busy() {
                            return;
                        }

                        let Some(file_path) = FileDialog::new()
                            .add_filter("Tabular files", &["csv", "xlsx"])
                            .pick_file() else {
                            *status.write() = "Import cancelled".to_string();
                            return;
                        };

                        *busy.write() = true;
                        *status.write() = format!("Importing {}", file_path.display());

                        let is_xlsx = file_path
                            .extension()
                            .and_then(|ext| ext.to_str())
                            .map(|ext| ext.eq_ignore_ascii_case("xlsx"))
                            .unwrap_or(false);
                        let result = run_blocking(|| {
                            if is_xlsx {
                                import_service_for_import.import_xlsx(&file_path)
                            } else {
                                import_service_for_import.import_csv(&file_path)
                            }
                        });

                        match result {
                            Ok(outcome) => {
                                sort.set(None);
                                editing_cell.set(None);
                                editing_value.set(String::new());
                                reload_for_import(1);
                                refresh_for_import();
                                *status.write() = format!(
                                    "Imported {} rows, {} columns",
                                    outcome.row_count, outcome.column_count
                                );
                            }
                            Err(err) => {
                                // The previous table, if any, is untouched.
                                *status.write() = format!("Import failed: {err}");
                            }
                        }
                        *busy.write() = false;
                    },
                    "Import"
                }
                button {
                    disabled: busy(),
                    onclick: move |_| {
                        if columns().is_empty() {
                            return;
                        }
                        if changes().is_empty() {
                            *status.write() = "No edits to reset".to_string();
                            return;
                        }
                        let confirm = MessageDialog::new()
                            .set_level(MessageLevel::Warning)
                            .set_title("Reset edits")
                            .set_description("Discard every edit made since import?")
                            .set_buttons(MessageButtons::YesNo)
                            .show();
                        if confirm != MessageDialogResult::Yes {
                            return;
                        }
                        *busy.write() = true;
                        match run_blocking(|| edit_service_for_reset.reset()) {
                            Ok(()) => {
                                editing_cell.set(None);
                                editing_value.set(String::new());
                                reload_for_reset(page());
                                refresh_for_reset();
                                *status.write() = "Edits reset".to_string();
                            }
                            Err(err) => {
                                *status.write() = format!("Reset failed: {err}");
                            }
                        }
                        *busy.write() = false;
                    },
                    "Reset edits"
                }
                button {
                    disabled: busy(),
                    onclick: move |_| {
                        if columns().is_empty() {
                            *status.write() = "Nothing to export".to_string();
                            return;
                        }
                        let Some(file_path) = FileDialog::new()
                            .add_filter("CSV", &["csv"])
                            .set_file_name(EXPORT_FILE_NAME)
                            .save_file() else {
                            *status.write() = "Export cancelled".to_string();
                            return;
                        };
                        *busy.write() = true;
                        match run_blocking(|| export_service_for_export.export_csv(&file_path)) {
                            Ok(written) => {
                                *status.write() =
                                    format!("Exported {} rows to {}", written, file_path.display());
                            }
                            Err(err) => {
                                *status.write() = format!("Export failed: {err}");
                            }
                        }
                        *busy.write() = false;
                    },
                    "Export CSV"
                }
            }

            if current_columns.is_empty() {
                div {
                    style: "padding: 48px 16px; text-align: center; color: #777; border: 1px dashed #bbb; border-radius: 8px; background: #fff;",
                    "Import a CSV or XLSX file to get started. The first line becomes the column headers."
                }
            }

            if !current_columns.is_empty() {
                div {
                    style: "{table_container_style()}",
                    table { style: "border-collapse: collapse; width: 100%; background: #fff;",
                        thead {
                            tr {
                                {current_columns.iter().enumerate().map(|(col_idx, header)| {
                                    let header = header.clone();
                                    let indicator = sort_indicator(sort_snapshot, col_idx);
                                    let mut reload_for_sort = do_reload.clone();
                                    rsx!(
                                        th {
                                            style: "{table_header_cell_style()}",
                                            onclick: move |_| {
                                                if busy() {
                                                    return;
                                                }
                                                sort.set(Some(next_sort(sort(), col_idx)));
                                                reload_for_sort(page());
                                            },
                                            "{header}{indicator}"
                                        }
                                    )
                                })}
                            }
                        }
                        tbody {
                            {current_rows.iter().map(|row| {
                                let row_changes = changes_snapshot.get(&row.index).cloned();
                                let row_changed = row_changes.is_some();
                                let cells = row.cells.clone();
                                let row_index = row.index;
                                let current_columns = current_columns.clone();
                                let needle = needle.clone();
                                let commit_edit = commit_edit.clone();
                                let editing_cell_snapshot = editing_cell_snapshot.clone();
                                rsx!(
                                    tr {
                                        style: "{changed_row_style(row_changed)}",
                                        {cells.into_iter().enumerate().map(move |(col_idx, value)| {
                                            let column = current_columns
                                                .get(col_idx)
                                                .cloned()
                                                .unwrap_or_default();
                                            let cell_key = CellKey {
                                                row_idx: row_index,
                                                column: column.clone(),
                                            };
                                            let changed = row_changes
                                                .as_ref()
                                                .map(|set| set.contains(&column))
                                                .unwrap_or(false);
                                            let matched = matches(&value, &needle);
                                            let is_editing =
                                                editing_cell_snapshot.as_ref() == Some(&cell_key);
                                            let mut commit_edit = commit_edit.clone();
                                            if is_editing {
                                                rsx!(
                                                    td {
                                                        style: "{table_cell_style(changed, matched)}",
                                                        input {
                                                            style: "width: 100%; box-sizing: border-box; border: 1px solid #4c6ef5; border-radius: 4px; padding: 2px 4px;",
                                                            value: editing_value(),
                                                            oninput: move |event| {
                                                                editing_value.set(event.value());
                                                            },
                                                            onkeydown: move |event| {
                                                                if event.key() == Key::Enter {
                                                                    commit_edit(
                                                                        cell_key.clone(),
                                                                        editing_value(),
                                                                    );
                                                                } else if event.key() == Key::Escape {
                                                                    editing_cell.set(None);
                                                                    editing_value.set(String::new());
                                                                }
                                                            },
                                                        }
                                                    }
                                                )
                                            } else {
                                                let open_value = value.clone();
                                                rsx!(
                                                    td {
                                                        style: "{table_cell_style(changed, matched)}",
                                                        ondoubleclick: move |_| {
                                                            editing_cell.set(Some(cell_key.clone()));
                                                            editing_value.set(open_value.clone());
                                                        },
                                                        "{value}"
                                                    }
                                                )
                                            }
                                        })}
                                    }
                                )
                            })}
                        }
                    }
                }

                div {
                    style: "display: flex; gap: 12px; align-items: center; justify-content: space-between; padding: 10px 2px;",
                    div {
                        style: "display: flex; gap: 8px; align-items: center;",
                        label { "Rows per page:" }
                        select {
                            value: "{current_page_size}",
                            onchange: move |event| {
                                let Ok(next_size) = event.value().parse::<usize>() else {
                                    return;
                                };
                                if next_size == 0 {
                                    return;
                                }
                                page_size.set(next_size);
                                page.set(1);
                                reload_for_page_size(1);
                            },
                            {PAGE_SIZE_OPTIONS.iter().map(|size| rsx!(
                                option { value: "{size}", "{size}" }
                            ))}
                        }
                    }
                    div {
                        style: "display: flex; gap: 8px; align-items: center;",
                        button {
                            disabled: busy() || current_page <= 1,
                            onclick: move |_| reload_for_first(1),
                            "First"
                        }
                        button {
                            disabled: busy() || current_page <= 1,
                            onclick: move |_| reload_for_prev(page().saturating_sub(1).max(1)),
                            "Prev"
                        }
                        span { "Page {current_page} / {current_total_pages}" }
                        button {
                            disabled: busy() || current_page >= current_total_pages,
                            onclick: move |_| reload_for_next(page() + 1),
                            "Next"
                        }
                        button {
                            disabled: busy() || current_page >= current_total_pages,
                            onclick: move |_| reload_for_last(total_pages()),
                            "Last"
                        }
                    }
                }
            }

            div { style: "margin-top: 12px; color: #666;", "{status}" }
        }
    }
}
