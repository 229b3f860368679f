use std::sync::{Mutex, MutexGuard};

use crate::domain::diff::{compute_changes, ChangeMap};
use crate::domain::entities::dataset::{PageQuery, PageResult, TabularData};
use crate::infra::memory::query;
use crate::usecase::ports::store::{StoreError, TableStore};

struct TableState {
    columns: Vec<String>,
    original: Vec<Vec<String>>,
    edited: Vec<Vec<String>>,
}

/// In-memory `TableStore`: the imported snapshot and the edited copy live
/// side by side, addressed by the same row index. The whole dataset is held
/// at once; nothing survives the process.
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<Option<TableState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, Option<TableState>> {
        // Single UI thread; recover the data if the lock was poisoned.
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Pads short rows and drops cells beyond the header width, so every stored
/// row has exactly one cell per column.
fn normalize_rows(columns: &[String], rows: Vec<Vec<String>>) -> Vec<Vec<String>> {
    let width = columns.len();
    rows.into_iter()
        .map(|mut row| {
            row.resize(width, String::new());
            row
        })
        .collect()
}

impl TableStore for MemoryStore {
    fn load(&self, data: TabularData) -> Result<(), StoreError> {
        let original = normalize_rows(&data.columns, data.rows);
        let edited = original.clone();
        *self.state() = Some(TableState {
            columns: data.columns,
            original,
            edited,
        });
        Ok(())
    }

    fn query_page(&self, query: PageQuery) -> Result<PageResult, StoreError> {
        let guard = self.state();
        let state = guard.as_ref().ok_or(StoreError::NoDataset)?;
        query::query_page(&state.columns, &state.edited, &query)
    }

    fn set_cell(&self, row_idx: usize, column: &str, value: String) -> Result<(), StoreError> {
        let mut guard = self.state();
        let state = guard.as_mut().ok_or(StoreError::NoDataset)?;

        let col_idx = state
            .columns
            .iter()
            .position(|name| name == column)
            .ok_or_else(|| StoreError::UnknownColumn(column.to_string()))?;
        if row_idx >= state.edited.len() {
            return Err(StoreError::RowOutOfRange {
                row_idx,
                row_count: state.edited.len(),
            });
        }

        // Replace the whole row rather than the cell in place: rows handed
        // out before this edit stay what they were.
        let mut row = state.edited[row_idx].clone();
        row[col_idx] = value;
        state.edited[row_idx] = row;
        Ok(())
    }

    fn reset(&self) -> Result<(), StoreError> {
        let mut guard = self.state();
        if let Some(state) = guard.as_mut() {
            state.edited = state.original.clone();
        }
        Ok(())
    }

    fn changes(&self) -> Result<ChangeMap, StoreError> {
        let guard = self.state();
        match guard.as_ref() {
            Some(state) => Ok(compute_changes(
                &state.columns,
                &state.original,
                &state.edited,
            )),
            None => Ok(ChangeMap::new()),
        }
    }

    fn snapshot(&self) -> Result<TabularData, StoreError> {
        let guard = self.state();
        let state = guard.as_ref().ok_or(StoreError::NoDataset)?;
        Ok(TabularData {
            columns: state.columns.clone(),
            rows: state.edited.clone(),
        })
    }

    fn is_loaded(&self) -> bool {
        self.state().is_some()
    }
}
