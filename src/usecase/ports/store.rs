use crate::domain::diff::ChangeMap;
use crate::domain::entities::dataset::{PageQuery, PageResult, TabularData};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No table has been loaded yet.
    NoDataset,
    /// A mutation addressed a row outside the edited table. Contract
    /// violation by the caller; rejected rather than clamped so a bad index
    /// can never corrupt a different cell.
    RowOutOfRange { row_idx: usize, row_count: usize },
    /// A mutation named a column that is not in the column set.
    UnknownColumn(String),
    /// A sort addressed a column index outside the column set.
    ColumnOutOfRange { col_idx: usize, column_count: usize },
    /// A page query asked for a page size of zero.
    InvalidPageSize,
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::NoDataset => write!(f, "no dataset loaded"),
            StoreError::RowOutOfRange { row_idx, row_count } => {
                write!(f, "row index {row_idx} out of range (rows: {row_count})")
            }
            StoreError::UnknownColumn(column) => write!(f, "unknown column: {column}"),
            StoreError::ColumnOutOfRange {
                col_idx,
                column_count,
            } => {
                write!(
                    f,
                    "column index {col_idx} out of range (columns: {column_count})"
                )
            }
            StoreError::InvalidPageSize => write!(f, "page size must be greater than zero"),
        }
    }
}

impl std::error::Error for StoreError {}

/// The dataset store: owns the immutable imported snapshot and the mutable
/// edited copy, and derives every view the grid renders. Implementations
/// must keep both tables the same length at all times and must never let a
/// cell mutation reorder rows.
pub trait TableStore: Send + Sync {
    /// Replaces the column set and both tables. The edited table starts as a
    /// deep copy of the imported rows. An empty table is a valid degenerate
    /// state, not an error; malformed input is a codec concern.
    fn load(&self, data: TabularData) -> Result<(), StoreError>;

    /// Derives the rows to render for the given view state.
    fn query_page(&self, query: PageQuery) -> Result<PageResult, StoreError>;

    /// Replaces a single cell of the edited table, addressed by true row
    /// index and column name. Everything else, the imported snapshot
    /// included, is left untouched.
    fn set_cell(&self, row_idx: usize, column: &str, value: String) -> Result<(), StoreError>;

    /// Discards all edits: the edited table becomes a fresh copy of the
    /// imported snapshot. No-op when nothing is loaded.
    fn reset(&self) -> Result<(), StoreError>;

    /// Recomputes the per-row sets of changed columns.
    fn changes(&self) -> Result<ChangeMap, StoreError>;

    /// Deep copy of the column set and the edited table, for export.
    fn snapshot(&self) -> Result<TabularData, StoreError>;

    fn is_loaded(&self) -> bool;
}
