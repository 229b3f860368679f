use std::collections::{BTreeMap, BTreeSet};

/// Sparse change map: row index -> names of columns whose edited value
/// differs from the original. Rows with no changes are absent.
pub type ChangeMap = BTreeMap<usize, BTreeSet<String>>;

/// Compares the edited table against the imported snapshot, cell by cell.
/// Rows are paired positionally; a cell missing from either row (short row
/// after a ragged decode) compares as the empty string. Pure and
/// deterministic, so callers may recompute it freely after any mutation.
pub fn compute_changes(
    columns: &[String],
    original: &[Vec<String>],
    edited: &[Vec<String>],
) -> ChangeMap {
    let mut changes = ChangeMap::new();

    for (row_idx, (original_row, edited_row)) in original.iter().zip(edited.iter()).enumerate() {
        let mut changed_columns = BTreeSet::new();
        for (col_idx, column) in columns.iter().enumerate() {
            let before = original_row.get(col_idx).map(String::as_str).unwrap_or("");
            let after = edited_row.get(col_idx).map(String::as_str).unwrap_or("");
            if before != after {
                changed_columns.insert(column.clone());
            }
        }
        if !changed_columns.is_empty() {
            changes.insert(row_idx, changed_columns);
        }
    }

    changes
}
