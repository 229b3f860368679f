use crate::domain::entities::dataset::{PageQuery, PageResult, PageRow, SortDirection};
use crate::usecase::ports::store::StoreError;

/// Lower-cases and trims free-text search input. The result is what
/// `matches` expects as its needle; callers normalize once per query, not
/// once per cell.
pub fn normalize_search(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Case-insensitive substring test against an already-normalized needle.
/// Shared by the row filter and the per-cell highlight flags so the two can
/// never disagree on what counts as a hit.
pub fn matches(value: &str, needle: &str) -> bool {
    !needle.is_empty() && value.to_lowercase().contains(needle)
}

fn sort_cell<'a>(row: &'a [String], col_idx: usize) -> &'a str {
    row.get(col_idx).map(String::as_str).unwrap_or("")
}

pub fn total_pages(total_rows: usize, page_size: usize) -> usize {
    std::cmp::max(1, total_rows.div_ceil(page_size))
}

/// Derives one page of the grid from the edited table and the current view
/// state. Stages run in a fixed order: filter, then sort, then paginate,
/// since pagination counts are only correct over the filtered and sorted
/// set. Every stage operates on `(true index, row)` pairs; the index tags a
/// row when it leaves the table and is carried through untouched.
pub fn query_page(
    columns: &[String],
    rows: &[Vec<String>],
    query: &PageQuery,
) -> Result<PageResult, StoreError> {
    if query.page_size == 0 {
        return Err(StoreError::InvalidPageSize);
    }
    if let Some(sort) = query.sort {
        if sort.column_idx >= columns.len() {
            return Err(StoreError::ColumnOutOfRange {
                col_idx: sort.column_idx,
                column_count: columns.len(),
            });
        }
    }

    let needle = normalize_search(&query.search);
    let mut tagged: Vec<(usize, &Vec<String>)> = if needle.is_empty() {
        rows.iter().enumerate().collect()
    } else {
        rows.iter()
            .enumerate()
            .filter(|(_, row)| row.iter().any(|cell| matches(cell, &needle)))
            .collect()
    };

    if let Some(sort) = query.sort {
        let col_idx = sort.column_idx;
        // Stable sort; descending reverses the comparator, not the output,
        // so equal keys keep their pre-sort relative order either way.
        match sort.direction {
            SortDirection::Asc => {
                tagged.sort_by(|a, b| sort_cell(a.1, col_idx).cmp(sort_cell(b.1, col_idx)));
            }
            SortDirection::Desc => {
                tagged.sort_by(|a, b| sort_cell(b.1, col_idx).cmp(sort_cell(a.1, col_idx)));
            }
        }
    }

    let total_rows = tagged.len();
    let total_pages = total_pages(total_rows, query.page_size);
    let page = query.page.clamp(1, total_pages);
    let start = (page - 1) * query.page_size;
    let end = std::cmp::min(start + query.page_size, total_rows);

    let page_rows = tagged[start..end]
        .iter()
        .map(|(index, row)| PageRow {
            index: *index,
            cells: (*row).clone(),
        })
        .collect();

    Ok(PageResult {
        columns: columns.to_vec(),
        rows: page_rows,
        total_rows,
        total_pages,
        page,
    })
}
