/// A decoded table as it leaves a codec: an ordered header row plus data
/// rows aligned positionally with it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TabularData {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub column_idx: usize,
    pub direction: SortDirection,
}

/// One request for a page of the grid: the full view state the user has
/// dialed in. `page` is 1-based and may be out of range; the pipeline clamps
/// it instead of erroring so a stale page number survives a shrinking filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    pub page: usize,
    pub page_size: usize,
    pub search: String,
    pub sort: Option<SortSpec>,
}

/// A visible row together with its position in the edited table. The index
/// is attached when the row leaves the store; it is the only valid way to
/// route an edit back, since page arithmetic is wrong as soon as a filter or
/// sort is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRow {
    pub index: usize,
    pub cells: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResult {
    pub columns: Vec<String>,
    pub rows: Vec<PageRow>,
    /// Rows surviving the filter, before pagination.
    pub total_rows: usize,
    pub total_pages: usize,
    /// The page actually served, after clamping.
    pub page: usize,
}
