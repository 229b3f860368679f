/// Address of a single cell in the edited table. `row_idx` is the row's true
/// index, never its position on the current page.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CellKey {
    pub row_idx: usize,
    pub column: String,
}
