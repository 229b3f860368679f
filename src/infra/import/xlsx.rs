use std::path::Path;

use anyhow::{Context, Result};
use calamine::{open_workbook_auto, Data, Reader};

use crate::domain::entities::dataset::TabularData;

pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(v) => v.to_string(),
        Data::Float(v) => v.to_string(),
        Data::Int(v) => v.to_string(),
        Data::Bool(v) => v.to_string(),
        Data::DateTime(v) => v.to_string(),
        Data::DateTimeIso(v) => v.to_string(),
        Data::DurationIso(v) => v.to_string(),
        Data::Error(v) => format!("{v:?}"),
        Data::Empty => String::new(),
    }
}

/// Decodes the first worksheet of an XLSX workbook into a table. The first
/// row becomes the column set; remaining rows are stringified cell by cell.
pub fn read_xlsx_table(xlsx_path: &Path) -> Result<TabularData> {
    let mut workbook = open_workbook_auto(xlsx_path)
        .with_context(|| format!("failed to open xlsx: {}", xlsx_path.display()))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .context("workbook has no worksheets")?;
    let range = workbook
        .worksheet_range(&sheet_name)
        .with_context(|| format!("failed to read sheet: {sheet_name}"))?;

    let mut sheet_rows = range.rows();
    let columns: Vec<String> = sheet_rows
        .next()
        .context("worksheet has no header row")?
        .iter()
        .map(cell_to_string)
        .collect();

    if columns.is_empty() {
        anyhow::bail!("worksheet header is required")
    }

    let rows: Vec<Vec<String>> = sheet_rows
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect();

    Ok(TabularData { columns, rows })
}
