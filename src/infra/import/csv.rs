use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::entities::dataset::TabularData;

/// Decodes a CSV file into a table. The first line is mandatory and becomes
/// the column set verbatim (duplicates included); ragged data rows are
/// padded with empty strings to the header width, cells beyond it dropped.
pub fn read_csv_table(csv_path: &Path) -> Result<TabularData> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(csv_path)
        .with_context(|| format!("failed to open csv: {}", csv_path.display()))?;
    let headers = reader
        .headers()
        .with_context(|| format!("failed to read headers from csv: {}", csv_path.display()))?
        .clone();

    if headers.is_empty() {
        anyhow::bail!("csv header is required")
    }

    let columns: Vec<String> = headers.iter().map(str::to_string).collect();
    let header_len = columns.len();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.context("failed to parse csv record")?;
        let row: Vec<String> = (0..header_len)
            .map(|col_idx| record.get(col_idx).unwrap_or("").to_string())
            .collect();
        rows.push(row);
    }

    Ok(TabularData { columns, rows })
}
