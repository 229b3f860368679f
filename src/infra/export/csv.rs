use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::entities::dataset::TabularData;

/// Encodes a table back to CSV with the same column set it was imported
/// under. Quoting and escaping are the csv crate's; short rows are padded so
/// the output stays rectangular. Returns the number of data rows written.
pub fn write_csv_table(csv_path: &Path, data: &TabularData) -> Result<usize> {
    let mut writer = csv::Writer::from_path(csv_path)
        .with_context(|| format!("failed to create csv: {}", csv_path.display()))?;

    writer
        .write_record(&data.columns)
        .context("failed to write csv header")?;

    let width = data.columns.len();
    for row in &data.rows {
        let record: Vec<&str> = (0..width)
            .map(|col_idx| row.get(col_idx).map(String::as_str).unwrap_or(""))
            .collect();
        writer
            .write_record(&record)
            .context("failed to write csv record")?;
    }

    writer
        .flush()
        .with_context(|| format!("failed to flush csv: {}", csv_path.display()))?;

    Ok(data.rows.len())
}
