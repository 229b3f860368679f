use std::path::Path;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use tracing::info;

use crate::infra::export::csv::write_csv_table;
use crate::usecase::ports::store::TableStore;

pub struct ExportService {
    store: Arc<dyn TableStore>,
}

impl ExportService {
    pub fn new(store: Arc<dyn TableStore>) -> Self {
        Self { store }
    }

    /// Encodes the current edited table to a CSV file. Returns the number of
    /// data rows written.
    pub fn export_csv(&self, path: &Path) -> Result<usize> {
        let data = self.store.snapshot().map_err(|err| anyhow!(err))?;
        let written = write_csv_table(path, &data)
            .with_context(|| format!("failed to export csv to {}", path.display()))?;
        info!(rows = written, target = %path.display(), "exported table");
        Ok(written)
    }
}
