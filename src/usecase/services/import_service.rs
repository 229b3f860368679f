use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use crate::domain::entities::dataset::TabularData;
use crate::infra::import::csv::read_csv_table;
use crate::infra::import::xlsx::read_xlsx_table;
use crate::usecase::ports::store::TableStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportOutcome {
    pub row_count: usize,
    pub column_count: usize,
}

pub struct ImportService {
    store: Arc<dyn TableStore>,
}

impl ImportService {
    pub fn new(store: Arc<dyn TableStore>) -> Self {
        Self { store }
    }

    /// Decodes a CSV file and replaces the store's contents. The store is
    /// only touched after a fully successful decode, so a failed import
    /// leaves whatever table was loaded before intact.
    pub fn import_csv(&self, path: &Path) -> Result<ImportOutcome> {
        let data = read_csv_table(path)?;
        self.finish_import(path, data)
    }

    pub fn import_xlsx(&self, path: &Path) -> Result<ImportOutcome> {
        let data = read_xlsx_table(path)?;
        self.finish_import(path, data)
    }

    fn finish_import(&self, path: &Path, data: TabularData) -> Result<ImportOutcome> {
        let outcome = ImportOutcome {
            row_count: data.rows.len(),
            column_count: data.columns.len(),
        };
        self.store
            .load(data)
            .with_context(|| format!("failed to load table from {}", path.display()))?;
        info!(
            rows = outcome.row_count,
            columns = outcome.column_count,
            source = %path.display(),
            "imported table"
        );
        Ok(outcome)
    }
}
