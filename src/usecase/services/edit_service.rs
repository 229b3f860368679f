use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::entities::edit::CellKey;
use crate::usecase::ports::store::{StoreError, TableStore};

pub struct EditService {
    store: Arc<dyn TableStore>,
}

impl EditService {
    pub fn new(store: Arc<dyn TableStore>) -> Self {
        Self { store }
    }

    /// Writes a single cell of the edited table, addressed by the true row
    /// index carried on the rendered row.
    pub fn set_cell(&self, key: &CellKey, value: String) -> Result<(), StoreError> {
        debug!(row = key.row_idx, column = %key.column, "cell edit");
        self.store.set_cell(key.row_idx, &key.column, value)
    }

    /// Discards every edit made since import.
    pub fn reset(&self) -> Result<(), StoreError> {
        info!("reset edits to imported snapshot");
        self.store.reset()
    }
}
