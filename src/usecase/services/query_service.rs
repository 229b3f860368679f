use std::sync::Arc;

use crate::domain::diff::ChangeMap;
use crate::domain::entities::dataset::{PageQuery, PageResult};
use crate::usecase::ports::store::{StoreError, TableStore};

pub struct QueryService {
    store: Arc<dyn TableStore>,
}

impl QueryService {
    pub fn new(store: Arc<dyn TableStore>) -> Self {
        Self { store }
    }

    pub fn query_page(&self, query: PageQuery) -> Result<PageResult, StoreError> {
        self.store.query_page(query)
    }

    pub fn changes(&self) -> Result<ChangeMap, StoreError> {
        self.store.changes()
    }

    pub fn is_loaded(&self) -> bool {
        self.store.is_loaded()
    }
}
