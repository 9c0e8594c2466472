use std::collections::HashMap;

use super::TableStore;
use crate::error::StoreError;

/// Volatile store for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TableStore for MemoryStore {
    fn load(&self, table: &str) -> Result<Option<String>, StoreError> {
        Ok(self.tables.get(table).cloned())
    }

    fn save(&mut self, table: &str, contents: &str) -> Result<(), StoreError> {
        self.tables.insert(table.to_string(), contents.to_string());
        Ok(())
    }
}
