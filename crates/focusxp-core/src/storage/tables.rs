//! Typed access to the logical tables.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;
use uuid::Uuid;

use super::TableStore;
use crate::error::{Result, StoreError};
use crate::model::Record;

/// Logical tables the engine persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Projects,
    CaptureItems,
    FocusSessions,
    DailyObjectives,
    XpLogs,
    Achievements,
    ProjectTransitions,
    StreakTracking,
    ActiveSession,
}

impl Table {
    pub fn name(&self) -> &'static str {
        match self {
            Table::Projects => "projects",
            Table::CaptureItems => "capture_items",
            Table::FocusSessions => "focus_sessions",
            Table::DailyObjectives => "daily_objectives",
            Table::XpLogs => "xp_logs",
            Table::Achievements => "achievements",
            Table::ProjectTransitions => "project_transitions",
            Table::StreakTracking => "streak_tracking",
            Table::ActiveSession => "active_session",
        }
    }
}

/// Typed read-modify-write over a [`TableStore`].
pub struct Tables<S> {
    store: S,
}

impl<S: TableStore> Tables<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Read every row of a table, failing if it cannot be loaded or decoded.
    ///
    /// Every write path reads through this; a table that fails here is never
    /// rewritten.
    pub fn try_read<T: DeserializeOwned>(&self, table: Table) -> Result<Vec<T>> {
        let Some(raw) = self.store.load(table.name())? else {
            return Ok(Vec::new());
        };
        serde_json::from_str(&raw).map_err(|e| {
            StoreError::Corrupt {
                table: table.name(),
                message: e.to_string(),
            }
            .into()
        })
    }

    /// Fail unless the table can be read back as `T` rows.
    pub fn check<T: DeserializeOwned>(&self, table: Table) -> Result<()> {
        self.try_read::<T>(table).map(|_| ())
    }

    /// Read every row of a table.
    ///
    /// Missing, unreadable and malformed tables all read as empty.
    pub fn read<T: DeserializeOwned>(&self, table: Table) -> Vec<T> {
        match self.try_read(table) {
            Ok(rows) => rows,
            Err(e) => {
                warn!(table = table.name(), error = %e, "table unreadable, treating as empty");
                Vec::new()
            }
        }
    }

    /// Replace every row of a table.
    pub fn write<T: Serialize>(&mut self, table: Table, rows: &[T]) -> Result<()> {
        let json = serde_json::to_string(rows)?;
        self.store.save(table.name(), &json)?;
        Ok(())
    }

    pub fn append<T>(&mut self, table: Table, row: T) -> Result<T>
    where
        T: Serialize + DeserializeOwned + Clone,
    {
        let mut rows: Vec<T> = self.try_read(table)?;
        rows.push(row.clone());
        self.write(table, &rows)?;
        Ok(row)
    }

    pub fn find<T>(&self, table: Table, id: Uuid) -> Option<T>
    where
        T: DeserializeOwned + Record,
    {
        self.read::<T>(table).into_iter().find(|r| r.id() == id)
    }

    /// Mutate one row in place. Returns the updated row, or `None` if absent.
    pub fn update<T, F>(&mut self, table: Table, id: Uuid, f: F) -> Result<Option<T>>
    where
        T: Serialize + DeserializeOwned + Record + Clone,
        F: FnOnce(&mut T),
    {
        let mut rows: Vec<T> = self.try_read(table)?;
        let Some(row) = rows.iter_mut().find(|r| r.id() == id) else {
            return Ok(None);
        };
        f(row);
        let updated = row.clone();
        self.write(table, &rows)?;
        Ok(Some(updated))
    }

    /// Remove one row. Returns whether anything was removed.
    pub fn delete<T>(&mut self, table: Table, id: Uuid) -> Result<bool>
    where
        T: Serialize + DeserializeOwned + Record,
    {
        let mut rows: Vec<T> = self.try_read(table)?;
        let before = rows.len();
        rows.retain(|r| r.id() != id);
        if rows.len() == before {
            return Ok(false);
        }
        self.write(table, &rows)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::model::{CaptureItem, CaptureSource};
    use crate::storage::MemoryStore;
    use chrono::Utc;

    fn capture(text: &str) -> CaptureItem {
        CaptureItem {
            id: Uuid::new_v4(),
            text: text.into(),
            source: CaptureSource::Manual,
            created_at: Utc::now(),
            triaged_at: None,
            outcome: None,
            resulting_project_id: None,
        }
    }

    #[test]
    fn append_then_find() {
        let mut tables = Tables::new(MemoryStore::new());
        let item = tables.append(Table::CaptureItems, capture("call dentist")).unwrap();
        let found: CaptureItem = tables.find(Table::CaptureItems, item.id).unwrap();
        assert_eq!(found.text, "call dentist");
    }

    #[test]
    fn update_and_delete_by_id() {
        let mut tables = Tables::new(MemoryStore::new());
        let item = tables.append(Table::CaptureItems, capture("a")).unwrap();

        let updated: Option<CaptureItem> = tables
            .update(Table::CaptureItems, item.id, |c: &mut CaptureItem| c.text = "b".into())
            .unwrap();
        assert_eq!(updated.unwrap().text, "b");

        assert!(tables.delete::<CaptureItem>(Table::CaptureItems, item.id).unwrap());
        assert!(!tables.delete::<CaptureItem>(Table::CaptureItems, item.id).unwrap());
        let missing: Option<CaptureItem> = tables
            .update(Table::CaptureItems, item.id, |_: &mut CaptureItem| {})
            .unwrap();
        assert!(missing.is_none());
    }

    #[test]
    fn malformed_table_reads_as_empty() {
        let mut store = MemoryStore::new();
        store.save("capture_items", "{not json").unwrap();
        let tables = Tables::new(store);
        let rows: Vec<CaptureItem> = tables.read(Table::CaptureItems);
        assert!(rows.is_empty());
        assert!(tables.try_read::<CaptureItem>(Table::CaptureItems).is_err());
    }

    #[test]
    fn writes_refuse_to_replace_a_malformed_table() {
        let mut store = MemoryStore::new();
        store.save("capture_items", "{not json").unwrap();
        let mut tables = Tables::new(store);

        let err = tables.append(Table::CaptureItems, capture("lost")).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Store(StoreError::Corrupt { table: "capture_items", .. })
        ));
        assert!(tables
            .update(Table::CaptureItems, Uuid::new_v4(), |_: &mut CaptureItem| {})
            .is_err());
        assert!(tables.delete::<CaptureItem>(Table::CaptureItems, Uuid::new_v4()).is_err());
        assert_eq!(
            tables.store().load("capture_items").unwrap().as_deref(),
            Some("{not json")
        );
    }

    #[test]
    fn one_bad_row_blocks_the_append() {
        let mut tables = Tables::new(MemoryStore::new());
        let kept = tables.append(Table::CaptureItems, capture("kept")).unwrap();

        let mut rows: Vec<serde_json::Value> = tables.try_read(Table::CaptureItems).unwrap();
        rows.push(serde_json::json!({ "id": "not-a-uuid" }));
        tables.write(Table::CaptureItems, &rows).unwrap();
        let before = tables.store().load("capture_items").unwrap();

        assert!(tables.append(Table::CaptureItems, capture("new")).is_err());
        assert_eq!(tables.store().load("capture_items").unwrap(), before);
        assert!(tables
            .try_read::<serde_json::Value>(Table::CaptureItems)
            .unwrap()
            .iter()
            .any(|r| r["id"] == kept.id.to_string()));
    }

    struct LockedStore;

    impl TableStore for LockedStore {
        fn load(&self, _table: &str) -> std::result::Result<Option<String>, StoreError> {
            Err(StoreError::Locked)
        }

        fn save(&mut self, _table: &str, _contents: &str) -> std::result::Result<(), StoreError> {
            panic!("nothing should be written after a failed load");
        }
    }

    #[test]
    fn load_failure_propagates_from_writes() {
        let mut tables = Tables::new(LockedStore);
        let rows: Vec<CaptureItem> = tables.read(Table::CaptureItems);
        assert!(rows.is_empty());

        let err = tables.append(Table::CaptureItems, capture("x")).unwrap_err();
        assert!(matches!(err, CoreError::Store(StoreError::Locked)));
    }
}
