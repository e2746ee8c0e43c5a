//! In-memory record store
//!
//! Collections are kept as key-ordered maps, so `get_all` returns records
//! in insertion order (auto-increment keys are monotonically assigned).
//! Index lookups are evaluated by scanning the collection and comparing
//! the named field; the collections involved are small enough that no
//! materialized index is kept.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use tokio::sync::Mutex;

use core_kernel::{Collection, RecordKey, RecordStore, StoreError};

/// An in-memory implementation of the record-store port
///
/// All state lives behind a single async mutex; the application issues at
/// most one outstanding store operation per logical action, so there is no
/// lock contention to speak of.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: Mutex<HashMap<Collection, Table>>,
}

#[derive(Debug, Default)]
struct Table {
    next_key: u64,
    rows: BTreeMap<u64, Value>,
}

impl Table {
    fn allocate_key(&mut self) -> u64 {
        self.next_key += 1;
        self.next_key
    }
}

impl MemoryStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

/// Reads the named field of a document as text for index comparison
fn indexed_field<'a>(record: &'a Value, index: &str) -> Option<&'a str> {
    record.get(index).and_then(Value::as_str)
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn add(&self, collection: Collection, mut record: Value) -> Result<RecordKey, StoreError> {
        let mut tables = self.tables.lock().await;
        let table = tables.entry(collection).or_default();
        let key = table.allocate_key();

        // keyPath semantics: the assigned key is written into the document
        if let Some(object) = record.as_object_mut() {
            object.insert("id".to_string(), Value::from(key));
        }
        table.rows.insert(key, record);

        Ok(RecordKey::new(key))
    }

    async fn get(
        &self,
        collection: Collection,
        key: RecordKey,
    ) -> Result<Option<Value>, StoreError> {
        let tables = self.tables.lock().await;
        Ok(tables
            .get(&collection)
            .and_then(|table| table.rows.get(&key.value()))
            .cloned())
    }

    async fn get_all(&self, collection: Collection) -> Result<Vec<Value>, StoreError> {
        let tables = self.tables.lock().await;
        Ok(tables
            .get(&collection)
            .map(|table| table.rows.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn put(
        &self,
        collection: Collection,
        key: RecordKey,
        mut record: Value,
    ) -> Result<(), StoreError> {
        let mut tables = self.tables.lock().await;
        let table = tables.entry(collection).or_default();

        if let Some(object) = record.as_object_mut() {
            object.insert("id".to_string(), Value::from(key.value()));
        }
        table.rows.insert(key.value(), record);
        table.next_key = table.next_key.max(key.value());

        Ok(())
    }

    async fn delete(&self, collection: Collection, key: RecordKey) -> Result<(), StoreError> {
        let mut tables = self.tables.lock().await;
        if let Some(table) = tables.get_mut(&collection) {
            table.rows.remove(&key.value());
        }
        Ok(())
    }

    async fn get_by_index(
        &self,
        collection: Collection,
        index: &str,
        value: &str,
    ) -> Result<Vec<Value>, StoreError> {
        let tables = self.tables.lock().await;
        Ok(tables
            .get(&collection)
            .map(|table| {
                table
                    .rows
                    .values()
                    .filter(|record| indexed_field(record, index) == Some(value))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}
