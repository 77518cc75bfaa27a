//! In-process record store.

use super::store::{ActorDirectory, RecordStore};
use crate::actor::{Actor, ActorId};
use crate::error::{Result, RowLockError};
use crate::record::{Attributes, Record, RecordIdentity, RecordKey, RecordType};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Tables of rows and a directory of actors, kept in memory.
///
/// Keys are assigned per table, starting at 1.
#[derive(Debug, Clone)]
pub struct MemoryStore<A> {
    tables: BTreeMap<String, BTreeMap<RecordKey, Attributes>>,
    next_keys: BTreeMap<String, RecordKey>,
    actors: BTreeMap<ActorId, A>,
}

impl<A> Default for MemoryStore<A> {
    fn default() -> Self {
        Self {
            tables: BTreeMap::new(),
            next_keys: BTreeMap::new(),
            actors: BTreeMap::new(),
        }
    }
}

impl<A> MemoryStore<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a row directly, bypassing any repository. Returns its key.
    pub fn seed(&mut self, table: &str, row: Attributes) -> RecordKey {
        let key = self.allocate_key(table);
        self.tables
            .entry(table.to_string())
            .or_default()
            .insert(key, row);
        key
    }

    /// The stored row for `id`.
    pub fn row(&self, id: &RecordIdentity) -> Option<&Attributes> {
        self.tables.get(&id.table).and_then(|rows| rows.get(&id.key))
    }

    /// Number of rows stored in `table`.
    pub fn len(&self, table: &str) -> usize {
        self.tables.get(table).map_or(0, BTreeMap::len)
    }

    /// Load a full record.
    pub fn find(&self, record_type: Arc<RecordType>, key: RecordKey) -> Result<Record> {
        let row = self.require_row(&RecordIdentity::new(record_type.table(), key))?;
        Ok(Record::from_persisted(record_type, key, row.clone()))
    }

    /// Load a record with only the listed columns.
    pub fn find_columns(
        &self,
        record_type: Arc<RecordType>,
        key: RecordKey,
        columns: &[&str],
    ) -> Result<Record> {
        let row = self.require_row(&RecordIdentity::new(record_type.table(), key))?;
        let attributes: Attributes = row
            .iter()
            .filter(|(name, _)| columns.contains(&name.as_str()))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();
        Ok(Record::from_persisted(record_type, key, attributes))
    }

    fn allocate_key(&mut self, table: &str) -> RecordKey {
        let next = self.next_keys.entry(table.to_string()).or_insert(1);
        let key = *next;
        *next += 1;
        key
    }

    fn require_row(&self, id: &RecordIdentity) -> Result<&Attributes> {
        self.row(id)
            .ok_or_else(|| RowLockError::RecordNotFound(id.clone()))
    }
}

impl<A: Actor> MemoryStore<A> {
    /// Register an actor so `locked_by` can resolve it.
    pub fn add_actor(&mut self, actor: A) {
        self.actors.insert(actor.id(), actor);
    }
}

impl<A> RecordStore for MemoryStore<A> {
    fn fetch_column(&self, id: &RecordIdentity, column: &str) -> Result<Option<Value>> {
        Ok(self.require_row(id)?.get(column).cloned())
    }

    fn insert(&mut self, table: &str, attributes: &Attributes) -> Result<RecordKey> {
        Ok(self.seed(table, attributes.clone()))
    }

    fn update(&mut self, id: &RecordIdentity, changes: &Attributes) -> Result<()> {
        let row = self
            .tables
            .get_mut(&id.table)
            .and_then(|rows| rows.get_mut(&id.key))
            .ok_or_else(|| RowLockError::RecordNotFound(id.clone()))?;
        row.extend(changes.iter().map(|(k, v)| (k.clone(), v.clone())));
        Ok(())
    }

    fn delete(&mut self, id: &RecordIdentity) -> Result<()> {
        self.tables
            .get_mut(&id.table)
            .and_then(|rows| rows.remove(&id.key))
            .map(|_| ())
            .ok_or_else(|| RowLockError::RecordNotFound(id.clone()))
    }
}

impl<A: Clone> ActorDirectory<A> for MemoryStore<A> {
    fn find_actor(&self, id: ActorId) -> Result<Option<A>> {
        Ok(self.actors.get(&id).cloned())
    }
}
