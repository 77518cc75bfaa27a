//! In-memory record image with dirty tracking.

use super::record_type::RecordType;
use super::types::{Attributes, LockState, LockableSet, RecordIdentity, RecordKey};
use serde_json::Value;
use std::sync::Arc;

/// One row of a lockable table.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    record_type: Arc<RecordType>,
    key: Option<RecordKey>,
    exists: bool,
    attributes: Attributes,
    original: Attributes,
}

impl Record {
    /// Create a new, unsaved record. It starts unlocked.
    pub fn new(record_type: Arc<RecordType>) -> Self {
        let mut attributes = Attributes::new();
        let columns = record_type.lock_columns();
        attributes.insert(columns.locked.clone(), Value::Bool(false));
        attributes.insert(columns.locked_by.clone(), Value::Null);

        Self {
            record_type,
            key: None,
            exists: false,
            attributes,
            original: Attributes::new(),
        }
    }

    /// Rebuild a record from a stored row.
    ///
    /// `attributes` may be a subset of the row's columns when the host loaded
    /// only some of them.
    pub fn from_persisted(
        record_type: Arc<RecordType>,
        key: RecordKey,
        attributes: Attributes,
    ) -> Self {
        Self {
            record_type,
            key: Some(key),
            exists: true,
            original: attributes.clone(),
            attributes,
        }
    }

    pub fn record_type(&self) -> &RecordType {
        &self.record_type
    }

    pub fn table(&self) -> &str {
        self.record_type.table()
    }

    pub fn key(&self) -> Option<RecordKey> {
        self.key
    }

    /// Whether the record currently has a stored row.
    pub fn exists(&self) -> bool {
        self.exists
    }

    /// Identity of the stored row, if the record has ever been saved.
    pub fn identity(&self) -> Option<RecordIdentity> {
        self.key
            .map(|key| RecordIdentity::new(self.record_type.table(), key))
    }

    pub fn lockables(&self) -> &LockableSet {
        self.record_type.lockables()
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Raw current value of an attribute.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Current value of an attribute after applying its cast.
    pub fn get_cast(&self, name: &str) -> Option<Value> {
        self.attributes
            .get(name)
            .map(|value| self.record_type.properties().cast(name, value))
    }

    /// Raw value of an attribute as last persisted.
    pub fn original(&self, name: &str) -> Option<&Value> {
        self.original.get(name)
    }

    /// Set an attribute.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Mass-assign attributes, skipping anything that is not fillable.
    ///
    /// Returns the names that were skipped.
    pub fn fill<I, S>(&mut self, values: I) -> Vec<String>
    where
        I: IntoIterator<Item = (S, Value)>,
        S: Into<String>,
    {
        let mut skipped = Vec::new();
        for (name, value) in values {
            let name = name.into();
            if self.record_type.properties().is_fillable(&name) {
                self.attributes.insert(name, value);
            } else {
                skipped.push(name);
            }
        }
        skipped
    }

    /// Whether `name` differs from its persisted value.
    ///
    /// Values are compared after casting. An attribute that is not loaded is
    /// clean; one that is set without a persisted counterpart is dirty.
    pub fn is_dirty(&self, name: &str) -> bool {
        let Some(current) = self.attributes.get(name) else {
            return false;
        };
        match self.original.get(name) {
            Some(original) => {
                let props = self.record_type.properties();
                props.cast(name, current) != props.cast(name, original)
            }
            None => true,
        }
    }

    /// Names of all dirty attributes, in column order.
    pub fn dirty(&self) -> Vec<&str> {
        self.attributes
            .keys()
            .map(String::as_str)
            .filter(|name| self.is_dirty(name))
            .collect()
    }

    /// Dirty attributes with their current values.
    pub fn changes(&self) -> Attributes {
        self.attributes
            .iter()
            .filter(|(name, _)| self.is_dirty(name))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect()
    }

    /// Lockable attributes with a pending change, in declaration order.
    pub fn changed_lockables(&self) -> Vec<String> {
        self.lockables()
            .iter()
            .filter(|name| self.is_dirty(name))
            .map(str::to_string)
            .collect()
    }

    /// Lock state as currently set, or `None` when the flag is not loaded.
    pub fn lock_state(&self) -> Option<LockState> {
        self.read_lock_state(&self.attributes)
    }

    /// Lock state as last persisted, or `None` when the flag was not loaded.
    pub fn persisted_lock_state(&self) -> Option<LockState> {
        self.read_lock_state(&self.original)
    }

    fn read_lock_state(&self, values: &Attributes) -> Option<LockState> {
        let columns = self.record_type.lock_columns();
        let props = self.record_type.properties();
        let locked = values
            .get(&columns.locked)
            .map(|v| props.cast(&columns.locked, v))?;
        let locked_by = values
            .get(&columns.locked_by)
            .map(|v| props.cast(&columns.locked_by, v));
        Some(LockState::from_values(Some(&locked), locked_by.as_ref()))
    }

    /// Write a lock state into the current attributes.
    pub(crate) fn set_lock_state(&mut self, state: LockState) {
        let columns = self.record_type.lock_columns().clone();
        self.attributes
            .insert(columns.locked, Value::Bool(state.locked));
        let owner = match state.locked_by {
            Some(id) if state.locked => Value::from(id),
            _ => Value::Null,
        };
        self.attributes.insert(columns.locked_by, owner);
    }

    /// Snapshot of the lock columns as currently set, for rollback.
    pub(crate) fn lock_columns_snapshot(&self) -> (Option<Value>, Option<Value>) {
        let columns = self.record_type.lock_columns();
        (
            self.attributes.get(&columns.locked).cloned(),
            self.attributes.get(&columns.locked_by).cloned(),
        )
    }

    /// Restore lock columns captured by [`Record::lock_columns_snapshot`].
    pub(crate) fn restore_lock_columns(&mut self, snapshot: (Option<Value>, Option<Value>)) {
        let columns = self.record_type.lock_columns().clone();
        for (column, value) in [(columns.locked, snapshot.0), (columns.locked_by, snapshot.1)] {
            match value {
                Some(value) => {
                    self.attributes.insert(column, value);
                }
                None => {
                    self.attributes.remove(&column);
                }
            }
        }
    }

    /// Mark the current attributes as persisted under `key`.
    pub(crate) fn sync_persisted(&mut self, key: RecordKey) {
        self.key = Some(key);
        self.exists = true;
        self.original = self.attributes.clone();
    }

    /// Mark the stored row as gone.
    pub(crate) fn mark_deleted(&mut self) {
        self.exists = false;
    }
}
