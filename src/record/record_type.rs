//! Per-table record declarations.

use super::types::LockableSet;
use crate::config::LockColumns;
use crate::properties::{CastType, ObservedProperties};

/// Declaration of one lockable record type.
///
/// The lock columns are always registered as casts (boolean flag, integer
/// owner) and are never fillable, so mass assignment cannot change the lock
/// state.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordType {
    table: String,
    lockable: LockableSet,
    columns: LockColumns,
    properties: ObservedProperties,
}

impl RecordType {
    /// Declare a record type using the default lock column names.
    pub fn new(table: impl Into<String>) -> Self {
        Self::with_columns(table, &LockColumns::default())
    }

    /// Declare a record type whose lock state lives in `columns`.
    pub fn with_columns(table: impl Into<String>, columns: &LockColumns) -> Self {
        let mut properties = ObservedProperties::new();
        properties.add_casts([
            (columns.locked.clone(), CastType::Boolean),
            (columns.locked_by.clone(), CastType::Integer),
        ]);

        Self {
            table: table.into(),
            lockable: LockableSet::default(),
            columns: columns.clone(),
            properties,
        }
    }

    /// Declare the attributes protected while a record is locked.
    pub fn with_lockable<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lockable = LockableSet::new(names);
        self
    }

    /// Declare mass-assignable attributes. Lock columns are filtered out.
    pub fn with_fillable<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names
            .into_iter()
            .map(Into::into)
            .filter(|name| !self.is_lock_column(name))
            .collect();
        self.properties.add_fillable(names);
        self
    }

    /// Declare attribute casts. Casts for the lock columns cannot be replaced.
    pub fn with_casts<I, S>(mut self, casts: I) -> Self
    where
        I: IntoIterator<Item = (S, CastType)>,
        S: Into<String>,
    {
        let casts: Vec<(String, CastType)> = casts
            .into_iter()
            .map(|(name, cast)| (name.into(), cast))
            .filter(|(name, _)| !self.is_lock_column(name))
            .collect();
        self.properties.add_casts(casts);
        self
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn lockables(&self) -> &LockableSet {
        &self.lockable
    }

    pub fn lock_columns(&self) -> &LockColumns {
        &self.columns
    }

    pub fn properties(&self) -> &ObservedProperties {
        &self.properties
    }

    pub fn is_lock_column(&self, name: &str) -> bool {
        name == self.columns.locked || name == self.columns.locked_by
    }
}
