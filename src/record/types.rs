//! Identity, lock state and lockable set definitions.

use crate::actor::ActorId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Attribute values keyed by column name.
///
/// BTreeMap keeps change sets and rendered rows in a deterministic order.
pub type Attributes = BTreeMap<String, Value>;

/// Primary key of a persisted record.
pub type RecordKey = u64;

/// Identity of a persisted record, carried by lock violations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordIdentity {
    /// Table the record lives in.
    pub table: String,

    /// Primary key within the table.
    pub key: RecordKey,
}

impl RecordIdentity {
    pub fn new(table: impl Into<String>, key: RecordKey) -> Self {
        Self {
            table: table.into(),
            key,
        }
    }
}

impl std::fmt::Display for RecordIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.table, self.key)
    }
}

/// Lock flag and lock owner of a record.
///
/// `locked_by` is only meaningful while `locked` is true.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockState {
    pub locked: bool,
    pub locked_by: Option<ActorId>,
}

impl LockState {
    /// The unlocked state.
    pub fn unlocked() -> Self {
        Self::default()
    }

    /// A locked state, attributed to `actor` when given.
    pub fn locked(actor: Option<ActorId>) -> Self {
        Self {
            locked: true,
            locked_by: actor,
        }
    }

    /// Build a lock state from already cast column values.
    ///
    /// A missing, null or false flag reads as unlocked. Any other value,
    /// including one the boolean cast could not interpret, reads as locked.
    /// The owner is dropped when the record is not locked.
    pub(crate) fn from_values(locked: Option<&Value>, locked_by: Option<&Value>) -> Self {
        let locked =
            locked.is_some_and(|value| !matches!(value, Value::Null | Value::Bool(false)));
        let locked_by = if locked {
            locked_by.and_then(Value::as_u64)
        } else {
            None
        };
        Self { locked, locked_by }
    }
}

/// Ordered, de-duplicated set of attribute names protected while locked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LockableSet(Vec<String>);

impl LockableSet {
    /// Build a set from attribute names, keeping first-seen order.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::default();
        for name in names {
            let name = name.into();
            if !set.contains(&name) {
                set.0.push(name);
            }
        }
        set
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|n| n == name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a LockableSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
