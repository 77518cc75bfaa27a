//! Configuration types and defaults for rowlock.
//!
//! This module defines the nested config sections, enums, and default value
//! functions used by the Config struct.

use serde::{Deserialize, Serialize};

/// Action taken by the database when a referenced actor row is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReferentialAction {
    /// Refuse to delete an actor that still holds locks (default).
    #[default]
    Restrict,
    /// Delete the locked record along with the actor.
    Cascade,
    /// Clear `locked_by` when the actor is deleted.
    SetNull,
    /// Defer the check to the end of the statement.
    NoAction,
}

impl ReferentialAction {
    /// Parse a referential action from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "restrict" => Some(Self::Restrict),
            "cascade" => Some(Self::Cascade),
            "set_null" => Some(Self::SetNull),
            "no_action" => Some(Self::NoAction),
            _ => None,
        }
    }

    /// SQL spelling of the action.
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Restrict => "RESTRICT",
            Self::Cascade => "CASCADE",
            Self::SetNull => "SET NULL",
            Self::NoAction => "NO ACTION",
        }
    }
}

/// Descriptor of the actor type that may hold locks.
///
/// `kind` is compared against `Actor::kind()` when locking; `table` and
/// `primary_key` are the target of the `locked_by` foreign key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActorConfig {
    /// Actor kind descriptor (e.g., "user").
    #[serde(default = "default_actor_kind")]
    pub kind: String,

    /// Table storing actors.
    #[serde(default = "default_actor_table")]
    pub table: String,

    /// Primary key column of the actor table.
    #[serde(default = "default_actor_primary_key")]
    pub primary_key: String,
}

impl Default for ActorConfig {
    fn default() -> Self {
        Self {
            kind: default_actor_kind(),
            table: default_actor_table(),
            primary_key: default_actor_primary_key(),
        }
    }
}

/// Physical column names holding the lock state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LockColumns {
    /// Boolean lock flag column.
    #[serde(default = "default_locked_column")]
    pub locked: String,

    /// Nullable actor reference column.
    #[serde(default = "default_locked_by_column")]
    pub locked_by: String,
}

impl Default for LockColumns {
    fn default() -> Self {
        Self {
            locked: default_locked_column(),
            locked_by: default_locked_by_column(),
        }
    }
}

// Default value functions for serde
pub(crate) fn default_actor_kind() -> String {
    "user".to_string()
}
pub(crate) fn default_actor_table() -> String {
    "users".to_string()
}
pub(crate) fn default_actor_primary_key() -> String {
    "id".to_string()
}
pub(crate) fn default_locked_column() -> String {
    "is_locked".to_string()
}
pub(crate) fn default_locked_by_column() -> String {
    "locked_by_id".to_string()
}
pub(crate) fn default_true() -> bool {
    true
}
