//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for rowlock.
///
/// This struct represents the contents of `rowlock.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The actor type allowed to hold locks.
    pub actor: ActorConfig,

    /// Column names for the persisted lock state.
    pub columns: LockColumns,

    /// What happens to locked records when the locking actor is deleted.
    pub on_delete: ReferentialAction,

    /// Whether background execution without an authenticated actor is exempt
    /// from lock enforcement.
    #[serde(default = "default_true")]
    pub exempt_background: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            actor: ActorConfig::default(),
            columns: LockColumns::default(),
            on_delete: ReferentialAction::default(),
            exempt_background: default_true(),
        }
    }
}
