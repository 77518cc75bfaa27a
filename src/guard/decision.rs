//! Pure allow/reject decision.

use crate::record::LockState;

/// The kind of mutation being guarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Update,
    Delete,
}

impl MutationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MutationKind::Update => "update",
            MutationKind::Delete => "delete",
        }
    }
}

impl std::fmt::Display for MutationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a mutation was allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllowReason {
    /// The record is not locked.
    Unlocked,
    /// The caller passed the ignore-lock option.
    Bypassed,
    /// The caller is exempt from locking.
    SystemActor,
    /// The update leaves every lockable attribute untouched.
    NoLockableChanges,
}

impl AllowReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            AllowReason::Unlocked => "unlocked",
            AllowReason::Bypassed => "bypassed",
            AllowReason::SystemActor => "system_actor",
            AllowReason::NoLockableChanges => "no_lockable_changes",
        }
    }
}

/// Outcome of [`evaluate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow(AllowReason),
    Reject,
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow(_))
    }
}

/// Decide whether a mutation may proceed.
///
/// * `persisted` - the lock state as stored, not as pending in memory
/// * `changed_lockables` - lockable attributes the update would change
/// * `bypass` - the caller passed the ignore-lock option
/// * `exempt` - the caller is a system actor or exempt background job
///
/// `changed_lockables` is ignored for deletes.
pub fn evaluate(
    kind: MutationKind,
    persisted: LockState,
    changed_lockables: &[String],
    bypass: bool,
    exempt: bool,
) -> Decision {
    if !persisted.locked {
        return Decision::Allow(AllowReason::Unlocked);
    }
    if bypass {
        return Decision::Allow(AllowReason::Bypassed);
    }
    if exempt {
        return Decision::Allow(AllowReason::SystemActor);
    }

    match kind {
        MutationKind::Update if changed_lockables.is_empty() => {
            Decision::Allow(AllowReason::NoLockableChanges)
        }
        MutationKind::Update | MutationKind::Delete => Decision::Reject,
    }
}
