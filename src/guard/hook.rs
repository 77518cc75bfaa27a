//! Before-update and before-delete hooks.

use super::decision::{AllowReason, Decision, MutationKind, evaluate};
use super::options::MutationOptions;
use crate::actor::{Actor, AuthContext, SystemActorResolver};
use crate::config::Config;
use crate::error::{Result, RowLockError};
use crate::record::{LockState, Record, RecordIdentity};

/// Lock enforcement hook invoked by the repository before writes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MutationGuard {
    resolver: SystemActorResolver,
}

impl MutationGuard {
    pub fn new(resolver: SystemActorResolver) -> Self {
        Self { resolver }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(SystemActorResolver::from_config(config))
    }

    pub fn resolver(&self) -> &SystemActorResolver {
        &self.resolver
    }

    /// Check an update of `record` against its persisted lock state.
    pub fn before_update<A: Actor>(
        &self,
        identity: &RecordIdentity,
        record: &Record,
        persisted: LockState,
        auth: &AuthContext<'_, A>,
        options: MutationOptions,
    ) -> Result<AllowReason> {
        let changed = record.changed_lockables();
        self.check(MutationKind::Update, identity, persisted, &changed, auth, options)
    }

    /// Check a delete of the record identified by `identity`.
    pub fn before_delete<A: Actor>(
        &self,
        identity: &RecordIdentity,
        persisted: LockState,
        auth: &AuthContext<'_, A>,
        options: MutationOptions,
    ) -> Result<AllowReason> {
        self.check(MutationKind::Delete, identity, persisted, &[], auth, options)
    }

    fn check<A: Actor>(
        &self,
        kind: MutationKind,
        identity: &RecordIdentity,
        persisted: LockState,
        changed_lockables: &[String],
        auth: &AuthContext<'_, A>,
        options: MutationOptions,
    ) -> Result<AllowReason> {
        // Resolve the actor only when the cheaper checks did not decide.
        let exempt = persisted.locked && !options.ignore_lock && self.resolver.is_exempt(auth);
        let decision = evaluate(
            kind,
            persisted,
            changed_lockables,
            options.ignore_lock,
            exempt,
        );

        match decision {
            Decision::Allow(reason) => {
                tracing::debug!(
                    record = %identity,
                    mutation = %kind,
                    reason = reason.as_str(),
                    "mutation allowed"
                );
                Ok(reason)
            }
            Decision::Reject => {
                tracing::warn!(
                    record = %identity,
                    mutation = %kind,
                    actor = ?auth.actor().map(|a| a.id()),
                    changed = ?changed_lockables,
                    "mutation rejected: record is locked"
                );
                Err(RowLockError::LockedRecord(identity.clone()))
            }
        }
    }
}
