//! Save, delete and lock state operations.

use super::bypass::IgnoreLock;
use super::store::{ActorDirectory, RecordStore};
use crate::actor::{Actor, AuthContext};
use crate::config::Config;
use crate::error::{Result, RowLockError};
use crate::guard::{MutationGuard, MutationOptions};
use crate::record::{LockState, LockableSet, Record, RecordIdentity, RecordType};
use serde_json::Value;
use std::marker::PhantomData;

/// Lock-aware write path for records of any [`RecordType`].
pub struct Repository<S, A> {
    store: S,
    config: Config,
    guard: MutationGuard,
    _actor: PhantomData<fn() -> A>,
}

impl<S: RecordStore, A: Actor> Repository<S, A> {
    pub fn new(store: S, config: Config) -> Self {
        let guard = MutationGuard::from_config(&config);
        Self {
            store,
            config,
            guard,
            _actor: PhantomData,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn guard(&self) -> &MutationGuard {
        &self.guard
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Declare a record type using the configured lock columns.
    pub fn record_type(&self, table: impl Into<String>) -> RecordType {
        RecordType::with_columns(table, &self.config.columns)
    }

    /// Insert a new record or update a persisted one.
    pub fn save(&mut self, record: &mut Record, auth: &AuthContext<'_, A>) -> Result<()> {
        self.save_with(record, auth, MutationOptions::default())
    }

    /// [`Repository::save`] with explicit options.
    pub fn save_with(
        &mut self,
        record: &mut Record,
        auth: &AuthContext<'_, A>,
        options: MutationOptions,
    ) -> Result<()> {
        if record.exists() {
            self.update_with(record, auth, options)
        } else {
            self.insert(record)
        }
    }

    /// Update a persisted record.
    ///
    /// Nothing is written, and the guard is not consulted, when the record
    /// has no pending changes.
    pub fn update(&mut self, record: &mut Record, auth: &AuthContext<'_, A>) -> Result<()> {
        self.update_with(record, auth, MutationOptions::default())
    }

    /// [`Repository::update`] with explicit options.
    pub fn update_with(
        &mut self,
        record: &mut Record,
        auth: &AuthContext<'_, A>,
        options: MutationOptions,
    ) -> Result<()> {
        self.check_lock_columns(record)?;
        let identity = require_stored(record, "update")?;

        let changes = record.changes();
        if changes.is_empty() {
            return Ok(());
        }

        let persisted = self.persisted_lock_state(record, &identity)?;
        self.guard
            .before_update(&identity, record, persisted, auth, options)?;

        self.store.update(&identity, &changes)?;
        tracing::trace!(record = %identity, columns = changes.len(), "record updated");
        record.sync_persisted(identity.key);
        Ok(())
    }

    /// Delete a persisted record.
    pub fn delete(&mut self, record: &mut Record, auth: &AuthContext<'_, A>) -> Result<()> {
        self.delete_with(record, auth, MutationOptions::default())
    }

    /// [`Repository::delete`] with explicit options.
    pub fn delete_with(
        &mut self,
        record: &mut Record,
        auth: &AuthContext<'_, A>,
        options: MutationOptions,
    ) -> Result<()> {
        self.check_lock_columns(record)?;
        let identity = require_stored(record, "delete")?;

        let persisted = self.persisted_lock_state(record, &identity)?;
        self.guard
            .before_delete(&identity, persisted, auth, options)?;

        self.store.delete(&identity)?;
        tracing::trace!(record = %identity, "record deleted");
        record.mark_deleted();
        Ok(())
    }

    /// Skip lock enforcement for the next operation run on the returned handle.
    pub fn ignore_lock(&mut self) -> IgnoreLock<'_, S, A> {
        IgnoreLock::new(self)
    }

    /// Lock the record, attributing the lock to `actor` when given, and save it.
    ///
    /// Fails with [`RowLockError::InvalidActorType`] when `actor` is not of the
    /// configured kind. On failure the record's lock columns are left as they
    /// were.
    pub fn lock(
        &mut self,
        record: &mut Record,
        actor: Option<&A>,
        auth: &AuthContext<'_, A>,
    ) -> Result<()> {
        if let Some(actor) = actor
            && actor.kind() != self.config.actor.kind
        {
            return Err(RowLockError::InvalidActorType {
                expected: self.config.actor.kind.clone(),
                found: actor.kind().to_string(),
            });
        }

        let owner = actor.map(|a| a.id());
        self.apply_lock_state(record, LockState::locked(owner), auth)?;
        tracing::info!(table = record.table(), key = ?record.key(), locked_by = ?owner, "record locked");
        Ok(())
    }

    /// Unlock the record and save it.
    pub fn unlock(&mut self, record: &mut Record, auth: &AuthContext<'_, A>) -> Result<()> {
        self.apply_lock_state(record, LockState::unlocked(), auth)?;
        tracing::info!(table = record.table(), key = ?record.key(), "record unlocked");
        Ok(())
    }

    /// Whether the record is locked.
    ///
    /// Reads the in-memory flag; when the flag was not loaded, reads it from
    /// the store. An unsaved record without the flag is unlocked.
    pub fn is_locked(&self, record: &Record) -> Result<bool> {
        self.check_lock_columns(record)?;
        if let Some(state) = record.lock_state() {
            return Ok(state.locked);
        }
        match stored_identity(record) {
            Some(identity) => Ok(self.fetch_lock_state(record.record_type(), &identity)?.locked),
            None => Ok(false),
        }
    }

    /// Attributes protected while the record is locked.
    pub fn lockables<'r>(&self, record: &'r Record) -> &'r LockableSet {
        record.lockables()
    }

    fn insert(&mut self, record: &mut Record) -> Result<()> {
        self.check_lock_columns(record)?;
        let key = self.store.insert(record.table(), record.attributes())?;
        tracing::trace!(table = record.table(), key, "record inserted");
        record.sync_persisted(key);
        Ok(())
    }

    fn apply_lock_state(
        &mut self,
        record: &mut Record,
        state: LockState,
        auth: &AuthContext<'_, A>,
    ) -> Result<()> {
        self.check_lock_columns(record)?;
        let snapshot = record.lock_columns_snapshot();
        record.set_lock_state(state);
        if let Err(err) = self.save(record, auth) {
            record.restore_lock_columns(snapshot);
            return Err(err);
        }
        Ok(())
    }

    /// Records must use the lock columns this repository was configured with.
    fn check_lock_columns(&self, record: &Record) -> Result<()> {
        let declared = record.record_type().lock_columns();
        let configured = &self.config.columns;
        if declared == configured {
            return Ok(());
        }
        Err(RowLockError::ConfigError(format!(
            "record type '{}' uses lock columns '{}'/'{}' but the repository is configured for '{}'/'{}'",
            record.table(),
            declared.locked,
            declared.locked_by,
            configured.locked,
            configured.locked_by
        )))
    }

    /// Lock state the guard evaluates: as loaded, or fetched when not loaded.
    fn persisted_lock_state(&self, record: &Record, identity: &RecordIdentity) -> Result<LockState> {
        match record.persisted_lock_state() {
            Some(state) => Ok(state),
            None => self.fetch_lock_state(record.record_type(), identity),
        }
    }

    fn fetch_lock_state(
        &self,
        record_type: &RecordType,
        identity: &RecordIdentity,
    ) -> Result<LockState> {
        let columns = record_type.lock_columns();
        let locked = self.fetch_cast(record_type, identity, &columns.locked)?;
        let locked_by = self.fetch_cast(record_type, identity, &columns.locked_by)?;
        tracing::trace!(record = %identity, "lock state fetched from store");
        Ok(LockState::from_values(locked.as_ref(), locked_by.as_ref()))
    }

    fn fetch_cast(
        &self,
        record_type: &RecordType,
        identity: &RecordIdentity,
        column: &str,
    ) -> Result<Option<Value>> {
        Ok(self
            .store
            .fetch_column(identity, column)?
            .map(|value| record_type.properties().cast(column, &value)))
    }
}

impl<S: RecordStore + ActorDirectory<A>, A: Actor> Repository<S, A> {
    /// The actor the record is locked by, if it is locked by anyone.
    pub fn locked_by(&self, record: &Record) -> Result<Option<A>> {
        if !self.is_locked(record)? {
            return Ok(None);
        }

        let record_type = record.record_type();
        let column = &record_type.lock_columns().locked_by;
        let owner = match record.get_cast(column) {
            Some(value) => Some(value),
            None => match stored_identity(record) {
                Some(identity) => self.fetch_cast(record_type, &identity, column)?,
                None => None,
            },
        };

        match owner.as_ref().and_then(Value::as_u64) {
            Some(id) => self.store.find_actor(id),
            None => Ok(None),
        }
    }
}

/// Identity of a record that currently has a stored row.
fn stored_identity(record: &Record) -> Option<RecordIdentity> {
    record.identity().filter(|_| record.exists())
}

fn require_stored(record: &Record, action: &str) -> Result<RecordIdentity> {
    match record.identity() {
        Some(identity) if record.exists() => Ok(identity),
        Some(identity) => Err(RowLockError::RecordNotFound(identity)),
        None => Err(RowLockError::UserError(format!(
            "cannot {} an unsaved '{}' record",
            action,
            record.table()
        ))),
    }
}
