//! One-shot ignore-lock handle.

use super::operations::Repository;
use super::store::RecordStore;
use crate::actor::{Actor, AuthContext};
use crate::error::Result;
use crate::guard::MutationOptions;
use crate::record::Record;

/// Runs a single save, update or delete with lock enforcement skipped.
///
/// Each method consumes the handle, so the bypass cannot outlive the
/// operation it was created for.
#[must_use = "the bypass only applies to an operation called on this handle"]
pub struct IgnoreLock<'r, S, A> {
    repo: &'r mut Repository<S, A>,
}

impl<'r, S: RecordStore, A: Actor> IgnoreLock<'r, S, A> {
    pub(super) fn new(repo: &'r mut Repository<S, A>) -> Self {
        Self { repo }
    }

    pub fn save(self, record: &mut Record, auth: &AuthContext<'_, A>) -> Result<()> {
        self.repo
            .save_with(record, auth, MutationOptions::ignore_lock())
    }

    pub fn update(self, record: &mut Record, auth: &AuthContext<'_, A>) -> Result<()> {
        self.repo
            .update_with(record, auth, MutationOptions::ignore_lock())
    }

    pub fn delete(self, record: &mut Record, auth: &AuthContext<'_, A>) -> Result<()> {
        self.repo
            .delete_with(record, auth, MutationOptions::ignore_lock())
    }
}
