//! Host persistence traits.

use crate::actor::ActorId;
use crate::error::Result;
use crate::record::{Attributes, RecordIdentity, RecordKey};
use serde_json::Value;

/// Storage operations the repository needs from the host.
///
/// Implementations report a missing row as
/// [`crate::error::RowLockError::RecordNotFound`] and any other failure as
/// [`crate::error::RowLockError::StoreError`].
pub trait RecordStore {
    /// Read one stored column of a row. `Ok(None)` when the row has no such column.
    fn fetch_column(&self, id: &RecordIdentity, column: &str) -> Result<Option<Value>>;

    /// Insert a new row and return its primary key.
    fn insert(&mut self, table: &str, attributes: &Attributes) -> Result<RecordKey>;

    /// Write `changes` to an existing row.
    fn update(&mut self, id: &RecordIdentity, changes: &Attributes) -> Result<()>;

    /// Remove an existing row.
    fn delete(&mut self, id: &RecordIdentity) -> Result<()>;
}

/// Resolves actors referenced by the `locked_by` column.
pub trait ActorDirectory<A> {
    fn find_actor(&self, id: ActorId) -> Result<Option<A>>;
}
