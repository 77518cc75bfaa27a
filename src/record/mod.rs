//! Record model for rowlock.
//!
//! A [`Record`] is the in-memory image of one row of a host table: the
//! attributes as currently set, and the attributes as last persisted. The
//! difference between the two is what an update would write, and what the
//! mutation guard inspects when the row is locked.
//!
//! Each record points at a shared [`RecordType`], which declares the table,
//! the lockable attributes, the lock columns, and the observed properties
//! (fillable list and casts).

mod model;
mod record_type;
mod types;


// Re-export public API
pub use model::Record;
pub use record_type::RecordType;
pub use types::{Attributes, LockState, LockableSet, RecordIdentity, RecordKey};
