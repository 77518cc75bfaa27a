//! Lock-aware repository over a host record store.
//!
//! The host persistence layer is reached through two traits:
//! - [`RecordStore`]: fetch a column by identity, insert, update, delete
//! - [`ActorDirectory`]: resolve an actor by primary key
//!
//! [`Repository`] orchestrates writes through a store. Every update and
//! delete of a persisted record passes the [`crate::guard::MutationGuard`]
//! first; a rejected mutation never reaches the store.
//!
//! # Bypassing the lock
//!
//! Trusted code can skip enforcement for exactly one operation, either by
//! passing [`crate::guard::MutationOptions::ignore_lock`] to a `*_with`
//! method or through the one-shot handle returned by
//! [`Repository::ignore_lock`], which is consumed by the operation it runs.
//!
//! # Memory store
//!
//! [`MemoryStore`] implements both traits over in-process maps, for tests
//! and for hosts that want to exercise the flow without a database.

mod bypass;
mod memory;
mod operations;
mod store;


// Re-export public API
pub use bypass::IgnoreLock;
pub use memory::MemoryStore;
pub use operations::Repository;
pub use store::{ActorDirectory, RecordStore};
