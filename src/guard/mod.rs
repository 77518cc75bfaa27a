//! Mutation guard for lockable records.
//!
//! The guard runs before every update and before every delete of a
//! persisted record and decides whether the mutation may proceed:
//!
//! 1. A record that is not locked in storage is always mutable.
//! 2. A caller that passed the ignore-lock option is let through.
//! 3. An exempt caller (see [`crate::actor::SystemActorResolver`]) is let through.
//! 4. An update is let through when none of the record's lockable attributes
//!    change; a delete is rejected.
//!
//! The decision itself is the pure function [`evaluate`]. [`MutationGuard`]
//! wraps it with the resolver and turns a rejection into
//! [`crate::error::RowLockError::LockedRecord`].

mod decision;
mod hook;
mod options;


// Re-export public API
pub use decision::{AllowReason, Decision, MutationKind, evaluate};
pub use hook::MutationGuard;
pub use options::MutationOptions;
