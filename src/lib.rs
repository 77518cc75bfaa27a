//! rowlock: advisory row locking for records managed by a host persistence layer.
//!
//! A record can be locked, optionally on behalf of an actor. While locked,
//! updates that touch the record type's lockable attributes and all deletes
//! are rejected, unless the caller is a system actor, an exempt background
//! job, or explicitly ignores the lock for one operation.
//!
//! ```
//! use rowlock::actor::{Actor, ActorId, AuthContext};
//! use rowlock::config::Config;
//! use rowlock::record::{Record, RecordType};
//! use rowlock::repository::{MemoryStore, Repository};
//! use std::sync::Arc;
//!
//! #[derive(Clone)]
//! struct User(ActorId);
//!
//! impl Actor for User {
//!     fn id(&self) -> ActorId { self.0 }
//!     fn kind(&self) -> &str { "user" }
//! }
//!
//! let mut repo: Repository<MemoryStore<User>, User> =
//!     Repository::new(MemoryStore::new(), Config::default());
//! let posts = Arc::new(RecordType::new("posts").with_lockable(["status"]));
//! let alice = User(1);
//! let auth = AuthContext::interactive(&alice);
//!
//! let mut post = Record::new(posts);
//! post.set("status", "draft");
//! repo.save(&mut post, &auth)?;
//! repo.lock(&mut post, Some(&alice), &auth)?;
//!
//! post.set("status", "published");
//! assert!(repo.save(&mut post, &auth).unwrap_err().is_locked_record());
//! repo.ignore_lock().save(&mut post, &auth)?;
//! # Ok::<(), rowlock::error::RowLockError>(())
//! ```

pub mod actor;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod guard;
pub mod properties;
pub mod record;
pub mod repository;
pub mod schema;

#[cfg(test)]
mod test_support;
