//! Schema helper for lockable tables.
//!
//! [`lockable`] adds the two lock columns and the foreign key to the actor
//! table; [`drop_lockable`] removes them again. Both are written against the
//! [`Blueprint`] trait, so hosts can plug in their own schema builder.
//! [`SqlBlueprint`] is a builder that records the commands and renders them as
//! `ALTER TABLE` statements for MySQL or PostgreSQL.

mod blueprint;
mod identifier;
mod lockable;
mod sql;

#[cfg(test)]
mod tests;

// Re-export public API
pub use blueprint::{Blueprint, ForeignKey, SchemaCommand};
pub use identifier::is_valid_identifier;
pub use lockable::{drop_lockable, foreign_key_name, lockable};
pub use sql::{Dialect, SqlBlueprint};
