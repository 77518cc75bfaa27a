//! Configuration model for rowlock.
//!
//! This module defines the Config struct that represents `rowlock.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! sensible defaults for every field, and validation of config values.

mod model;
mod operations;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use model::Config;
pub use types::{ActorConfig, LockColumns, ReferentialAction};
