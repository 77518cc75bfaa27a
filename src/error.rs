//! Error types for rowlock.
//!
//! Uses thiserror for derive macros. Every variant maps to a CLI exit code.

use crate::exit_codes;
use crate::record::RecordIdentity;
use thiserror::Error;

/// Main error type for rowlock operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowLockError {
    /// An update or delete was rejected because the record is locked.
    #[error("record {0} is locked")]
    LockedRecord(RecordIdentity),

    /// `lock()` was given an actor that is not of the configured actor kind.
    #[error("actor must be of kind '{expected}', got '{found}'")]
    InvalidActorType { expected: String, found: String },

    /// The record store has no row for the given identity.
    #[error("record {0} does not exist")]
    RecordNotFound(RecordIdentity),

    /// Configuration could not be loaded or failed validation.
    #[error("config error: {0}")]
    ConfigError(String),

    /// A schema definition could not be built or rendered.
    #[error("schema error: {0}")]
    SchemaError(String),

    /// The host record store failed.
    #[error("record store failed: {0}")]
    StoreError(String),

    /// Invalid arguments or IO failure.
    #[error("{0}")]
    UserError(String),
}

impl RowLockError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            RowLockError::LockedRecord(_) => exit_codes::LOCKED_RECORD,
            RowLockError::InvalidActorType { .. } => exit_codes::USER_ERROR,
            RowLockError::RecordNotFound(_) => exit_codes::STORE_FAILURE,
            RowLockError::ConfigError(_) => exit_codes::CONFIG_FAILURE,
            RowLockError::SchemaError(_) => exit_codes::CONFIG_FAILURE,
            RowLockError::StoreError(_) => exit_codes::STORE_FAILURE,
            RowLockError::UserError(_) => exit_codes::USER_ERROR,
        }
    }

    /// True when this error is a lock rejection.
    pub fn is_locked_record(&self) -> bool {
        matches!(self, RowLockError::LockedRecord(_))
    }
}

/// Result type alias for rowlock operations.
pub type Result<T> = std::result::Result<T, RowLockError>;
