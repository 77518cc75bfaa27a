//! Exit code constants for the rowlock CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable files)
//! - 2: Configuration or schema definition error
//! - 3: Record store failure
//! - 4: Locked record violation

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid actor, or IO failure.
pub const USER_ERROR: i32 = 1;

/// Configuration or schema definition error.
pub const CONFIG_FAILURE: i32 = 2;

/// The record store rejected or lost a write.
pub const STORE_FAILURE: i32 = 3;

/// A mutation was rejected because the record is locked.
pub const LOCKED_RECORD: i32 = 4;
