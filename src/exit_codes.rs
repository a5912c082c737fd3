//! Exit code constants for the promptbuddy CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable input, invalid config)
//! - 3: Git operation failure
//! - 5: Output could not be written

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable document, or invalid configuration.
pub const USER_ERROR: i32 = 1;

/// Git operation failure outside of an expansion (e.g. repository detection).
pub const GIT_FAILURE: i32 = 3;

/// I/O failure while writing a document or an expanded prompt.
pub const IO_FAILURE: i32 = 5;
