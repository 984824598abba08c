//! Unified exit codes for the turnstile CLI.
//! These codes are part of the public contract; scripts assert on them.

pub const SUCCESS: i32 = 0; // Command succeeded / verdict was Allow
pub const INTERNAL_ERROR: i32 = 1; // Unexpected failure
pub const INVALID_INPUT: i32 = 2; // Malformed ARN or table config error
pub const DENY: i32 = 3; // Evaluation completed with a Deny verdict
