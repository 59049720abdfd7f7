//! Stable exit codes for sumton CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Invalid input, config or command line.
pub const INVALID: i32 = 1;
/// `sumton verify` found a method disagreeing with the closed form.
pub const MISMATCH: i32 = 2;
