//! Process exit codes.
//!
//! A failed variant is not an error on its own; `EXIT_VARIANT_FAILED` is only
//! used when the caller asks for a strict run.

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_GENERIC_FAIL: i32 = 1;
pub const EXIT_VARIANT_FAILED: i32 = 2;
