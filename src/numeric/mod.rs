// ============================================================================
// Numeric Module
// Exact decimal digit arithmetic for the approximation search
// ============================================================================
//
// This module provides:
// - Digit counting, appending and truncation on BigUint (always exact)
// - Overflow-safe f64 ratios of big integer pairs (scoring only)
// - ApproxError: Error types for validation and the search loop
//
// Design principles:
// - Integers never pass through floating point when digits are manipulated
// - Floating point is used only to classify and score ratios
// - All fallible operations return Result (no panics)

mod digits;
mod errors;

pub use digits::{
    append_digits, digit_count, f64_shift_for, pi_error, pow10, ratio_f64, to_f64_shifted,
    truncate_digits, REFERENCE_PI,
};
pub use errors::{ApproxError, ApproxResult, InputField};
