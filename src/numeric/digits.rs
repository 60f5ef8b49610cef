// ============================================================================
// Decimal Digit Arithmetic
// Exact digit manipulation on arbitrary-precision integers
// ============================================================================

use num_bigint::BigUint;
use num_rational::Ratio;
use num_traits::{ToPrimitive, Zero};

/// Reference value every candidate ratio is scored against (3.141592653589793).
pub const REFERENCE_PI: f64 = std::f64::consts::PI;

/// Bits kept when converting a big integer pair to `f64` (max exponent is 1023).
const F64_SAFE_BITS: u64 = 1000;

/// Compute 10^exp exactly.
#[inline]
pub fn pow10(exp: usize) -> BigUint {
    num_traits::pow(BigUint::from(10u32), exp)
}

/// Number of base-10 digits of `value`.
///
/// Exact integer computation: a float `log10` misreports values such as
/// `10^18 - 1`. Zero is reported as one digit, like its decimal rendering.
pub fn digit_count(value: &BigUint) -> usize {
    if value.is_zero() {
        return 1;
    }

    // floor(log10(2^(bits-1))) + 1 is within one of the true count
    let bits = value.bits();
    let mut count = ((bits - 1) as f64 * std::f64::consts::LOG10_2) as usize + 1;

    while count > 1 && *value < pow10(count - 1) {
        count -= 1;
    }
    while *value >= pow10(count) {
        count += 1;
    }

    count
}

/// Append `width` decimal digits to `value`: `value * 10^width + digits`.
///
/// `digits` must be below `10^width`; the caller owns that invariant.
#[inline]
pub fn append_digits(value: &BigUint, width: usize, digits: u64) -> BigUint {
    value * pow10(width) + BigUint::from(digits)
}

/// Drop the `places` least significant digits of `value`.
#[inline]
pub fn truncate_digits(value: &BigUint, places: usize) -> BigUint {
    if places == 0 {
        return value.clone();
    }
    value / pow10(places)
}

/// Right shift that keeps the widest operand of size `max_bits` finite as `f64`.
#[inline]
pub fn f64_shift_for(max_bits: u64) -> u64 {
    max_bits.saturating_sub(F64_SAFE_BITS)
}

/// Convert `value >> shift` to `f64`.
#[inline]
pub fn to_f64_shifted(value: &BigUint, shift: u64) -> f64 {
    let converted = if shift == 0 {
        value.to_f64()
    } else {
        (value >> shift).to_f64()
    };
    converted.unwrap_or(f64::INFINITY)
}

/// Correctly rounded `f64` value of the exact quotient `p / q`.
///
/// The quotient is rounded once from the exact rational, so operands wider
/// than 53 bits give the same value as exact big-integer division. Quotients
/// beyond `f64` range saturate to infinity or zero.
pub fn ratio_f64(numerator: &BigUint, denominator: &BigUint) -> f64 {
    // new_raw skips the gcd reduction; rounding does not need lowest terms
    Ratio::new_raw(numerator.clone(), denominator.clone())
        .to_f64()
        .unwrap_or(f64::INFINITY)
}

/// Absolute error of a ratio against `REFERENCE_PI`.
#[inline]
pub fn pi_error(ratio: f64) -> f64 {
    (ratio - REFERENCE_PI).abs()
}
