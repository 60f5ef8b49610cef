// ============================================================================
// Fraction Domain Model
// The (numerator, denominator) pair threaded through the search loop
// ============================================================================

use crate::numeric::{
    digit_count, pi_error, ratio_f64, truncate_digits, ApproxError, ApproxResult, InputField,
};
use num_bigint::BigUint;
use num_traits::Zero;
use std::fmt;

use super::Regime;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A positive rational `numerator / denominator` built digit by digit.
///
/// Both values are strictly positive once constructed; every search step
/// only appends digits, so the invariant holds for the whole loop.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "FractionParts", into = "FractionParts")
)]
pub struct Fraction {
    numerator: BigUint,
    denominator: BigUint,
}

/// Wire form of a `Fraction`; deserialization goes back through `Fraction::new`.
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct FractionParts {
    numerator: BigUint,
    denominator: BigUint,
}

#[cfg(feature = "serde")]
impl TryFrom<FractionParts> for Fraction {
    type Error = ApproxError;

    fn try_from(parts: FractionParts) -> ApproxResult<Self> {
        Fraction::new(parts.numerator, parts.denominator)
    }
}

#[cfg(feature = "serde")]
impl From<Fraction> for FractionParts {
    fn from(fraction: Fraction) -> Self {
        let (numerator, denominator) = fraction.into_parts();
        Self {
            numerator,
            denominator,
        }
    }
}

impl Fraction {
    /// Create a fraction from caller-supplied values.
    ///
    /// # Errors
    /// `InvalidInput` if either value is zero.
    pub fn new(numerator: impl Into<BigUint>, denominator: impl Into<BigUint>) -> ApproxResult<Self> {
        let numerator = numerator.into();
        let denominator = denominator.into();

        if denominator.is_zero() {
            return Err(ApproxError::InvalidInput(InputField::Denominator));
        }
        if numerator.is_zero() {
            return Err(ApproxError::InvalidInput(InputField::Numerator));
        }

        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// Build from values a search step derived from a valid fraction.
    #[inline]
    pub(crate) fn from_search(numerator: BigUint, denominator: BigUint) -> Self {
        debug_assert!(!numerator.is_zero() && !denominator.is_zero());
        Self {
            numerator,
            denominator,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn numerator(&self) -> &BigUint {
        &self.numerator
    }

    #[inline]
    pub fn denominator(&self) -> &BigUint {
        &self.denominator
    }

    /// Consume the fraction, returning `(numerator, denominator)`.
    pub fn into_parts(self) -> (BigUint, BigUint) {
        (self.numerator, self.denominator)
    }

    pub fn numerator_digits(&self) -> usize {
        digit_count(&self.numerator)
    }

    /// Digit count of the denominator, the precision metric of the search.
    pub fn denominator_digits(&self) -> usize {
        digit_count(&self.denominator)
    }

    // ========================================================================
    // Floating-point views (classification and scoring only)
    // ========================================================================

    /// `numerator / denominator` as `f64`.
    pub fn ratio(&self) -> f64 {
        ratio_f64(&self.numerator, &self.denominator)
    }

    pub fn log10_ratio(&self) -> f64 {
        self.ratio().log10()
    }

    /// Absolute error `|p/q - pi|`.
    pub fn error(&self) -> f64 {
        pi_error(self.ratio())
    }

    pub fn regime(&self) -> Regime {
        Regime::classify(self.log10_ratio())
    }

    // ========================================================================
    // Initialization
    // ========================================================================

    /// Right-truncate the denominator so it has at most `precision` digits.
    ///
    /// Returns the fraction and the number of digits dropped (zero when the
    /// denominator already fits). `precision` must be at least 1, which keeps
    /// the truncated denominator positive.
    pub fn fit_denominator(self, precision: usize) -> (Self, usize) {
        let digits = self.denominator_digits();
        if digits <= precision {
            return (self, 0);
        }

        let dropped = digits - precision;
        let denominator = truncate_digits(&self.denominator, dropped);
        (Self::from_search(self.numerator, denominator), dropped)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_creation() {
        let f = Fraction::new(355u32, 113u32).unwrap();
        assert_eq!(f.numerator(), &BigUint::from(355u32));
        assert_eq!(f.denominator(), &BigUint::from(113u32));
        assert_eq!(f.to_string(), "355/113");
    }

    #[test]
    fn test_zero_inputs_rejected() {
        assert_eq!(
            Fraction::new(1u32, 0u32),
            Err(ApproxError::InvalidInput(InputField::Denominator))
        );
        assert_eq!(
            Fraction::new(0u32, 7u32),
            Err(ApproxError::InvalidInput(InputField::Numerator))
        );
    }

    #[test]
    fn test_regime_classification() {
        assert_eq!(Fraction::new(1u32, 3u32).unwrap().regime(), Regime::TooSmall);
        assert_eq!(Fraction::new(1u32, 1u32).unwrap().regime(), Regime::InRange);
        assert_eq!(Fraction::new(3u32, 1u32).unwrap().regime(), Regime::InRange);
        assert_eq!(Fraction::new(10u32, 1u32).unwrap().regime(), Regime::TooLarge);
        assert_eq!(Fraction::new(31u32, 1u32).unwrap().regime(), Regime::TooLarge);
    }

    #[test]
    fn test_fit_denominator_truncates() {
        let f = Fraction::new(3u32, 123456789u32).unwrap();
        let (fitted, dropped) = f.fit_denominator(5);
        assert_eq!(dropped, 4);
        assert_eq!(fitted.denominator(), &BigUint::from(12345u32));
        assert_eq!(fitted.denominator_digits(), 5);
        assert_eq!(fitted.numerator(), &BigUint::from(3u32));
    }

    #[test]
    fn test_fit_denominator_noop_when_short() {
        let f = Fraction::new(22u32, 7u32).unwrap();
        let (fitted, dropped) = f.clone().fit_denominator(4);
        assert_eq!(dropped, 0);
        assert_eq!(fitted, f);
    }

    #[test]
    fn test_error() {
        let f = Fraction::new(355u32, 113u32).unwrap();
        assert!(f.error() < 3e-7);
        assert!(f.error() > 2e-7);
    }

    #[test]
    fn test_into_parts() {
        let (numerator, denominator) = Fraction::new(22u32, 7u32).unwrap().into_parts();
        assert_eq!(numerator, BigUint::from(22u32));
        assert_eq!(denominator, BigUint::from(7u32));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let f = Fraction::new(355u32, 113u32).unwrap();
        let json = serde_json::to_string(&f).unwrap();
        assert_eq!(serde_json::from_str::<Fraction>(&json).unwrap(), f);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_rejects_zero_parts() {
        let zero_denominator = serde_json::to_string(&FractionParts {
            numerator: BigUint::from(3u32),
            denominator: BigUint::zero(),
        })
        .unwrap();
        let err = serde_json::from_str::<Fraction>(&zero_denominator).unwrap_err();
        assert!(err.to_string().contains("denominator must be positive"));

        let zero_numerator = serde_json::to_string(&FractionParts {
            numerator: BigUint::zero(),
            denominator: BigUint::from(7u32),
        })
        .unwrap();
        assert!(serde_json::from_str::<Fraction>(&zero_numerator).is_err());
    }
}
