// ============================================================================
// Ratio Regime
// Order-of-magnitude classification driving which side grows next
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Where the current ratio sits relative to pi's order of magnitude
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Regime {
    /// ratio < 1: only the numerator grows
    TooSmall,
    /// 1 <= ratio < 10: numerator and denominator grow in lock-step
    InRange,
    /// ratio >= 10: only the denominator grows
    TooLarge,
}

impl Regime {
    /// Classify from `log10(numerator / denominator)`.
    #[inline]
    pub fn classify(log10_ratio: f64) -> Self {
        if log10_ratio < 0.0 {
            Regime::TooSmall
        } else if log10_ratio >= 1.0 {
            Regime::TooLarge
        } else {
            Regime::InRange
        }
    }

    #[inline]
    pub fn grows_numerator(self) -> bool {
        matches!(self, Regime::TooSmall | Regime::InRange)
    }

    #[inline]
    pub fn grows_denominator(self) -> bool {
        matches!(self, Regime::InRange | Regime::TooLarge)
    }

    /// Whether the loop may stop in this regime.
    ///
    /// Precision is measured on the denominator only, so the numerator-only
    /// regime never terminates the search.
    #[inline]
    pub fn checks_termination(self) -> bool {
        self.grows_denominator()
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Regime::TooSmall => write!(f, "too-small"),
            Regime::InRange => write!(f, "in-range"),
            Regime::TooLarge => write!(f, "too-large"),
        }
    }
}
