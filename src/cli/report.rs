// ============================================================================
// Approximation Report
// Final display of a computed fraction
// ============================================================================

use crate::domain::Fraction;
use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// What the shell prints once the search is done
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ApproximationReport {
    pub numerator: String,
    pub denominator: String,
    /// `numerator / denominator` as `f64`
    pub quotient: f64,
    /// `|quotient - pi|`
    pub error: f64,
    pub precision: usize,
    pub algorithm: String,
    #[cfg_attr(feature = "serde", serde(skip))]
    show_error: bool,
}

impl ApproximationReport {
    pub fn new(fraction: &Fraction, precision: usize, algorithm: impl Into<String>) -> Self {
        Self {
            numerator: fraction.numerator().to_string(),
            denominator: fraction.denominator().to_string(),
            quotient: fraction.ratio(),
            error: fraction.error(),
            precision,
            algorithm: algorithm.into(),
            show_error: false,
        }
    }

    /// Include the absolute error line in the text rendering
    pub fn with_error(mut self, show: bool) -> Self {
        self.show_error = show;
        self
    }

    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for ApproximationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PI = {}/{} or {}",
            self.numerator, self.denominator, self.quotient
        )?;
        if self.show_error {
            write!(f, "\nerror = {:e}", self.error)?;
        }
        Ok(())
    }
}
