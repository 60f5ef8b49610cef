// ============================================================================
// Candidate Grid
// Converts big-integer candidate ranges into f64 axes for scoring
// ============================================================================

use crate::numeric::{f64_shift_for, pow10, to_f64_shifted};
use num_bigint::BigUint;
use smallvec::SmallVec;

/// One axis of scored values. Single-digit searches stay inline.
pub type CandidateAxis = SmallVec<[f64; 10]>;

/// A contiguous range of candidate integers `base + t` for `t in 0..count`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisSpec {
    base: BigUint,
    count: u64,
}

impl AxisSpec {
    /// A side that does not grow this step: one candidate, `value`.
    pub fn fixed(value: BigUint) -> Self {
        Self {
            base: value,
            count: 1,
        }
    }

    /// A side that is only rescaled: one candidate, `value * 10^places`.
    pub fn scaled(value: &BigUint, places: usize) -> Self {
        Self::fixed(value * pow10(places))
    }

    /// A side growing by `width` digits: `value * 10^width + t` for every
    /// `t` below `10^width`.
    pub fn appended(value: &BigUint, width: usize) -> Self {
        Self {
            base: value * pow10(width),
            count: 10u64.pow(width as u32),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.count as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Exact candidate at `offset`.
    pub fn value_at(&self, offset: usize) -> BigUint {
        &self.base + BigUint::from(offset as u64)
    }

    fn max_bits(&self) -> u64 {
        self.value_at(self.len().saturating_sub(1)).bits()
    }

    fn to_axis(&self, shift: u64) -> CandidateAxis {
        (0..self.len())
            .map(|offset| to_f64_shifted(&self.value_at(offset), shift))
            .collect()
    }
}

/// Numerator and denominator axes sharing one `f64` scale.
#[derive(Debug, Clone)]
pub struct CandidateGrid {
    pub numerators: CandidateAxis,
    pub denominators: CandidateAxis,
}

impl CandidateGrid {
    /// Build both axes with a common right shift so ratios stay finite.
    pub fn build(numerator: &AxisSpec, denominator: &AxisSpec) -> Self {
        let shift = f64_shift_for(numerator.max_bits().max(denominator.max_bits()));

        tracing::trace!(
            numerators = numerator.len(),
            denominators = denominator.len(),
            shift,
            "building candidate grid"
        );

        Self {
            numerators: numerator.to_axis(shift),
            denominators: denominator.to_axis(shift),
        }
    }

    /// Number of cells in the grid.
    pub fn cells(&self) -> usize {
        self.numerators.len() * self.denominators.len()
    }
}
