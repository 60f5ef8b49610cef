// ============================================================================
// Lookahead Digit Search
// Scores k speculative digits, commits only the most significant one
// ============================================================================

use crate::domain::{Fraction, Regime, DEFAULT_LOOKAHEAD_DEPTH, MAX_LOOKAHEAD_DEPTH};
use crate::interfaces::DigitSearch;
use crate::numeric::{truncate_digits, ApproxError, ApproxResult, REFERENCE_PI};
use crate::scoring::{create_scorer, AxisSpec, CandidateGrid, CandidateScorer};
use std::sync::Arc;

/// k-digit lookahead search
///
/// The growing side gets `k` speculative digits. When only one side grows,
/// the other is scaled by `10^(k-1)` so both stay on the scale of a single
/// committed digit. The winning cell is truncated back by `k-1` digits on
/// every grown side, which keeps only its leading digit.
///
/// # Example
/// ```text
/// Current: 31/1 (too large), k = 3
/// Candidates: 3100 / (1000..=1999)
/// Best: 3100/1003, committed as 31/10 (1003 truncated by two digits)
/// ```
pub struct LookaheadSearch {
    depth: usize,
    scorer: Arc<dyn CandidateScorer>,
    name: String,
}

impl LookaheadSearch {
    /// Create a lookahead search of `depth` digits, clamped to
    /// `1..=MAX_LOOKAHEAD_DEPTH`.
    pub fn new(depth: usize, use_parallel: bool) -> Self {
        Self::with_scorer(depth, create_scorer(use_parallel))
    }

    /// Create a lookahead search driven by a specific scorer.
    pub fn with_scorer(depth: usize, scorer: Arc<dyn CandidateScorer>) -> Self {
        let depth = depth.clamp(1, MAX_LOOKAHEAD_DEPTH);
        let name = format!("Lookahead-{}-{}", depth, scorer.name());
        Self {
            depth,
            scorer,
            name,
        }
    }

    pub fn scorer_name(&self) -> &'static str {
        self.scorer.name()
    }

    fn axes(&self, current: &Fraction, regime: Regime) -> (AxisSpec, AxisSpec) {
        let k = self.depth;
        let numerator = current.numerator();
        let denominator = current.denominator();

        match regime {
            Regime::TooSmall => (
                AxisSpec::appended(numerator, k),
                AxisSpec::scaled(denominator, k - 1),
            ),
            Regime::TooLarge => (
                AxisSpec::scaled(numerator, k - 1),
                AxisSpec::appended(denominator, k),
            ),
            Regime::InRange => (
                AxisSpec::appended(numerator, k),
                AxisSpec::appended(denominator, k),
            ),
        }
    }
}

impl Default for LookaheadSearch {
    fn default() -> Self {
        Self::new(DEFAULT_LOOKAHEAD_DEPTH, false)
    }
}

impl DigitSearch for LookaheadSearch {
    fn next_step(&self, current: &Fraction, regime: Regime) -> ApproxResult<Fraction> {
        let (numerator_axis, denominator_axis) = self.axes(current, regime);
        let grid = CandidateGrid::build(&numerator_axis, &denominator_axis);

        let best = self
            .scorer
            .best_candidate(&grid.numerators, &grid.denominators, REFERENCE_PI)
            .ok_or(ApproxError::EmptyCandidateGrid)?;

        tracing::trace!(
            %regime,
            cells = grid.cells(),
            numerator_offset = best.numerator_index,
            denominator_offset = best.denominator_index,
            cost = best.cost,
            "lookahead pick"
        );

        // Keep the leading speculative digit, drop the other k-1
        let discard = self.depth - 1;
        let numerator = if regime.grows_numerator() {
            truncate_digits(&numerator_axis.value_at(best.numerator_index), discard)
        } else {
            current.numerator().clone()
        };
        let denominator = if regime.grows_denominator() {
            truncate_digits(&denominator_axis.value_at(best.denominator_index), discard)
        } else {
            current.denominator().clone()
        };

        Ok(Fraction::from_search(numerator, denominator))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn depth(&self) -> usize {
        self.depth
    }
}
