// ============================================================================
// Candidate Scorer Trait
// Abstract interface for scanning a candidate grid for the best ratio
// ============================================================================

/// Winning cell of a candidate grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredCandidate {
    /// Offset into the numerator axis
    pub numerator_index: usize,
    /// Offset into the denominator axis
    pub denominator_index: usize,
    /// `|numerator / denominator - target|`
    pub cost: f64,
}

/// Cost of one candidate ratio. NaN is ranked as the worst possible cost.
#[inline]
pub fn candidate_cost(numerator: f64, denominator: f64, target: f64) -> f64 {
    let cost = (numerator / denominator - target).abs();
    if cost.is_nan() {
        f64::INFINITY
    } else {
        cost
    }
}

/// Trait for scoring a grid of candidate fractions.
///
/// The grid is the cartesian product of a numerator axis and a denominator
/// axis. Implementations must agree with a sequential scan that walks
/// denominators in the outer loop and numerators in the inner loop, seeds the
/// best with the first cell and replaces it only on a strictly smaller cost.
/// Ties therefore go to the smallest denominator offset, then the smallest
/// numerator offset.
///
/// # Thread Safety
/// All implementations must be `Send + Sync` so an approximator holding one
/// can be shared across threads.
pub trait CandidateScorer: Send + Sync {
    /// Find the grid cell whose ratio is closest to `target`.
    ///
    /// # Returns
    /// `None` only when one of the axes is empty
    fn best_candidate(
        &self,
        numerators: &[f64],
        denominators: &[f64],
        target: f64,
    ) -> Option<ScoredCandidate>;

    /// Get the name of this scorer.
    ///
    /// Used for logging, debugging, and benchmarking.
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Mock implementation that only looks at the first cell
    struct FirstCellScorer;

    impl CandidateScorer for FirstCellScorer {
        fn best_candidate(
            &self,
            numerators: &[f64],
            denominators: &[f64],
            target: f64,
        ) -> Option<ScoredCandidate> {
            let (&p, &q) = (numerators.first()?, denominators.first()?);
            Some(ScoredCandidate {
                numerator_index: 0,
                denominator_index: 0,
                cost: candidate_cost(p, q, target),
            })
        }

        fn name(&self) -> &'static str {
            "FirstCell"
        }
    }

    #[test]
    fn test_trait_can_be_implemented() {
        let scorer = FirstCellScorer;
        assert_eq!(scorer.name(), "FirstCell");
        assert!(scorer.best_candidate(&[], &[1.0], 3.0).is_none());
        let best = scorer.best_candidate(&[6.0], &[2.0], 3.0).unwrap();
        assert_eq!(best.cost, 0.0);
    }

    #[test]
    fn test_candidate_cost_nan_is_worst() {
        assert_eq!(candidate_cost(0.0, 0.0, 3.0), f64::INFINITY);
        assert_eq!(candidate_cost(1.0, 0.0, 3.0), f64::INFINITY);
        assert_eq!(candidate_cost(3.0, 1.0, 3.0), 0.0);
    }
}
