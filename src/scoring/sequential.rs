// ============================================================================
// Sequential Scorer
// Reference implementation: a plain nested scan of the candidate grid
// ============================================================================

use super::traits::{candidate_cost, CandidateScorer, ScoredCandidate};

/// Sequential implementation of candidate scoring.
///
/// Works everywhere and defines the result every other scorer must
/// reproduce.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialScorer;

impl SequentialScorer {
    /// Create a new sequential scorer.
    pub fn new() -> Self {
        Self
    }
}

/// Scan a block of denominators whose first element sits at
/// `denominator_offset` in the full axis.
pub(crate) fn scan_block(
    numerators: &[f64],
    denominators: &[f64],
    denominator_offset: usize,
    target: f64,
) -> Option<ScoredCandidate> {
    let mut best: Option<ScoredCandidate> = None;

    for (i, &q) in denominators.iter().enumerate() {
        for (j, &p) in numerators.iter().enumerate() {
            let cost = candidate_cost(p, q, target);
            let replace = match &best {
                None => true,
                Some(current) => cost < current.cost,
            };

            if replace {
                best = Some(ScoredCandidate {
                    numerator_index: j,
                    denominator_index: denominator_offset + i,
                    cost,
                });
            }
        }
    }

    best
}

impl CandidateScorer for SequentialScorer {
    fn best_candidate(
        &self,
        numerators: &[f64],
        denominators: &[f64],
        target: f64,
    ) -> Option<ScoredCandidate> {
        scan_block(numerators, denominators, 0, target)
    }

    fn name(&self) -> &'static str {
        "Sequential"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::REFERENCE_PI;

    #[test]
    fn test_single_axis_scan() {
        let scorer = SequentialScorer::new();
        // 30..39 over 10: 31/10 is closest to pi
        let numerators: Vec<f64> = (30..40).map(f64::from).collect();

        let best = scorer
            .best_candidate(&numerators, &[10.0], REFERENCE_PI)
            .unwrap();
        assert_eq!(best.numerator_index, 1);
        assert_eq!(best.denominator_index, 0);
    }

    #[test]
    fn test_grid_scan_finds_355_113() {
        let scorer = SequentialScorer::new();
        let numerators: Vec<f64> = (350..360).map(f64::from).collect();
        let denominators: Vec<f64> = (110..120).map(f64::from).collect();

        let best = scorer
            .best_candidate(&numerators, &denominators, REFERENCE_PI)
            .unwrap();
        assert_eq!(best.numerator_index, 5);
        assert_eq!(best.denominator_index, 3);
        assert!(best.cost < 3e-7);
    }

    #[test]
    fn test_ties_go_to_smallest_offsets() {
        let scorer = SequentialScorer::new();
        // 2/1 and 4/2 and 6/3 all score identically against 2.0
        let best = scorer
            .best_candidate(&[2.0, 4.0, 6.0], &[1.0, 2.0, 3.0], 2.0)
            .unwrap();
        assert_eq!(best.numerator_index, 0);
        assert_eq!(best.denominator_index, 0);

        // Same ratio reachable only through the second denominator first
        let best = scorer
            .best_candidate(&[4.0, 6.0], &[1.0, 2.0, 3.0], 2.0)
            .unwrap();
        assert_eq!(best.numerator_index, 0);
        assert_eq!(best.denominator_index, 1);
    }

    #[test]
    fn test_infinite_costs_still_seed() {
        let scorer = SequentialScorer::new();
        let best = scorer
            .best_candidate(&[1.0, 2.0], &[0.0], REFERENCE_PI)
            .unwrap();
        assert_eq!(best.numerator_index, 0);
        assert_eq!(best.cost, f64::INFINITY);
    }

    #[test]
    fn test_empty_axes() {
        let scorer = SequentialScorer::new();
        assert!(scorer.best_candidate(&[], &[1.0], REFERENCE_PI).is_none());
        assert!(scorer.best_candidate(&[1.0], &[], REFERENCE_PI).is_none());
    }

    #[test]
    fn test_block_offset() {
        let best = scan_block(&[6.0], &[5.0, 2.0], 10, 3.0).unwrap();
        assert_eq!(best.denominator_index, 11);
    }

    #[test]
    fn test_sequential_name() {
        assert_eq!(SequentialScorer::new().name(), "Sequential");
    }
}
