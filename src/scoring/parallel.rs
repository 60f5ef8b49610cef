// ============================================================================
// Parallel Scorer
// Splits the denominator axis across crossbeam scoped threads
// ============================================================================

use super::sequential::scan_block;
use super::traits::{CandidateScorer, ScoredCandidate};

/// Grids smaller than this are scanned on the calling thread.
pub const DEFAULT_MIN_PARALLEL_GRID: usize = 1 << 16;

/// Parallel implementation of candidate scoring.
///
/// Each thread scans a contiguous block of denominators; partial winners are
/// merged in block order with the same strict comparison the sequential scan
/// uses, so the result is identical to `SequentialScorer`.
#[derive(Debug, Clone, Copy)]
pub struct ParallelScorer {
    threads: usize,
    min_grid: usize,
}

impl ParallelScorer {
    /// Create a parallel scorer using `threads` workers (at least one).
    pub fn new(threads: usize) -> Self {
        Self {
            threads: threads.max(1),
            min_grid: DEFAULT_MIN_PARALLEL_GRID,
        }
    }

    /// Override the grid size below which scanning stays sequential.
    pub fn with_min_grid(mut self, min_grid: usize) -> Self {
        self.min_grid = min_grid;
        self
    }

    pub fn threads(&self) -> usize {
        self.threads
    }
}

fn merge_in_order(partials: Vec<Option<ScoredCandidate>>) -> Option<ScoredCandidate> {
    let mut best: Option<ScoredCandidate> = None;

    for candidate in partials.into_iter().flatten() {
        let replace = match &best {
            None => true,
            Some(current) => candidate.cost < current.cost,
        };
        if replace {
            best = Some(candidate);
        }
    }

    best
}

impl CandidateScorer for ParallelScorer {
    fn best_candidate(
        &self,
        numerators: &[f64],
        denominators: &[f64],
        target: f64,
    ) -> Option<ScoredCandidate> {
        let grid = numerators.len().saturating_mul(denominators.len());
        if self.threads == 1 || grid < self.min_grid || denominators.len() < 2 {
            return scan_block(numerators, denominators, 0, target);
        }

        let block_len = denominators.len().div_ceil(self.threads);

        let outcome = crossbeam::thread::scope(|scope| {
            let handles: Vec<_> = denominators
                .chunks(block_len)
                .enumerate()
                .map(|(block_idx, block)| {
                    scope.spawn(move |_| {
                        scan_block(numerators, block, block_idx * block_len, target)
                    })
                })
                .collect();

            handles
                .into_iter()
                .map(|handle| handle.join())
                .collect::<Result<Vec<_>, _>>()
        });

        match outcome {
            Ok(Ok(partials)) => merge_in_order(partials),
            _ => {
                tracing::warn!("parallel candidate scan failed, rescanning sequentially");
                scan_block(numerators, denominators, 0, target)
            },
        }
    }

    fn name(&self) -> &'static str {
        "Parallel"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::REFERENCE_PI;
    use crate::scoring::SequentialScorer;

    fn axis(start: u32, len: u32) -> Vec<f64> {
        (start..start + len).map(f64::from).collect()
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let numerators = axis(3_141_000, 1000);
        let denominators = axis(1_000_000, 1000);

        let sequential = SequentialScorer::new()
            .best_candidate(&numerators, &denominators, REFERENCE_PI)
            .unwrap();
        let parallel = ParallelScorer::new(4)
            .with_min_grid(0)
            .best_candidate(&numerators, &denominators, REFERENCE_PI)
            .unwrap();

        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_parallel_tie_break_across_blocks() {
        // Exact ratio 2.0 occurs in every block; the first block must win
        let numerators = vec![2.0, 4.0, 6.0, 8.0];
        let denominators = vec![1.0, 2.0, 3.0, 4.0];

        let best = ParallelScorer::new(4)
            .with_min_grid(0)
            .best_candidate(&numerators, &denominators, 2.0)
            .unwrap();
        assert_eq!(best.numerator_index, 0);
        assert_eq!(best.denominator_index, 0);
    }

    #[test]
    fn test_small_grid_stays_sequential() {
        let scorer = ParallelScorer::new(8);
        let best = scorer
            .best_candidate(&axis(30, 10), &[10.0], REFERENCE_PI)
            .unwrap();
        assert_eq!(best.numerator_index, 1);
    }

    #[test]
    fn test_thread_count_floor() {
        assert_eq!(ParallelScorer::new(0).threads(), 1);
        assert_eq!(ParallelScorer::new(0).name(), "Parallel");
    }

    #[test]
    fn test_merge_skips_empty_blocks() {
        let a = ScoredCandidate {
            numerator_index: 1,
            denominator_index: 2,
            cost: 0.5,
        };
        let b = ScoredCandidate {
            numerator_index: 0,
            denominator_index: 7,
            cost: 0.5,
        };
        assert_eq!(merge_in_order(vec![None, Some(a), Some(b)]), Some(a));
    }
}
