// ============================================================================
// Scorer Selection
// Runtime detection of available parallelism and scorer factory
// ============================================================================

use super::parallel::ParallelScorer;
use super::sequential::SequentialScorer;
use super::traits::CandidateScorer;
use std::sync::Arc;

/// Number of hardware threads the scheduler reports (1 when unknown).
pub fn available_threads() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Create the scorer for a search.
///
/// - `use_parallel` on a multi-core host: `ParallelScorer`
/// - Otherwise: `SequentialScorer`
pub fn create_scorer(use_parallel: bool) -> Arc<dyn CandidateScorer> {
    let threads = available_threads();

    if use_parallel && threads > 1 {
        Arc::new(ParallelScorer::new(threads))
    } else {
        Arc::new(SequentialScorer::new())
    }
}

/// Create a sequential scorer (for testing or comparison).
pub fn create_sequential_scorer() -> Arc<dyn CandidateScorer> {
    Arc::new(SequentialScorer::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available_threads_positive() {
        assert!(available_threads() >= 1);
    }

    #[test]
    fn test_create_scorer() {
        let scorer = create_scorer(true);
        let name = scorer.name();

        if available_threads() > 1 {
            assert_eq!(name, "Parallel");
        } else {
            assert_eq!(name, "Sequential");
        }

        assert_eq!(create_scorer(false).name(), "Sequential");
    }

    #[test]
    fn test_create_sequential_scorer() {
        assert_eq!(create_sequential_scorer().name(), "Sequential");
    }

    #[test]
    fn test_scorer_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Arc<dyn CandidateScorer>>();
    }
}
