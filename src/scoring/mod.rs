// ============================================================================
// Scoring Module
// Candidate grid construction and best-ratio scanning
// ============================================================================

pub mod detector;
pub mod grid;
pub mod parallel;
pub mod sequential;
pub mod traits;

pub use detector::{available_threads, create_scorer, create_sequential_scorer};
pub use grid::{AxisSpec, CandidateAxis, CandidateGrid};
pub use parallel::{ParallelScorer, DEFAULT_MIN_PARALLEL_GRID};
pub use sequential::SequentialScorer;
pub use traits::{candidate_cost, CandidateScorer, ScoredCandidate};

use crate::numeric::REFERENCE_PI;

/// Best (numerator, denominator) cell of a candidate grid against pi.
///
/// Pure sequential scan; see `CandidateScorer` for the ordering and tie rule.
pub fn score_candidates(numerators: &[f64], denominators: &[f64]) -> Option<ScoredCandidate> {
    SequentialScorer::new().best_candidate(numerators, denominators, REFERENCE_PI)
}
