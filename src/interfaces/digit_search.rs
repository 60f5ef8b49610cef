// ============================================================================
// Digit Search Interface
// Defines the contract for pluggable digit selection strategies
// ============================================================================

use crate::domain::{Fraction, Regime};
use crate::numeric::ApproxResult;

/// Strategy pattern interface for digit selection
/// Implementations: Greedy (one digit), Lookahead (k digits, commits one)
pub trait DigitSearch: Send + Sync {
    /// Choose the next committed digit(s) for `current`.
    ///
    /// # Arguments
    /// * `current` - The fraction built so far
    /// * `regime` - Classification of `current`, deciding which side(s) grow
    ///
    /// # Returns
    /// The fraction with exactly one digit appended to every side the regime
    /// grows; the other side is returned unchanged
    fn next_step(&self, current: &Fraction, regime: Regime) -> ApproxResult<Fraction>;

    /// Get the algorithm name for logging/reports
    fn name(&self) -> &str;

    /// Speculative digits scored per committed digit
    fn depth(&self) -> usize {
        1
    }
}
