// ============================================================================
// Greedy Digit Search
// One-digit lookahead: the locally best digit is committed immediately
// ============================================================================

use crate::domain::{Fraction, Regime};
use crate::interfaces::DigitSearch;
use crate::numeric::{append_digits, pi_error, ratio_f64, ApproxError, ApproxResult};
use num_bigint::BigUint;
use smallvec::{smallvec, SmallVec};

type Candidates = SmallVec<[BigUint; 10]>;

/// Greedy single-digit search
///
/// Every candidate is scored with an exact big-integer ratio.
///
/// # Example
/// ```text
/// Current: 3/1 (in range)
/// Candidates: (30..=39) / (10..=19), 100 pairs
/// Best: 38/12, committed as the next fraction
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedySearch;

impl GreedySearch {
    pub fn new() -> Self {
        Self
    }
}

fn grow(value: &BigUint, grows: bool) -> Candidates {
    if grows {
        (0..10).map(|digit| append_digits(value, 1, digit)).collect()
    } else {
        smallvec![value.clone()]
    }
}

impl DigitSearch for GreedySearch {
    fn next_step(&self, current: &Fraction, regime: Regime) -> ApproxResult<Fraction> {
        let numerators = grow(current.numerator(), regime.grows_numerator());
        let denominators = grow(current.denominator(), regime.grows_denominator());

        // Denominator digit outer, numerator digit inner; first minimum wins
        let mut best: Option<(usize, usize, f64)> = None;
        for (i, q) in denominators.iter().enumerate() {
            for (j, p) in numerators.iter().enumerate() {
                let cost = pi_error(ratio_f64(p, q));
                let replace = match best {
                    None => true,
                    Some((_, _, best_cost)) => cost < best_cost,
                };
                if replace {
                    best = Some((j, i, cost));
                }
            }
        }

        let (j, i, cost) = best.ok_or(ApproxError::EmptyCandidateGrid)?;
        tracing::trace!(%regime, numerator_digit = j, denominator_digit = i, cost, "greedy pick");

        Ok(Fraction::from_search(
            numerators[j].clone(),
            denominators[i].clone(),
        ))
    }

    fn name(&self) -> &str {
        "Greedy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frac(n: u64, d: u64) -> Fraction {
        Fraction::new(n, d).unwrap()
    }

    #[test]
    fn test_in_range_grows_both_sides() {
        let next = GreedySearch::new()
            .next_step(&frac(3, 1), Regime::InRange)
            .unwrap();
        // 38/12 (err 0.025) beats 31/10 (err 0.042)
        assert_eq!(next, frac(38, 12));
    }

    #[test]
    fn test_too_large_grows_denominator_only() {
        // 31/10..31/19: 31/10 = 3.1 is closest
        let next = GreedySearch::new()
            .next_step(&frac(31, 1), Regime::TooLarge)
            .unwrap();
        assert_eq!(next, frac(31, 10));
    }

    #[test]
    fn test_too_small_grows_numerator_only() {
        // 10..19 over 7: 22/7 is not reachable, 19/7 is the closest
        let next = GreedySearch::new()
            .next_step(&frac(1, 7), Regime::TooSmall)
            .unwrap();
        assert_eq!(next, frac(19, 7));
    }

    #[test]
    fn test_very_small_ratio_still_picks_a_digit() {
        // Every candidate is far from pi; the closest one must still win
        let next = GreedySearch::new()
            .next_step(&frac(1, 100_000), Regime::TooSmall)
            .unwrap();
        assert_eq!(next, frac(19, 100_000));
    }

    #[test]
    fn test_in_range_capped_ratio() {
        // Ratios from 1/1 top out at 19/10, the closest one to pi
        let next = GreedySearch::new()
            .next_step(&frac(1, 1), Regime::InRange)
            .unwrap();
        assert_eq!(next, frac(19, 10));
    }

    #[test]
    fn test_name_and_depth() {
        let search = GreedySearch::new();
        assert_eq!(search.name(), "Greedy");
        assert_eq!(search.depth(), 1);
    }
}
