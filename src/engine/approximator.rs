// ============================================================================
// Approximator
// Core search loop: truncation, regime classification, termination
// ============================================================================

use crate::domain::Fraction;
use crate::interfaces::{ApproximationEvent, DigitSearch, EventHandler};
use crate::numeric::{ApproxError, ApproxResult, InputField};
use chrono::Utc;
use num_bigint::BigUint;
use std::sync::Arc;

/// Digit-wise rational approximator of pi with a pluggable digit search
pub struct Approximator {
    /// Pluggable digit search (greedy or lookahead)
    search: Box<dyn DigitSearch>,

    /// Event handler for observing the search
    event_handler: Arc<dyn EventHandler>,

    /// Optional guard on the number of committed steps
    iteration_limit: Option<usize>,
}

impl Approximator {
    /// Create a new approximator
    pub fn new(search: Box<dyn DigitSearch>, event_handler: Arc<dyn EventHandler>) -> Self {
        Self {
            search,
            event_handler,
            iteration_limit: None,
        }
    }

    /// Fail with `IterationLimitExceeded` instead of running past `limit` steps
    pub fn with_iteration_limit(mut self, limit: Option<usize>) -> Self {
        self.iteration_limit = limit;
        self
    }

    pub fn algorithm_name(&self) -> &str {
        self.search.name()
    }

    pub fn depth(&self) -> usize {
        self.search.depth()
    }

    pub fn iteration_limit(&self) -> Option<usize> {
        self.iteration_limit
    }

    /// Approximate pi by a fraction whose denominator has `precision` digits.
    ///
    /// The numerator and denominator seed the leading digits of the result.
    /// A denominator longer than `precision` is right-truncated first; one
    /// that already fits at or above `precision` digits ends the search with
    /// no iteration once the ratio is not below 1.
    ///
    /// # Errors
    /// - `InvalidInput` when any input is zero (checked before any float math)
    /// - `IterationLimitExceeded` when the configured guard trips
    pub fn approximate(
        &self,
        numerator: impl Into<BigUint>,
        denominator: impl Into<BigUint>,
        precision: usize,
    ) -> ApproxResult<Fraction> {
        let fraction = Fraction::new(numerator, denominator)?;
        if precision == 0 {
            return Err(ApproxError::InvalidInput(InputField::Precision));
        }

        self.event_handler.on_event(ApproximationEvent::SearchStarted {
            numerator: fraction.numerator().clone(),
            denominator: fraction.denominator().clone(),
            precision,
            algorithm: self.search.name().to_string(),
            timestamp: Utc::now(),
        });

        let (mut current, dropped) = fraction.fit_denominator(precision);
        if dropped > 0 {
            tracing::debug!(
                dropped,
                denominator = %current.denominator(),
                "denominator truncated to precision"
            );
            self.event_handler
                .on_event(ApproximationEvent::DenominatorTruncated {
                    dropped_digits: dropped,
                    denominator: current.denominator().clone(),
                    timestamp: Utc::now(),
                });
        }

        let mut iterations = 0usize;
        loop {
            let regime = current.regime();

            if regime.checks_termination() && current.denominator_digits() >= precision {
                break;
            }

            if let Some(limit) = self.iteration_limit {
                if iterations >= limit {
                    tracing::warn!(limit, fraction = %current, "iteration limit reached");
                    return Err(ApproxError::IterationLimitExceeded { limit });
                }
            }

            current = self.search.next_step(&current, regime)?;
            iterations += 1;

            let error = current.error();
            tracing::debug!(iteration = iterations, %regime, fraction = %current, error, "digit committed");
            self.event_handler
                .on_event(ApproximationEvent::DigitCommitted {
                    iteration: iterations,
                    regime,
                    fraction: current.clone(),
                    error,
                    timestamp: Utc::now(),
                });
        }

        let error = current.error();
        tracing::debug!(
            algorithm = self.search.name(),
            iterations,
            fraction = %current,
            error,
            "approximation complete"
        );
        self.event_handler
            .on_event(ApproximationEvent::SearchCompleted {
                fraction: current.clone(),
                iterations,
                error,
                timestamp: Utc::now(),
            });

        Ok(current)
    }
}
