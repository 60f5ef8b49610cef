// ============================================================================
// Pi Approximator Library
// Digit-by-digit rational approximation of pi with pluggable search
// ============================================================================

//! # Pi Approximator
//!
//! Builds a fraction `p/q` close to pi one decimal digit at a time, until the
//! denominator reaches a requested number of digits.
//!
//! ## Features
//!
//! - **Arbitrary precision** numerator and denominator (`num-bigint`)
//! - **Pluggable digit search**: single-digit greedy or k-digit lookahead
//! - **Parallel candidate scoring** for large lookahead grids, bit-identical
//!   to the sequential scan
//! - **Event handler seam** for tracing every committed digit
//!
//! ## Example
//!
//! ```rust
//! use pi_approximator::prelude::*;
//! use std::sync::Arc;
//!
//! // One-call greedy search
//! let fraction = approximate(3u32, 1u32, 5).unwrap();
//! assert_eq!(fraction.denominator_digits(), 5);
//!
//! // Configured lookahead search
//! let approximator = ApproximatorBuilder::new()
//!     .lookahead(3)
//!     .build(Arc::new(NoOpEventHandler))
//!     .unwrap();
//!
//! let fraction = approximator.approximate(3u32, 1u32, 5).unwrap();
//! println!("{} (error {:e})", fraction, fraction.error());
//! ```

pub mod cli;
pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;
pub mod scoring;

use std::sync::Arc;

use domain::{ApproximatorConfig, Fraction};
use interfaces::NoOpEventHandler;
use num_bigint::BigUint;
use numeric::ApproxResult;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{ApproximatorConfig, Fraction, Regime, SearchAlgorithmType};
    pub use crate::engine::{
        create_from_config, Approximator, ApproximatorBuilder, GreedySearch, LookaheadSearch,
    };
    pub use crate::interfaces::{
        ApproximationEvent, DigitSearch, EventHandler, LoggingEventHandler, NoOpEventHandler,
        RecordingEventHandler,
    };
    pub use crate::numeric::{ApproxError, ApproxResult, InputField, REFERENCE_PI};
    pub use crate::{approximate, approximate_with_lookahead};
}

/// Greedy approximation of pi with a `precision`-digit denominator.
///
/// # Errors
/// `InvalidInput` when any argument is zero.
pub fn approximate(
    numerator: impl Into<BigUint>,
    denominator: impl Into<BigUint>,
    precision: usize,
) -> ApproxResult<Fraction> {
    engine::create_from_config(ApproximatorConfig::greedy(), Arc::new(NoOpEventHandler))?
        .approximate(numerator, denominator, precision)
}

/// Lookahead approximation of pi scoring `depth` speculative digits per step.
///
/// # Errors
/// `InvalidInput` when any argument is zero, `InvalidConfig` when `depth`
/// is outside `1..=MAX_LOOKAHEAD_DEPTH`.
pub fn approximate_with_lookahead(
    numerator: impl Into<BigUint>,
    denominator: impl Into<BigUint>,
    precision: usize,
    depth: usize,
) -> ApproxResult<Fraction> {
    engine::create_from_config(ApproximatorConfig::lookahead(depth), Arc::new(NoOpEventHandler))?
        .approximate(numerator, denominator, precision)
}
