// ============================================================================
// Engine Module
// Contains the approximation loop and the digit search strategies
// ============================================================================

mod approximator;
mod greedy;
mod lookahead;

pub mod factory;

pub use approximator::Approximator;
pub use factory::{create_from_config, ApproximatorBuilder};
pub use greedy::GreedySearch;
pub use lookahead::LookaheadSearch;
