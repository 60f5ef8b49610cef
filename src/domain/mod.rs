// ============================================================================
// Domain Models Module
// Contains the fraction being built, its regime and the approximator config
// ============================================================================

pub mod config;
pub mod fraction;
pub mod regime;

pub use config::{
    ApproximatorConfig, SearchAlgorithmType, DEFAULT_LOOKAHEAD_DEPTH, MAX_LOOKAHEAD_DEPTH,
};
pub use fraction::Fraction;
pub use regime::Regime;
