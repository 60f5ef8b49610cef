// ============================================================================
// Approximator Configuration
// Search variant selection and loop guards
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Deepest lookahead accepted; an in-range step scores 10^(2k) pairs.
pub const MAX_LOOKAHEAD_DEPTH: usize = 4;

/// Lookahead depth used by the presets
pub const DEFAULT_LOOKAHEAD_DEPTH: usize = 3;

// ============================================================================
// Search Algorithm Type
// ============================================================================

/// Defines which digit search commits the next digit(s)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SearchAlgorithmType {
    /// Single-digit greedy search
    /// Scores 10 candidates (100 pairs when in range) against exact ratios
    Greedy,

    /// k-digit lookahead search
    /// Scores 10^k candidates (10^2k pairs when in range), commits one digit
    Lookahead {
        /// Number of speculative digits appended before scoring (1..=4)
        depth: usize,
        /// Split large candidate grids across scoped threads
        use_parallel: bool,
    },
}

// ============================================================================
// Complete Approximator Configuration
// ============================================================================

/// Configuration for creating an approximator
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ApproximatorConfig {
    /// Digit search variant
    pub search: SearchAlgorithmType,

    /// Optional: Maximum number of committed steps before giving up
    /// None keeps the unbounded loop (termination follows from digit growth)
    pub iteration_limit: Option<usize>,
}

impl ApproximatorConfig {
    /// Create a new configuration with required parameters
    pub fn new(search: SearchAlgorithmType) -> Self {
        Self {
            search,
            iteration_limit: None,
        }
    }

    /// Builder method: Set the iteration guard
    pub fn with_iteration_limit(mut self, limit: usize) -> Self {
        self.iteration_limit = Some(limit);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if let SearchAlgorithmType::Lookahead { depth, .. } = self.search {
            if depth == 0 || depth > MAX_LOOKAHEAD_DEPTH {
                return Err(format!(
                    "Lookahead depth must be between 1 and {}, got {}",
                    MAX_LOOKAHEAD_DEPTH, depth
                ));
            }
        }

        if self.iteration_limit == Some(0) {
            return Err("Iteration limit must be positive".to_string());
        }

        Ok(())
    }
}

impl Default for ApproximatorConfig {
    fn default() -> Self {
        Self::greedy()
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl ApproximatorConfig {
    /// Single-digit greedy search, no iteration guard
    pub fn greedy() -> Self {
        Self::new(SearchAlgorithmType::Greedy)
    }

    /// Sequential lookahead of the given depth
    pub fn lookahead(depth: usize) -> Self {
        Self::new(SearchAlgorithmType::Lookahead {
            depth,
            use_parallel: false,
        })
    }

    /// Depth-3 lookahead with parallel scoring of the candidate grid
    pub fn deep_lookahead() -> Self {
        Self::new(SearchAlgorithmType::Lookahead {
            depth: DEFAULT_LOOKAHEAD_DEPTH,
            use_parallel: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = ApproximatorConfig::new(SearchAlgorithmType::Greedy);

        assert_eq!(config.search, SearchAlgorithmType::Greedy);
        assert_eq!(config.iteration_limit, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = ApproximatorConfig::lookahead(2).with_iteration_limit(64);

        assert_eq!(config.iteration_limit, Some(64));
        assert!(matches!(
            config.search,
            SearchAlgorithmType::Lookahead { depth: 2, .. }
        ));
    }

    #[test]
    fn test_validation() {
        assert!(ApproximatorConfig::lookahead(0).validate().is_err());
        assert!(ApproximatorConfig::lookahead(MAX_LOOKAHEAD_DEPTH + 1)
            .validate()
            .is_err());
        assert!(ApproximatorConfig::lookahead(MAX_LOOKAHEAD_DEPTH)
            .validate()
            .is_ok());
        assert!(ApproximatorConfig::greedy()
            .with_iteration_limit(0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_preset_configs() {
        assert_eq!(ApproximatorConfig::default(), ApproximatorConfig::greedy());

        let deep = ApproximatorConfig::deep_lookahead();
        assert_eq!(
            deep.search,
            SearchAlgorithmType::Lookahead {
                depth: DEFAULT_LOOKAHEAD_DEPTH,
                use_parallel: true
            }
        );
    }
}
