// ============================================================================
// Approximator Factory
// Creates approximators with proper configuration
// ============================================================================

use crate::domain::config::{ApproximatorConfig, SearchAlgorithmType};
use crate::engine::{Approximator, GreedySearch, LookaheadSearch};
use crate::interfaces::{DigitSearch, EventHandler};
use crate::numeric::{ApproxError, ApproxResult};
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates an approximator from configuration
///
/// # Arguments
/// * `config` - Approximator configuration
/// * `event_handler` - Event handler for search events
///
/// # Returns
/// * `ApproxResult<Approximator>` - Configured approximator or `InvalidConfig`
///
/// # Example
/// ```
/// use pi_approximator::prelude::*;
/// use std::sync::Arc;
///
/// let config = ApproximatorConfig::lookahead(2);
/// let approximator = create_from_config(config, Arc::new(NoOpEventHandler)).unwrap();
/// let fraction = approximator.approximate(3u32, 1u32, 5).unwrap();
/// assert_eq!(fraction.denominator_digits(), 5);
/// ```
pub fn create_from_config(
    config: ApproximatorConfig,
    event_handler: Arc<dyn EventHandler>,
) -> ApproxResult<Approximator> {
    // Validate configuration first
    config.validate().map_err(ApproxError::InvalidConfig)?;

    let search = create_digit_search(&config.search);

    Ok(Approximator::new(search, event_handler).with_iteration_limit(config.iteration_limit))
}

/// Creates the appropriate digit search from configuration
fn create_digit_search(search_type: &SearchAlgorithmType) -> Box<dyn DigitSearch> {
    match search_type {
        SearchAlgorithmType::Greedy => Box::new(GreedySearch::new()),

        SearchAlgorithmType::Lookahead {
            depth,
            use_parallel,
        } => Box::new(LookaheadSearch::new(*depth, *use_parallel)),
    }
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating approximators with fluent API
///
/// # Example
/// ```
/// use pi_approximator::prelude::*;
/// use std::sync::Arc;
///
/// let approximator = ApproximatorBuilder::new()
///     .lookahead(3)
///     .with_iteration_limit(1_000)
///     .build(Arc::new(NoOpEventHandler))
///     .unwrap();
///
/// assert_eq!(approximator.depth(), 3);
/// ```
pub struct ApproximatorBuilder {
    config: ApproximatorConfig,
}

impl ApproximatorBuilder {
    /// Create a new builder (greedy search, no iteration guard)
    pub fn new() -> Self {
        Self {
            config: ApproximatorConfig::greedy(),
        }
    }

    // ========================================================================
    // Search Configuration
    // ========================================================================

    /// Configure the single-digit greedy search
    pub fn greedy(mut self) -> Self {
        self.config.search = SearchAlgorithmType::Greedy;
        self
    }

    /// Configure a sequential lookahead search
    pub fn lookahead(mut self, depth: usize) -> Self {
        self.config.search = SearchAlgorithmType::Lookahead {
            depth,
            use_parallel: false,
        };
        self
    }

    /// Configure a lookahead search scoring its grid on several threads
    pub fn parallel_lookahead(mut self, depth: usize) -> Self {
        self.config.search = SearchAlgorithmType::Lookahead {
            depth,
            use_parallel: true,
        };
        self
    }

    // ========================================================================
    // Additional Configuration
    // ========================================================================

    /// Set the iteration guard
    pub fn with_iteration_limit(mut self, limit: usize) -> Self {
        self.config.iteration_limit = Some(limit);
        self
    }

    // ========================================================================
    // Preset Configurations
    // ========================================================================

    /// Start from an existing configuration
    pub fn from_config(config: ApproximatorConfig) -> Self {
        Self { config }
    }

    /// Apply the depth-3 parallel lookahead preset
    pub fn deep_lookahead() -> Self {
        Self {
            config: ApproximatorConfig::deep_lookahead(),
        }
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the approximator
    pub fn build(self, event_handler: Arc<dyn EventHandler>) -> ApproxResult<Approximator> {
        create_from_config(self.config, event_handler)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &ApproximatorConfig {
        &self.config
    }
}

impl Default for ApproximatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::NoOpEventHandler;

    #[test]
    fn test_create_greedy_approximator() {
        let approximator =
            create_from_config(ApproximatorConfig::greedy(), Arc::new(NoOpEventHandler)).unwrap();
        assert_eq!(approximator.algorithm_name(), "Greedy");
    }

    #[test]
    fn test_create_lookahead_approximator() {
        let approximator =
            create_from_config(ApproximatorConfig::lookahead(2), Arc::new(NoOpEventHandler))
                .unwrap();
        assert_eq!(approximator.algorithm_name(), "Lookahead-2-Sequential");
        assert_eq!(approximator.depth(), 2);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result =
            create_from_config(ApproximatorConfig::lookahead(9), Arc::new(NoOpEventHandler));
        assert!(matches!(result, Err(ApproxError::InvalidConfig(_))));
    }

    #[test]
    fn test_builder_pattern() {
        let approximator = ApproximatorBuilder::new()
            .lookahead(3)
            .with_iteration_limit(50)
            .build(Arc::new(NoOpEventHandler))
            .unwrap();

        assert_eq!(approximator.depth(), 3);
        assert_eq!(approximator.iteration_limit(), Some(50));
    }

    #[test]
    fn test_builder_switches_back_to_greedy() {
        let builder = ApproximatorBuilder::new().parallel_lookahead(2).greedy();
        assert_eq!(builder.get_config().search, SearchAlgorithmType::Greedy);
    }

    #[test]
    fn test_preset_builders() {
        let deep = ApproximatorBuilder::deep_lookahead();
        assert_eq!(deep.get_config(), &ApproximatorConfig::deep_lookahead());

        let approximator = deep.build(Arc::new(NoOpEventHandler)).unwrap();
        assert_eq!(approximator.depth(), 3);

        let from = ApproximatorBuilder::from_config(ApproximatorConfig::lookahead(1));
        assert!(from.build(Arc::new(NoOpEventHandler)).is_ok());
    }
}
