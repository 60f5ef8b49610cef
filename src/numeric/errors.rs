// ============================================================================
// Approximation Errors
// Error types for input validation and the digit search loop
// ============================================================================

use std::fmt;

/// Which caller-supplied value failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputField {
    Numerator,
    Denominator,
    Precision,
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputField::Numerator => write!(f, "numerator"),
            InputField::Denominator => write!(f, "denominator"),
            InputField::Precision => write!(f, "precision"),
        }
    }
}

/// Errors that can occur while computing an approximation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApproxError {
    /// A required positive input was zero
    InvalidInput(InputField),
    /// Configuration rejected by `ApproximatorConfig::validate`
    InvalidConfig(String),
    /// The search loop ran past the configured iteration guard
    IterationLimitExceeded { limit: usize },
    /// A search step produced no candidates to score
    EmptyCandidateGrid,
}

impl fmt::Display for ApproxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApproxError::InvalidInput(InputField::Denominator) => {
                write!(f, "invalid input: denominator must be positive (division by zero)")
            },
            ApproxError::InvalidInput(field) => {
                write!(f, "invalid input: {} must be positive", field)
            },
            ApproxError::InvalidConfig(reason) => write!(f, "invalid configuration: {}", reason),
            ApproxError::IterationLimitExceeded { limit } => {
                write!(f, "search did not terminate within {} iterations", limit)
            },
            ApproxError::EmptyCandidateGrid => write!(f, "no candidates to score"),
        }
    }
}

impl std::error::Error for ApproxError {}

/// Result type alias for approximation operations
pub type ApproxResult<T> = Result<T, ApproxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ApproxError::InvalidInput(InputField::Denominator).to_string(),
            "invalid input: denominator must be positive (division by zero)"
        );
        assert_eq!(
            ApproxError::InvalidInput(InputField::Precision).to_string(),
            "invalid input: precision must be positive"
        );
        assert_eq!(
            ApproxError::IterationLimitExceeded { limit: 7 }.to_string(),
            "search did not terminate within 7 iterations"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            ApproxError::InvalidInput(InputField::Numerator),
            ApproxError::InvalidInput(InputField::Numerator)
        );
        assert_ne!(
            ApproxError::InvalidInput(InputField::Numerator),
            ApproxError::InvalidInput(InputField::Denominator)
        );
    }
}
