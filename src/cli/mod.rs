// ============================================================================
// Console Shell Module
// Input prompting and result formatting around the core search
// ============================================================================

mod prompt;
mod report;

pub use prompt::{
    is_decimal_digits, prompt_integer, DENOMINATOR_FIELD, NUMERATOR_FIELD, PRECISION_FIELD,
};
pub use report::ApproximationReport;
