//! Error types for rule configuration.

use thiserror::Error;

/// Result type for rule parsing.
pub type RuleResult<T> = Result<T, RuleError>;

/// Errors raised while building typed rules from raw configuration.
///
/// Validation itself never errors; invalid values degrade to `false`. Only
/// the configuration surface is fallible.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuleError {
    /// The rule name is not part of the closed rule set
    #[error("unknown rule: {0}")]
    UnknownRule(String),

    /// The parameter has the wrong type for the rule
    #[error("invalid parameter for rule '{rule}': expected {expected}")]
    InvalidParameter {
        rule: String,
        expected: &'static str,
    },
}
