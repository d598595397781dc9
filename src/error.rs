//! Error type shared by generators and estimators.
//!
//! Every fallible operation in this crate validates its parameters eagerly
//! and reports failures through [`SimulationError`] before doing any work.
//! There are no retries, partial results, or silent clamping: each operation
//! is a pure function over its inputs, so a failure is local to one call and
//! never corrupts subsequent calls.

/// Error type for invalid generator or estimator parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// Parameters violate an operation's preconditions (non-positive
    /// modulus, mismatched sample/bin counts, malformed transition matrix
    /// rows, and so on).
    InvalidParameter(String),
}

impl std::fmt::Display for SimulationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimulationError::InvalidParameter(msg) => {
                write!(f, "invalid parameter: {msg}")
            }
        }
    }
}

impl std::error::Error for SimulationError {}
