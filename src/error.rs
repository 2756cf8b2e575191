use std::error::Error;
use std::fmt;

/// Errors raised by a mining run. Mining is a one-shot batch operation: any of
/// these aborts the whole call, there are no retries or partial results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MiningError {
    /// Rejected before mining starts: empty transaction list, or a threshold
    /// outside its domain.
    Configuration(String),
    /// A rule measure could not be computed (conviction with confidence = 1
    /// under `ConvictionPolicy::Fail`).
    Arithmetic(String),
    /// Malformed record source.
    Input(String),
}

impl fmt::Display for MiningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MiningError::Configuration(msg) => write!(f, "configuration error: {}", msg),
            MiningError::Arithmetic(msg) => write!(f, "arithmetic error: {}", msg),
            MiningError::Input(msg) => write!(f, "input error: {}", msg),
        }
    }
}

impl Error for MiningError {}
