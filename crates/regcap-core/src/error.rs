//! Error types for RegCap

use thiserror::Error;

use crate::tier::{CapitalTier, RatioFamily};

/// Main error type for constraint evaluation and model construction
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegCapError {
    /// An input slice or column does not have the length of the reference table
    #[error("Shape mismatch: `{name}` has {actual} entries, expected {expected}")]
    ShapeMismatch {
        name: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The threshold vector has no entry for the requested tier
    #[error("No {tier} minimum configured for {family}")]
    MissingThreshold {
        family: RatioFamily,
        tier: CapitalTier,
    },

    /// A threshold vector with an unsupported number of entries
    #[error("Invalid thresholds: expected 2 to 4 entries, got {0}")]
    InvalidThresholds(usize),

    /// A constraint name that matches none of the twelve constraints
    #[error("Unknown constraint: {0}")]
    UnknownConstraint(String),
}

/// Result type alias for RegCap operations
pub type Result<T> = std::result::Result<T, RegCapError>;
