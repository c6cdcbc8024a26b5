//! Error types for the budget and market-sizing engine.
//!
//! Every engine operation that can violate a contract returns
//! [`Result`], an alias over [`BudgetError`]. Errors are raised at the call
//! that breaks the contract.
//!
//! # Example
//!
//! ```rust
//! use secbudget::benchmarks::BenchmarkCatalog;
//! use secbudget::errors::BudgetError;
//!
//! let catalog = BenchmarkCatalog::standard();
//! let err = catalog.lookup("Space Mining").unwrap_err();
//! assert!(matches!(err, BudgetError::UnknownCategory(_)));
//! assert!(err.is_user_facing());
//! ```

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::population::TierBounds;

/// Which percentage axis of a benchmark entry an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeAxis {
    /// IT spend as a percentage of revenue
    It,
    /// Security spend as a percentage of IT spend
    Security,
}

impl fmt::Display for RangeAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::It => write!(f, "IT"),
            Self::Security => write!(f, "security"),
        }
    }
}

/// Main error type for secbudget operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BudgetError {
    /// Benchmark min/typical/max ordering or bounds violated
    #[error("Invalid {axis} range for category '{category}': {detail}")]
    InvalidRange {
        category: String,
        axis: RangeAxis,
        detail: String,
    },

    /// Category absent from both the standard and custom sets
    #[error("Unknown benchmark category '{0}'")]
    UnknownCategory(String),

    /// Population data references a tier outside the fixed partition
    #[error("Revenue tier {0} is not part of the tier partition")]
    UnknownTier(TierBounds),

    /// Custom category names must be non-empty and distinct from standard ones
    #[error("Invalid category name '{0}'")]
    InvalidCategoryName(String),

    /// Tier bounds leave gaps, overlap, or are not ordered
    #[error("Invalid tier partition: {0}")]
    InvalidPartition(String),

    /// Caller-supplied parameter outside the accepted domain
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration file could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },
}

impl BudgetError {
    pub fn invalid_range(
        category: impl Into<String>,
        axis: RangeAxis,
        detail: impl Into<String>,
    ) -> Self {
        Self::InvalidRange {
            category: category.into(),
            axis,
            detail: detail.into(),
        }
    }

    pub fn unknown_category(name: impl Into<String>) -> Self {
        Self::UnknownCategory(name.into())
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            path: None,
        }
    }

    /// Create a configuration error with path context.
    pub fn config_with_path(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Config {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    /// Errors a presentation layer should turn into a message for the user.
    ///
    /// `UnknownTier` is excluded; a population/partition mismatch is fatal.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Self::UnknownCategory(_)
                | Self::InvalidRange { .. }
                | Self::InvalidCategoryName(_)
                | Self::InvalidInput(_)
        )
    }
}

/// Result type alias using [`BudgetError`]
pub type Result<T> = std::result::Result<T, BudgetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_range_message_names_axis_and_category() {
        let err = BudgetError::invalid_range("Biotech", RangeAxis::Security, "min 9 > typical 8");
        assert_eq!(
            err.to_string(),
            "Invalid security range for category 'Biotech': min 9 > typical 8"
        );
    }

    #[test]
    fn unknown_tier_renders_open_bound() {
        let err = BudgetError::UnknownTier(TierBounds::open(2000.0));
        assert_eq!(
            err.to_string(),
            "Revenue tier [2000, +inf) is not part of the tier partition"
        );
    }

    #[test]
    fn unknown_tier_is_not_user_facing() {
        let err = BudgetError::UnknownTier(TierBounds::new(0.0, 3.0));
        assert!(!err.is_user_facing());
        assert!(BudgetError::unknown_category("x").is_user_facing());
    }

    #[test]
    fn config_error_keeps_path() {
        let err = BudgetError::config_with_path("bad toml", "/tmp/.secbudget.toml");
        match err {
            BudgetError::Config { path, .. } => {
                assert_eq!(path, Some(PathBuf::from("/tmp/.secbudget.toml")))
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
