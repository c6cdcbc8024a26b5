use serde::{Deserialize, Serialize};

use crate::core::PercentPair;
use crate::errors::{BudgetError, RangeAxis, Result};

/// A min/typical/max percentage band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentRange {
    pub min: f64,
    pub typical: f64,
    pub max: f64,
}

impl PercentRange {
    pub const fn new(min: f64, typical: f64, max: f64) -> Self {
        Self { min, typical, max }
    }

    /// Enforce `0 <= min <= typical <= max <= 100` with finite values.
    pub fn validate(&self, category: &str, axis: RangeAxis) -> Result<()> {
        let values = [self.min, self.typical, self.max];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(BudgetError::invalid_range(
                category,
                axis,
                "values must be finite",
            ));
        }
        if values.iter().any(|v| !(0.0..=100.0).contains(v)) {
            return Err(BudgetError::invalid_range(
                category,
                axis,
                format!(
                    "values must lie within [0, 100], got {}/{}/{}",
                    self.min, self.typical, self.max
                ),
            ));
        }
        if self.min > self.typical {
            return Err(BudgetError::invalid_range(
                category,
                axis,
                format!("min {} exceeds typical {}", self.min, self.typical),
            ));
        }
        if self.typical > self.max {
            return Err(BudgetError::invalid_range(
                category,
                axis,
                format!("typical {} exceeds max {}", self.typical, self.max),
            ));
        }
        Ok(())
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Benchmark percentages for one industry category.
///
/// Construct through [`BenchmarkEntry::new`] so the ordering invariant
/// holds on both axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkEntry {
    pub category_name: String,
    /// IT spend, percent of revenue
    pub it: PercentRange,
    /// Security spend, percent of IT spend
    pub security: PercentRange,
}

impl BenchmarkEntry {
    pub fn new(
        category_name: impl Into<String>,
        it: PercentRange,
        security: PercentRange,
    ) -> Result<Self> {
        let category_name = category_name.into();
        it.validate(&category_name, RangeAxis::It)?;
        security.validate(&category_name, RangeAxis::Security)?;
        Ok(Self {
            category_name,
            it,
            security,
        })
    }

    pub fn lower(&self) -> PercentPair {
        PercentPair::new(self.it.min, self.security.min)
    }

    pub fn typical(&self) -> PercentPair {
        PercentPair::new(self.it.typical, self.security.typical)
    }

    pub fn upper(&self) -> PercentPair {
        PercentPair::new(self.it.max, self.security.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_min_above_typical() {
        let err = BenchmarkEntry::new(
            "Broken",
            PercentRange::new(5.0, 4.0, 6.0),
            PercentRange::new(1.0, 2.0, 3.0),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            BudgetError::InvalidRange {
                axis: RangeAxis::It,
                ..
            }
        ));
    }

    #[test]
    fn rejects_typical_above_max_on_security_axis() {
        let err = BenchmarkEntry::new(
            "Broken",
            PercentRange::new(1.0, 2.0, 3.0),
            PercentRange::new(5.0, 9.0, 8.0),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            BudgetError::InvalidRange {
                axis: RangeAxis::Security,
                ..
            }
        ));
    }

    #[test]
    fn rejects_percent_outside_zero_to_hundred() {
        let result = BenchmarkEntry::new(
            "Broken",
            PercentRange::new(1.0, 2.0, 130.0),
            PercentRange::new(1.0, 2.0, 3.0),
        );
        assert!(result.is_err());
    }

    #[test]
    fn degenerate_range_is_valid() {
        let entry = BenchmarkEntry::new(
            "Flat",
            PercentRange::new(5.0, 5.0, 5.0),
            PercentRange::new(10.0, 10.0, 10.0),
        )
        .unwrap();
        assert_eq!(entry.lower(), entry.upper());
    }
}
