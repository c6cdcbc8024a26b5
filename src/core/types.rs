use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{BudgetError, Result};

/// Upper bound accepted for IT spend, as a percentage of revenue.
pub const IT_PERCENT_MAX: f64 = 100.0;

/// Upper bound accepted for security spend, as a percentage of IT spend.
pub const SECURITY_PERCENT_MAX: f64 = 40.0;

/// An (IT %, security %) pair.
///
/// `it_percent` is a share of revenue, `security_percent` is a share of the
/// IT budget, so the security budget is a percentage of a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentPair {
    pub it_percent: f64,
    pub security_percent: f64,
}

impl PercentPair {
    pub const fn new(it_percent: f64, security_percent: f64) -> Self {
        Self {
            it_percent,
            security_percent,
        }
    }

    /// Security spend expressed directly as a percentage of revenue.
    ///
    /// ```rust
    /// # use secbudget::core::PercentPair;
    /// let pair = PercentPair::new(10.0, 20.0);
    /// assert_eq!(pair.effective_rate(), 2.0);
    /// ```
    pub fn effective_rate(&self) -> f64 {
        self.it_percent * self.security_percent / 100.0
    }

    /// Check the pair against the caller-side bounds
    /// (`[0, 100]` for IT, `[0, 40]` for security-of-IT).
    pub fn validate(&self) -> Result<()> {
        check_percent("IT percentage", self.it_percent, IT_PERCENT_MAX)?;
        check_percent(
            "security percentage",
            self.security_percent,
            SECURITY_PERCENT_MAX,
        )
    }
}

impl fmt::Display for PercentPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}% of {}% IT", self.security_percent, self.it_percent)
    }
}

fn check_percent(name: &str, value: f64, max: f64) -> Result<()> {
    if !value.is_finite() || !(0.0..=max).contains(&value) {
        return Err(BudgetError::invalid_input(format!(
            "{name} must be within [0, {max}], got {value}"
        )));
    }
    Ok(())
}

/// A single-point budget derivation. Recomputed on demand from its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetResult {
    pub revenue: f64,
    pub it_percent: f64,
    pub security_percent: f64,
    pub it_budget: f64,
    pub security_budget: f64,
}

impl BudgetResult {
    pub fn percents(&self) -> PercentPair {
        PercentPair::new(self.it_percent, self.security_percent)
    }
}

/// A user-defined trend line drawn alongside the benchmark bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomTrend {
    pub label: String,
    pub percents: PercentPair,
}

impl CustomTrend {
    pub fn new(label: impl Into<String>, percents: PercentPair) -> Self {
        Self {
            label: label.into(),
            percents,
        }
    }
}

/// The plain parameters a presentation layer passes into the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Annual revenue in millions
    pub revenue: f64,
    pub category: String,
    pub it_percent: f64,
    pub security_percent: f64,
    #[serde(default)]
    pub show_bounds: bool,
    #[serde(default)]
    pub custom_trend: Option<CustomTrend>,
}

impl CalculationRequest {
    pub fn percents(&self) -> PercentPair {
        PercentPair::new(self.it_percent, self.security_percent)
    }

    /// Boundary validation: revenue must be positive and the percentages
    /// within their caller-side bands.
    pub fn validate(&self) -> Result<()> {
        if !self.revenue.is_finite() || self.revenue <= 0.0 {
            return Err(BudgetError::invalid_input(format!(
                "revenue must be a positive number, got {}",
                self.revenue
            )));
        }
        self.percents().validate()?;
        if let Some(custom) = &self.custom_trend {
            custom.percents.validate()?;
        }
        Ok(())
    }
}
