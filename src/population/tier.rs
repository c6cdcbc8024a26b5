use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{BudgetError, Result};

/// Representative revenue (millions) for the open-ended top tier.
///
/// A conservative policy value, not derived from the tier bounds.
pub const DEFAULT_OPEN_TIER_REPRESENTATIVE: f64 = 1500.0;

/// Tolerance when matching population tier bounds against the partition.
const BOUND_EPSILON: f64 = 1e-9;

/// Half-open revenue interval `[low, high)` in millions; `high = None` is
/// unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierBounds {
    pub low: f64,
    pub high: Option<f64>,
}

impl TierBounds {
    pub const fn new(low: f64, high: f64) -> Self {
        Self {
            low,
            high: Some(high),
        }
    }

    pub const fn open(low: f64) -> Self {
        Self { low, high: None }
    }

    pub fn is_open(&self) -> bool {
        self.high.is_none()
    }

    pub fn contains(&self, revenue: f64) -> bool {
        revenue >= self.low && self.high.is_none_or(|high| revenue < high)
    }

    fn matches(&self, other: &TierBounds) -> bool {
        let low_eq = (self.low - other.low).abs() < BOUND_EPSILON;
        let high_eq = match (self.high, other.high) {
            (Some(a), Some(b)) => (a - b).abs() < BOUND_EPSILON,
            (None, None) => true,
            _ => false,
        };
        low_eq && high_eq
    }

    /// Display label in the style `$0.5M - $1M`, `$1.0B+`.
    pub fn label(&self) -> String {
        match self.high {
            Some(high) => format!("{} - {}", money_label(self.low), money_label(high)),
            None => format!("{}+", money_label(self.low)),
        }
    }
}

impl fmt::Display for TierBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.high {
            Some(high) => write!(f, "[{}, {})", self.low, high),
            None => write!(f, "[{}, +inf)", self.low),
        }
    }
}

fn money_label(millions: f64) -> String {
    if millions >= 1000.0 {
        format!("${:.1}B", millions / 1000.0)
    } else {
        format!("${millions}M")
    }
}

/// An ordered set of tiers covering `[first.low, +inf)` with no gaps or
/// overlaps. Only the last tier may be open-ended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTierPartition")]
pub struct TierPartition {
    tiers: Vec<TierBounds>,
    open_representative: f64,
}

/// Unvalidated deserialization form of [`TierPartition`].
#[derive(Deserialize)]
struct RawTierPartition {
    tiers: Vec<TierBounds>,
    open_representative: f64,
}

impl TryFrom<RawTierPartition> for TierPartition {
    type Error = BudgetError;

    fn try_from(raw: RawTierPartition) -> Result<Self> {
        Self::new(raw.tiers, raw.open_representative)
    }
}

impl TierPartition {
    /// The NAICS annual-sales brackets used for business counts.
    pub fn naics() -> Self {
        Self {
            tiers: vec![
                TierBounds::new(0.0, 0.5),
                TierBounds::new(0.5, 1.0),
                TierBounds::new(1.0, 2.5),
                TierBounds::new(2.5, 5.0),
                TierBounds::new(5.0, 10.0),
                TierBounds::new(10.0, 100.0),
                TierBounds::new(100.0, 500.0),
                TierBounds::new(500.0, 1000.0),
                TierBounds::open(1000.0),
            ],
            open_representative: DEFAULT_OPEN_TIER_REPRESENTATIVE,
        }
    }

    pub fn new(tiers: Vec<TierBounds>, open_representative: f64) -> Result<Self> {
        let partition = Self {
            tiers,
            open_representative,
        };
        partition.validate()?;
        Ok(partition)
    }

    /// Same tiers with a different open-tier representative value.
    pub fn with_open_representative(mut self, value: f64) -> Result<Self> {
        self.open_representative = value;
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<()> {
        let Some(first) = self.tiers.first() else {
            return Err(BudgetError::InvalidPartition(
                "at least one tier is required".into(),
            ));
        };
        if !first.low.is_finite() || first.low < 0.0 {
            return Err(BudgetError::InvalidPartition(format!(
                "first tier must start at a non-negative revenue, got {}",
                first.low
            )));
        }
        for pair in self.tiers.windows(2) {
            let (current, next) = (&pair[0], &pair[1]);
            let Some(high) = current.high else {
                return Err(BudgetError::InvalidPartition(format!(
                    "only the last tier may be open-ended, {current} is not last"
                )));
            };
            if (high - next.low).abs() >= BOUND_EPSILON {
                return Err(BudgetError::InvalidPartition(format!(
                    "{current} and {next} leave a gap or overlap"
                )));
            }
        }
        for tier in &self.tiers {
            if let Some(high) = tier.high {
                if !high.is_finite() || high <= tier.low {
                    return Err(BudgetError::InvalidPartition(format!(
                        "{tier} is empty or unbounded"
                    )));
                }
            }
        }
        if let Some(last) = self.tiers.last().filter(|t| t.is_open()) {
            if !self.open_representative.is_finite() || self.open_representative < last.low {
                return Err(BudgetError::InvalidPartition(format!(
                    "open tier representative {} must be at least {}",
                    self.open_representative, last.low
                )));
            }
        }
        Ok(())
    }

    pub fn tiers(&self) -> &[TierBounds] {
        &self.tiers
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    pub fn open_representative(&self) -> f64 {
        self.open_representative
    }

    /// Position of `bounds` in the partition, or `UnknownTier`.
    pub fn index_of(&self, bounds: &TierBounds) -> Result<usize> {
        self.tiers
            .iter()
            .position(|tier| tier.matches(bounds))
            .ok_or(BudgetError::UnknownTier(*bounds))
    }

    pub fn tier_for_revenue(&self, revenue: f64) -> Option<usize> {
        self.tiers.iter().position(|tier| tier.contains(revenue))
    }

    /// Midpoint of a bounded tier, the policy value for the open tier.
    pub fn representative_revenue(&self, index: usize) -> Option<f64> {
        self.tiers.get(index).map(|tier| match tier.high {
            Some(high) => (tier.low + high) / 2.0,
            None => self.open_representative,
        })
    }
}

impl Default for TierPartition {
    fn default() -> Self {
        Self::naics()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn naics_partition_is_valid() {
        let partition = TierPartition::naics();
        assert!(partition.validate().is_ok());
        assert_eq!(partition.len(), 9);
    }

    #[test]
    fn representative_is_midpoint_or_policy_value() {
        let partition = TierPartition::naics();
        assert_eq!(partition.representative_revenue(0), Some(0.25));
        assert_eq!(partition.representative_revenue(5), Some(55.0));
        assert_eq!(partition.representative_revenue(8), Some(1500.0));
        assert_eq!(partition.representative_revenue(9), None);
    }

    #[test]
    fn tiers_are_half_open() {
        let partition = TierPartition::naics();
        assert_eq!(partition.tier_for_revenue(0.0), Some(0));
        assert_eq!(partition.tier_for_revenue(0.5), Some(1));
        assert_eq!(partition.tier_for_revenue(999.99), Some(7));
        assert_eq!(partition.tier_for_revenue(1.0e6), Some(8));
        assert_eq!(partition.tier_for_revenue(-1.0), None);
    }

    #[test]
    fn unknown_bounds_are_rejected() {
        let partition = TierPartition::naics();
        assert_eq!(
            partition.index_of(&TierBounds::new(0.0, 50.0)),
            Err(BudgetError::UnknownTier(TierBounds::new(0.0, 50.0)))
        );
        assert_eq!(partition.index_of(&TierBounds::open(1000.0)), Ok(8));
        assert!(partition.index_of(&TierBounds::new(1000.0, 2000.0)).is_err());
    }

    #[test]
    fn gaps_and_overlaps_are_invalid() {
        let gap = TierPartition::new(
            vec![TierBounds::new(0.0, 1.0), TierBounds::open(2.0)],
            10.0,
        );
        assert!(matches!(gap, Err(BudgetError::InvalidPartition(_))));

        let open_middle = TierPartition::new(
            vec![TierBounds::open(0.0), TierBounds::open(1.0)],
            10.0,
        );
        assert!(open_middle.is_err());

        let empty = TierPartition::new(vec![], 10.0);
        assert!(empty.is_err());
    }

    #[test]
    fn open_representative_must_sit_inside_open_tier() {
        assert!(TierPartition::naics().with_open_representative(500.0).is_err());
        assert!(TierPartition::naics().with_open_representative(2000.0).is_ok());
    }

    #[test]
    fn labels_switch_to_billions() {
        assert_eq!(TierBounds::new(0.5, 1.0).label(), "$0.5M - $1M");
        assert_eq!(TierBounds::new(500.0, 1000.0).label(), "$500M - $1.0B");
        assert_eq!(TierBounds::open(1000.0).label(), "$1.0B+");
    }

    #[test]
    fn deserialization_validates_the_partition() {
        let json = serde_json::to_string(&TierPartition::naics()).unwrap();
        let parsed: TierPartition = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, TierPartition::naics());

        let overlapping = r#"{
            "tiers": [ { "low": 0.0, "high": 2.0 }, { "low": 1.0, "high": null } ],
            "open_representative": 1500.0
        }"#;
        let err = serde_json::from_str::<TierPartition>(overlapping).unwrap_err();
        assert!(err.to_string().contains("gap or overlap"), "{err}");

        let empty = r#"{ "tiers": [], "open_representative": 1500.0 }"#;
        assert!(serde_json::from_str::<TierPartition>(empty).is_err());
    }
}
