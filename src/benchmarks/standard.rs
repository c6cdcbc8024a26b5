//! Seeded industry benchmarks.
//!
//! IT spend is a percentage of revenue, security spend a percentage of IT
//! spend. Figures compiled from Gartner, IDC, Deloitte and Flexera surveys.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::entry::{BenchmarkEntry, PercentRange};

/// The immutable categories every catalog starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StandardCategory {
    WeightedAverage,
    FinancialServices,
    Healthcare,
    Retail,
    Technology,
    Manufacturing,
    GovernmentPublicSector,
    Education,
    EnergyUtilities,
    TransportationLogistics,
}

impl StandardCategory {
    /// Declaration order; catalogs store standard entries in this order.
    pub const ALL: [StandardCategory; 10] = [
        Self::WeightedAverage,
        Self::FinancialServices,
        Self::Healthcare,
        Self::Retail,
        Self::Technology,
        Self::Manufacturing,
        Self::GovernmentPublicSector,
        Self::Education,
        Self::EnergyUtilities,
        Self::TransportationLogistics,
    ];

    /// Fallback category for classifications without an explicit mapping.
    pub const DEFAULT: StandardCategory = Self::WeightedAverage;

    pub fn name(self) -> &'static str {
        match self {
            Self::WeightedAverage => "Weighted Average",
            Self::FinancialServices => "Financial Services",
            Self::Healthcare => "Healthcare",
            Self::Retail => "Retail",
            Self::Technology => "Technology",
            Self::Manufacturing => "Manufacturing",
            Self::GovernmentPublicSector => "Government/Public Sector",
            Self::Education => "Education",
            Self::EnergyUtilities => "Energy & Utilities",
            Self::TransportationLogistics => "Transportation & Logistics",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// (IT range, security range)
    fn ranges(self) -> (PercentRange, PercentRange) {
        match self {
            Self::WeightedAverage => (
                PercentRange::new(4.0, 5.5, 7.0),
                PercentRange::new(7.0, 9.5, 12.0),
            ),
            Self::FinancialServices => (
                PercentRange::new(7.0, 9.0, 11.0),
                PercentRange::new(10.0, 12.5, 15.0),
            ),
            Self::Healthcare => (
                PercentRange::new(4.0, 5.0, 6.0),
                PercentRange::new(7.0, 8.5, 10.0),
            ),
            Self::Retail => (
                PercentRange::new(2.0, 3.0, 4.0),
                PercentRange::new(5.0, 6.5, 8.0),
            ),
            Self::Technology => (
                PercentRange::new(8.0, 11.5, 15.0),
                PercentRange::new(10.0, 15.0, 20.0),
            ),
            Self::Manufacturing => (
                PercentRange::new(2.0, 3.0, 4.0),
                PercentRange::new(5.0, 7.5, 10.0),
            ),
            Self::GovernmentPublicSector => (
                PercentRange::new(5.0, 6.5, 8.0),
                PercentRange::new(8.0, 10.0, 12.0),
            ),
            Self::Education => (
                PercentRange::new(3.0, 4.5, 6.0),
                PercentRange::new(5.0, 6.5, 8.0),
            ),
            Self::EnergyUtilities => (
                PercentRange::new(3.0, 4.0, 5.0),
                PercentRange::new(6.0, 8.0, 10.0),
            ),
            Self::TransportationLogistics => (
                PercentRange::new(2.0, 3.5, 5.0),
                PercentRange::new(5.0, 6.5, 8.0),
            ),
        }
    }

    /// Seeded entry. The seed values satisfy the range invariant, which
    /// `standard_entries_are_valid` checks.
    pub fn entry(self) -> BenchmarkEntry {
        let (it, security) = self.ranges();
        BenchmarkEntry {
            category_name: self.name().to_string(),
            it,
            security,
        }
    }
}

impl fmt::Display for StandardCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::RangeAxis;

    #[test]
    fn standard_entries_are_valid() {
        for category in StandardCategory::ALL {
            let entry = category.entry();
            entry.it.validate(category.name(), RangeAxis::It).unwrap();
            entry
                .security
                .validate(category.name(), RangeAxis::Security)
                .unwrap();
        }
    }

    #[test]
    fn index_matches_declaration_order() {
        for (position, category) in StandardCategory::ALL.iter().enumerate() {
            assert_eq!(category.index(), position);
        }
    }

    #[test]
    fn names_round_trip() {
        for category in StandardCategory::ALL {
            assert_eq!(StandardCategory::from_name(category.name()), Some(category));
        }
        assert_eq!(StandardCategory::from_name("Custom"), None);
    }

    #[test]
    fn technology_typical_values() {
        let entry = StandardCategory::Technology.entry();
        assert_eq!(entry.it.typical, 11.5);
        assert_eq!(entry.security.typical, 15.0);
    }
}
