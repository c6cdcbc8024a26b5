use serde::{Deserialize, Serialize};

use crate::core::PercentPair;

/// A saved (IT %, security %) pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationLogEntry {
    pub it_percentage: f64,
    pub security_percentage: f64,
}

impl CalculationLogEntry {
    pub fn percents(&self) -> PercentPair {
        PercentPair::new(self.it_percentage, self.security_percentage)
    }
}

impl From<PercentPair> for CalculationLogEntry {
    fn from(pair: PercentPair) -> Self {
        Self {
            it_percentage: pair.it_percent,
            security_percentage: pair.security_percent,
        }
    }
}

/// Ordered, append-only list of recorded calculations.
///
/// Entries are never deduplicated or reordered and the log has no cap.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalculationLog {
    entries: Vec<CalculationLogEntry>,
}

impl CalculationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, it_percentage: f64, security_percentage: f64) {
        self.entries.push(CalculationLogEntry {
            it_percentage,
            security_percentage,
        });
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn as_list(&self) -> &[CalculationLogEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CalculationLogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a CalculationLog {
    type Item = &'a CalculationLogEntry;
    type IntoIter = std::slice::Iter<'a, CalculationLogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<PercentPair> for CalculationLog {
    fn extend<T: IntoIterator<Item = PercentPair>>(&mut self, iter: T) {
        self.entries.extend(iter.into_iter().map(CalculationLogEntry::from));
    }
}
