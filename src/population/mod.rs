//! Population data: entity counts by classification and revenue tier.
//!
//! The engine never parses source spreadsheets. Rows come from the NAICS
//! reference data in [`naics`], from [`synthesis`], or from a
//! [`PopulationFile`] prepared by an external loader.

pub mod naics;
mod record;
pub mod synthesis;
mod table;
mod tier;

pub use record::{PopulationFile, PopulationRecord};
pub use table::{EntityTotals, PopulationRow, PopulationTable, TierBucket, TierShare};
pub use tier::{TierBounds, TierPartition, DEFAULT_OPEN_TIER_REPRESENTATIVE};
