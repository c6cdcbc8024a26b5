//! Total addressable market aggregation.
//!
//! For every (classification, tier) cell the contribution is
//! `representative_revenue * entity_count`, pushed through
//! [`crate::budget::compute`] with the classification's typical
//! benchmark percentages.

mod aggregate;
mod scaling;

pub use aggregate::{aggregate, TamAggregator, TamReport, TamResult, TamTotals, TierTamResult};
pub use scaling::ScalingOutcome;
