//! Industry benchmark reference data.
//!
//! - [`StandardCategory`]: the seeded, immutable categories
//! - [`BenchmarkCatalog`]: typed lookup over standard and custom entries
//! - [`ClassificationMapping`]: raw sector label to category resolution
//! - [`ClassificationFilter`]: classification subsets for market sizing

mod catalog;
mod classification;
mod entry;
mod standard;

pub use catalog::{BenchmarkCatalog, BenchmarkComparison};
pub use classification::{naics_sector, ClassificationFilter, ClassificationMapping};
pub use entry::{BenchmarkEntry, PercentRange};
pub use standard::StandardCategory;
