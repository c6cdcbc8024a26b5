//! NAICS reference population (business counts by company size, Jan 2024).
//!
//! Source: <https://www.naics.com/business-lists/counts-by-company-size/>

use super::table::{PopulationRow, PopulationTable};
use super::tier::TierPartition;

/// Label used for nationwide rows that carry no sector breakdown.
pub const ALL_INDUSTRIES: &str = "All Industries";

/// Businesses per NAICS annual-sales bracket, aligned with
/// [`TierPartition::naics`].
pub const NATIONAL_TIER_COUNTS: [u64; 9] = [
    13_918_257, // under $500K
    792_624,    // $500K - $1M
    546_969,    // $1M - $2.5M
    222_344,    // $2.5M - $5M
    144_641,    // $5M - $10M
    176_000,    // $10M - $100M
    23_670,     // $100M - $500M
    4_070,      // $500M - $1B
    5_161,      // $1B+
];

/// Records without revenue data.
pub const UNCODED_RECORDS: u64 = 1_935_963;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NaicsSector {
    pub code: &'static str,
    pub name: &'static str,
    /// Shorter names used in some sector listings
    pub aliases: &'static [&'static str],
    /// Entity total across all revenue tiers
    pub entities: u64,
}

pub const NAICS_SECTORS: &[NaicsSector] = &[
    NaicsSector {
        code: "11",
        name: "Agriculture, Forestry, Fishing and Hunting",
        aliases: &[],
        entities: 367_959,
    },
    NaicsSector {
        code: "21",
        name: "Mining, Quarrying, and Oil and Gas Extraction",
        aliases: &["Mining"],
        entities: 33_339,
    },
    NaicsSector {
        code: "22",
        name: "Utilities",
        aliases: &[],
        entities: 52_270,
    },
    NaicsSector {
        code: "23",
        name: "Construction",
        aliases: &[],
        entities: 1_512_763,
    },
    NaicsSector {
        code: "31-33",
        name: "Manufacturing",
        aliases: &[],
        entities: 660_640,
    },
    NaicsSector {
        code: "42",
        name: "Wholesale Trade",
        aliases: &[],
        entities: 698_477,
    },
    NaicsSector {
        code: "44-45",
        name: "Retail Trade",
        aliases: &[],
        entities: 1_870_617,
    },
    NaicsSector {
        code: "48-49",
        name: "Transportation and Warehousing",
        aliases: &[],
        entities: 711_582,
    },
    NaicsSector {
        code: "51",
        name: "Information",
        aliases: &[],
        entities: 370_463,
    },
    NaicsSector {
        code: "52",
        name: "Finance and Insurance",
        aliases: &[],
        entities: 771_419,
    },
    NaicsSector {
        code: "53",
        name: "Real Estate and Rental and Leasing",
        aliases: &["Real Estate Rental and Leasing"],
        entities: 926_476,
    },
    NaicsSector {
        code: "54",
        name: "Professional, Scientific, and Technical Services",
        aliases: &[],
        entities: 2_489_746,
    },
    NaicsSector {
        code: "55",
        name: "Management of Companies and Enterprises",
        aliases: &[],
        entities: 93_116,
    },
    NaicsSector {
        code: "56",
        name: "Administrative and Support Services",
        aliases: &[],
        entities: 1_553_879,
    },
    NaicsSector {
        code: "61",
        name: "Educational Services",
        aliases: &[],
        entities: 430_343,
    },
    NaicsSector {
        code: "62",
        name: "Health Care and Social Assistance",
        aliases: &[],
        entities: 1_695_931,
    },
    NaicsSector {
        code: "71",
        name: "Arts, Entertainment, and Recreation",
        aliases: &[],
        entities: 385_880,
    },
    NaicsSector {
        code: "72",
        name: "Accommodation and Food Services",
        aliases: &[],
        entities: 931_927,
    },
    NaicsSector {
        code: "81",
        name: "Other Services (except Public Administration)",
        aliases: &["Other Services"],
        entities: 1_955_493,
    },
    NaicsSector {
        code: "92",
        name: "Public Administration",
        aliases: &[],
        entities: 256_211,
    },
];

pub fn sector_by_code(code: &str) -> Option<&'static NaicsSector> {
    let code = code.trim();
    NAICS_SECTORS.iter().find(|sector| sector.code == code)
}

/// Nationwide counts as a single-classification table, including the
/// uncoded records.
pub fn national_population() -> PopulationTable {
    let partition = TierPartition::naics();
    partition
        .tiers()
        .iter()
        .zip(NATIONAL_TIER_COUNTS)
        .map(|(tier, count)| PopulationRow::coded(ALL_INDUSTRIES, *tier, count))
        .chain(std::iter::once(PopulationRow::uncoded(
            ALL_INDUSTRIES,
            UNCODED_RECORDS,
        )))
        .collect()
}
