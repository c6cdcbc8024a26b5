// Test utility module for secbudget integration tests
#![allow(dead_code)]

use secbudget::population::{PopulationRow, PopulationTable, TierBounds, TierPartition};
use std::path::PathBuf;

pub const EPSILON: f64 = 1e-6;

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

/// Relative comparison for market-sized values in the millions.
pub fn assert_close_relative(actual: f64, expected: f64) {
    let scale = expected.abs().max(1.0);
    assert!(
        ((actual - expected) / scale).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

/// Small population over the NAICS tiers: a few coded cells per
/// classification plus uncoded records for one of them.
pub fn sample_population() -> PopulationTable {
    let tiers = TierPartition::naics().tiers().to_vec();
    PopulationTable::from_rows(vec![
        PopulationRow::coded("Retail Trade", tiers[0], 1_200),
        PopulationRow::coded("Retail Trade", tiers[3], 80),
        PopulationRow::coded("Retail Trade", tiers[8], 2),
        PopulationRow::uncoded("Retail Trade", 300),
        PopulationRow::coded("Finance and Insurance", tiers[1], 450),
        PopulationRow::coded("Finance and Insurance", tiers[6], 12),
        PopulationRow::coded("Information", tiers[5], 60),
        PopulationRow::coded("Unmapped Sector", TierBounds::new(0.0, 0.5), 10),
    ])
}

// Helper to create temporary test files
pub fn create_test_file(content: &str, file_name: &str) -> (tempfile::TempDir, PathBuf) {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join(file_name);
    std::fs::write(&file_path, content).expect("Failed to write test file");
    (temp_dir, file_path)
}
