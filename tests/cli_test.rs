//! End-to-end tests of the secbudget binary.

use assert_cmd::prelude::*;
use serde_json::Value;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

/// Binary run from an empty directory so no stray config is picked up.
fn secbudget(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_secbudget"));
    cmd.current_dir(dir.path())
        .env_remove("SECBUDGET_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

fn json_stdout(cmd: &mut Command) -> Value {
    let output = cmd.output().expect("Failed to execute secbudget");
    if !output.status.success() {
        eprintln!("stderr: {}", String::from_utf8_lossy(&output.stderr));
        panic!("secbudget exited with {}", output.status);
    }
    serde_json::from_slice(&output.stdout).expect("Output is not valid JSON")
}

#[test]
fn test_budget_json_output() {
    let dir = TempDir::new().unwrap();
    let json = json_stdout(secbudget(&dir).args([
        "budget",
        "--revenue",
        "100",
        "--it",
        "5.5",
        "--security",
        "9.5",
        "--format",
        "json",
    ]));

    assert_eq!(json["kind"], "budget");
    assert_eq!(json["category"], "Weighted Average");
    let result = &json["summary"]["result"];
    let it_budget = result["it_budget"].as_f64().unwrap();
    let security_budget = result["security_budget"].as_f64().unwrap();
    assert!((it_budget - 5.5).abs() < 1e-9);
    assert!((security_budget - 0.5225).abs() < 1e-9);
}

#[test]
fn test_unknown_category_fails() {
    let dir = TempDir::new().unwrap();
    secbudget(&dir)
        .args(["budget", "--category", "Space Mining"])
        .assert()
        .failure();
}

#[test]
fn test_security_percentage_out_of_range_fails() {
    let dir = TempDir::new().unwrap();
    secbudget(&dir)
        .args(["budget", "--security", "55"])
        .assert()
        .failure();
}

#[test]
fn test_benchmarks_terminal_output() {
    let dir = TempDir::new().unwrap();
    let output = secbudget(&dir).arg("benchmarks").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Financial Services"));
    assert!(stdout.contains("Transportation & Logistics"));
}

#[test]
fn test_scenario_with_saved_calculations() {
    let dir = TempDir::new().unwrap();
    let json = json_stdout(secbudget(&dir).args([
        "scenario",
        "--category",
        "Technology",
        "--saved",
        "8:12",
        "--custom",
        "10:14:Board Target",
        "--table",
        "-f",
        "json",
    ]));

    assert_eq!(json["kind"], "scenario");
    let lines = json["bundle"]["lines"].as_array().unwrap();
    let labels: Vec<_> = lines.iter().map(|l| l["label"].as_str().unwrap()).collect();
    assert!(labels.contains(&"User Calc #1 (12% of 8% IT)"));
    assert!(labels.contains(&"Board Target (14% of 10% IT)"));
    assert_eq!(
        labels.last().copied(),
        Some("User Selection (15% of 11.5% IT)")
    );
    assert!(json["table"]["rows"].as_array().is_some());
}

#[test]
fn test_tam_scaled_to_target() {
    let dir = TempDir::new().unwrap();
    let json = json_stdout(secbudget(&dir).args([
        "tam",
        "--synthesize",
        "sector-totals",
        "--scale-to",
        "180000",
        "--format",
        "json",
    ]));

    assert_eq!(json["kind"], "tam");
    let report = &json["report"];
    assert_eq!(report["scaling"]["status"], "applied");
    let security = report["totals"]["security_budget_tam"].as_f64().unwrap();
    assert!((security - 180_000.0).abs() / 180_000.0 < 1e-9);
    assert_eq!(report["classifications"].as_array().unwrap().len(), 20);
}

#[test]
fn test_tam_classification_filter() {
    let dir = TempDir::new().unwrap();
    let json = json_stdout(secbudget(&dir).args([
        "tam",
        "--synthesize",
        "sector-totals",
        "--classification",
        "52 - Finance and Insurance",
        "--classification",
        "Utilities",
        "--no-scale",
        "--format",
        "json",
    ]));

    let report = &json["report"];
    let rows = report["classifications"].as_array().unwrap();
    let mut names: Vec<_> = rows
        .iter()
        .map(|r| r["classification"].as_str().unwrap())
        .collect();
    names.sort_unstable();
    assert_eq!(names, vec!["Finance and Insurance", "Utilities"]);

    let entities: u64 = rows.iter().map(|r| r["total_entities"].as_u64().unwrap()).sum();
    assert_eq!(report["totals"]["total_entities"].as_u64().unwrap(), entities);
}

#[test]
fn test_tam_from_population_file() {
    let dir = TempDir::new().unwrap();
    let population = dir.path().join("population.json");
    fs::write(
        &population,
        r#"{ "rows": [
            { "classification": "Retail Trade", "low": 0.0, "high": 0.5, "count": 100 },
            { "classification": "Retail Trade", "uncoded": true, "count": 7 }
        ] }"#,
    )
    .unwrap();

    let output = secbudget(&dir)
        .args(["tam", "--population"])
        .arg(&population)
        .args(["--format", "markdown", "--by-tier"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Retail Trade"));
    assert!(stdout.contains("| "));
}

#[test]
fn test_init_refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();
    secbudget(&dir).arg("init").assert().success();
    assert!(dir.path().join(".secbudget.toml").exists());

    secbudget(&dir).arg("init").assert().failure();
    secbudget(&dir).args(["init", "--force"]).assert().success();
}

#[test]
fn test_configured_format_and_output_file() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".secbudget.toml"),
        "[output]\ndefault_format = \"json\"\n",
    )
    .unwrap();
    let out = dir.path().join("budget.json");

    secbudget(&dir)
        .args(["budget", "--output"])
        .arg(&out)
        .assert()
        .success();

    let json: Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(json["kind"], "budget");
}
