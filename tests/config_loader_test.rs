use indoc::indoc;
use secbudget::config::{
    load_config_from, load_config_from_path_result, parse_and_validate_config, validate_config,
    BudgetConfig, CONFIG_FILE_NAME,
};
use secbudget::errors::BudgetError;
use std::fs;
use tempfile::TempDir;

const CUSTOM_CONFIG: &str = indoc! {r##"
    [defaults]
    category = "Biotech"
    revenue = 250.0

    [tam]
    scaling_target = 180000.0
    open_tier_representative = 2500.0

    [chart]
    max_revenue = 1000.0

    [chart.palette]
    user_selection = "#000000"

    [[custom_categories]]
    name = "Biotech"
    it = { min = 4.0, typical = 6.0, max = 9.0 }
    security = { min = 8.0, typical = 11.0, max = 14.0 }

    [output]
    default_format = "markdown"
"##};

#[test]
fn test_config_found_in_parent_directory() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(CONFIG_FILE_NAME), CUSTOM_CONFIG).unwrap();
    let nested = temp_dir.path().join("reports").join("2026");
    fs::create_dir_all(&nested).unwrap();

    let config = load_config_from(nested);
    assert_eq!(config.default_category(), "Biotech");
    assert_eq!(config.default_revenue(), 250.0);
    assert_eq!(config.scaling_target(), Some(180_000.0));
    assert_eq!(config.max_chart_revenue(), 1000.0);
    assert_eq!(config.default_format(), Some("markdown"));

    let palette = config.palette();
    assert_eq!(palette.user_selection, "#000000");
    assert_eq!(palette.custom_trend, "#9467BD");

    let catalog = config.build_catalog().unwrap();
    assert!(catalog.is_custom("Biotech"));
    let partition = config.tier_partition().unwrap();
    assert_eq!(partition.open_representative(), 2500.0);
}

#[test]
fn test_invalid_config_falls_back_to_defaults() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(CONFIG_FILE_NAME),
        "[defaults]\ncategory = \"Space Mining\"\n",
    )
    .unwrap();

    let config = load_config_from(temp_dir.path().to_path_buf());
    assert_eq!(config.default_category(), "Weighted Average");
    assert!(config.custom_categories.is_empty());
}

#[test]
fn test_explicit_path_reports_every_issue() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("budget.toml");
    fs::write(
        &path,
        indoc! {r#"
            [defaults]
            revenue = -5.0

            [tam]
            scaling_target = -1.0

            [output]
            default_format = "html"
        "#},
    )
    .unwrap();

    let err = load_config_from_path_result(&path).unwrap_err();
    let BudgetError::Config { message, path: err_path } = &err else {
        panic!("expected config error, got {err:?}");
    };
    assert_eq!(err_path.as_deref(), Some(path.as_path()));
    assert!(message.contains("defaults.revenue"));
    assert!(message.contains("tam.scaling_target"));
    assert!(message.contains("output.default_format"));
}

#[test]
fn test_explicit_missing_path_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let result = load_config_from_path_result(&temp_dir.path().join("missing.toml"));
    assert!(matches!(result, Err(BudgetError::Config { .. })));
}

#[test]
fn test_custom_category_with_broken_range_is_flagged() {
    let config: BudgetConfig = toml::from_str(indoc! {r#"
        [[custom_categories]]
        name = "Retail"
        it = { min = 2.0, typical = 3.0, max = 4.0 }
        security = { min = 5.0, typical = 6.0, max = 7.0 }

        [[custom_categories]]
        name = "Backwards"
        it = { min = 9.0, typical = 3.0, max = 4.0 }
        security = { min = 5.0, typical = 6.0, max = 7.0 }
    "#})
    .unwrap();

    let issues = validate_config(&config);
    let fields: Vec<_> = issues.iter().map(|i| i.field.as_str()).collect();
    assert_eq!(fields, vec!["custom_categories[0]", "custom_categories[1]"]);
    assert!(parse_and_validate_config("[chart]\nmax_revenue = 10.0\n").is_err());
}
