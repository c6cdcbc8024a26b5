use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG: &str = r#"# secbudget configuration

[defaults]
category = "Weighted Average"
revenue = 100.0                      # annual revenue, millions

[tam]
# Normalize the aggregate security TAM to an external estimate (millions).
# scaling_target = 180000.0
open_tier_representative = 1500.0    # revenue assumed for the $1B+ tier

[chart]
max_revenue = 500.0

# [[custom_categories]]
# name = "Biotech"
# it = { min = 4.0, typical = 6.0, max = 9.0 }
# security = { min = 8.0, typical = 11.0, max = 14.0 }

[output]
default_format = "terminal"
"#;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    write_default_config(&config_path, force)?;
    println!("Created {CONFIG_FILE_NAME} configuration file");
    Ok(())
}

pub fn write_default_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }
    io::write_file(config_path, DEFAULT_CONFIG)
}
