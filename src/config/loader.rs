use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::BudgetConfig;
use super::validation::validate_config_result;
use crate::errors::{BudgetError, Result};

pub const CONFIG_FILE_NAME: &str = ".secbudget.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Read a config file into a string
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse a TOML string and validate it
pub fn parse_and_validate_config(contents: &str) -> Result<BudgetConfig> {
    let config = toml::from_str::<BudgetConfig>(contents)
        .map_err(|e| BudgetError::config(format!("Failed to parse {CONFIG_FILE_NAME}: {e}")))?;
    validate_config_result(&config, None)?;
    Ok(config)
}

/// Lenient load of a single path: `None` when missing or invalid
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<BudgetConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{} ({}). Using defaults.", e, config_path.display());
            None
        }
    }
}

/// Only log actual errors, not "file not found"
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// `start` and its parents, at most `max_depth` entries
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Find `.secbudget.toml` in the current directory or one of its parents.
///
/// Never fails: unreadable or invalid files are logged and skipped, and
/// defaults are used when nothing usable is found.
pub fn load_config() -> BudgetConfig {
    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            return BudgetConfig::default();
        }
    };
    load_config_from(current)
}

/// Same search as [`load_config`], starting at `start`.
pub fn load_config_from(start: PathBuf) -> BudgetConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            BudgetConfig::default()
        })
}

/// Strict load of an explicit path, for `--config`.
pub fn load_config_from_path_result(path: &Path) -> Result<BudgetConfig> {
    let contents = read_config_file(path).map_err(|e| {
        BudgetError::config_with_path(format!("Failed to read {}: {e}", path.display()), path)
    })?;
    let config = toml::from_str::<BudgetConfig>(&contents).map_err(|e| {
        BudgetError::config_with_path(format!("Failed to parse {}: {e}", path.display()), path)
    })?;
    validate_config_result(&config, Some(path))?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}
