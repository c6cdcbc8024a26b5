use serde::{Deserialize, Serialize};

use crate::benchmarks::{BenchmarkCatalog, PercentRange, StandardCategory};
use crate::errors::Result;
use crate::population::{TierPartition, DEFAULT_OPEN_TIER_REPRESENTATIVE};
use crate::scenario::Palette;
use crate::session::DEFAULT_REVENUE;

pub const DEFAULT_MAX_CHART_REVENUE: f64 = 500.0;

/// Root configuration structure, read from `.secbudget.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BudgetConfig {
    /// Starting category and revenue for single-organization commands
    #[serde(default)]
    pub defaults: Option<DefaultsConfig>,

    /// Market sizing assumptions
    #[serde(default)]
    pub tam: Option<TamConfig>,

    /// Chart domain and colours
    #[serde(default)]
    pub chart: Option<ChartConfig>,

    /// Extra benchmark categories loaded into every session
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_categories: Vec<CustomCategoryConfig>,

    #[serde(default)]
    pub output: Option<OutputConfig>,
}

impl BudgetConfig {
    pub fn default_category(&self) -> &str {
        self.defaults
            .as_ref()
            .map(|d| d.category.as_str())
            .unwrap_or(StandardCategory::DEFAULT.name())
    }

    pub fn default_revenue(&self) -> f64 {
        self.defaults
            .as_ref()
            .map(|d| d.revenue)
            .unwrap_or(DEFAULT_REVENUE)
    }

    /// External calibration target for the security TAM, in millions.
    /// `None` disables scaling.
    pub fn scaling_target(&self) -> Option<f64> {
        self.tam.as_ref().and_then(|t| t.scaling_target)
    }

    pub fn open_tier_representative(&self) -> f64 {
        self.tam
            .as_ref()
            .map(|t| t.open_tier_representative)
            .unwrap_or(DEFAULT_OPEN_TIER_REPRESENTATIVE)
    }

    pub fn max_chart_revenue(&self) -> f64 {
        self.chart
            .as_ref()
            .map(|c| c.max_revenue)
            .unwrap_or(DEFAULT_MAX_CHART_REVENUE)
    }

    pub fn palette(&self) -> Palette {
        self.chart
            .as_ref()
            .and_then(|c| c.palette.clone())
            .unwrap_or_default()
    }

    pub fn default_format(&self) -> Option<&str> {
        self.output
            .as_ref()
            .and_then(|o| o.default_format.as_deref())
    }

    /// Standard catalog plus the configured custom categories.
    pub fn build_catalog(&self) -> Result<BenchmarkCatalog> {
        let mut catalog = BenchmarkCatalog::standard();
        for custom in &self.custom_categories {
            catalog.add_custom(&custom.name, custom.it, custom.security)?;
        }
        Ok(catalog)
    }

    /// NAICS tiers with the configured open-tier representative.
    pub fn tier_partition(&self) -> Result<TierPartition> {
        TierPartition::naics().with_open_representative(self.open_tier_representative())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_category")]
    pub category: String,

    /// Annual revenue in millions
    #[serde(default = "default_revenue")]
    pub revenue: f64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            category: default_category(),
            revenue: default_revenue(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TamConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scaling_target: Option<f64>,

    /// Revenue (millions) assumed for every entity in the open top tier
    #[serde(default = "default_open_tier_representative")]
    pub open_tier_representative: f64,
}

impl Default for TamConfig {
    fn default() -> Self {
        Self {
            scaling_target: None,
            open_tier_representative: default_open_tier_representative(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default = "default_max_revenue")]
    pub max_revenue: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub palette: Option<Palette>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            max_revenue: default_max_revenue(),
            palette: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomCategoryConfig {
    pub name: String,
    pub it: PercentRange,
    pub security: PercentRange,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub default_format: Option<String>,
}

pub fn default_category() -> String {
    StandardCategory::DEFAULT.name().to_string()
}

pub fn default_revenue() -> f64 {
    DEFAULT_REVENUE
}

pub fn default_open_tier_representative() -> f64 {
    DEFAULT_OPEN_TIER_REPRESENTATIVE
}

pub fn default_max_revenue() -> f64 {
    DEFAULT_MAX_CHART_REVENUE
}
