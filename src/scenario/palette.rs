use serde::{Deserialize, Serialize};

/// Colours attached to generated series. Presentation metadata only; the
/// numeric content of a bundle never depends on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub user_selection: String,
    pub bars: [String; 4],
    pub lower_bound: String,
    pub typical: String,
    pub upper_bound: String,
    pub custom_trend: String,
    /// Cycled through for saved calculations
    pub user_calculations: Vec<String>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            user_selection: "#FF5733".into(),
            bars: [
                "#008581".into(),
                "#4C9C8B".into(),
                "#96E4B0".into(),
                "#FFDAE8".into(),
            ],
            lower_bound: "#008581".into(),
            typical: "#96E4B0".into(),
            upper_bound: "#E4509A".into(),
            custom_trend: "#9467BD".into(),
            user_calculations: ["#FFC300", "#C70039", "#900C3F", "#581845", "#2874A6"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl Palette {
    pub fn user_calculation(&self, index: usize) -> &str {
        if self.user_calculations.is_empty() {
            return &self.user_selection;
        }
        &self.user_calculations[index % self.user_calculations.len()]
    }
}
