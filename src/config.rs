//! Runtime configuration
//!
//! Chart display tables, optionally loaded from a JSON file named by
//! `MEALPLAN_CHART_CONFIG`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::nutrition::{CategoryTable, MacroPalette};

/// Environment variable holding the chart config path
pub const CHART_CONFIG_ENV: &str = "MEALPLAN_CHART_CONFIG";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Display tables for chart data
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default)]
    pub meals: CategoryTable,
    #[serde(default)]
    pub macronutrients: MacroPalette,
}

impl ChartConfig {
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}

/// Get the chart config path from the environment, if set
pub fn chart_config_path() -> Option<PathBuf> {
    std::env::var_os(CHART_CONFIG_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Load the chart config named by the environment, or the built-in tables
pub fn load_chart_config() -> ConfigResult<ChartConfig> {
    match chart_config_path() {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading chart config");
            ChartConfig::load(path)
        }
        None => Ok(ChartConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = ChartConfig::from_json(
            r##"{
                "meals": {
                    "categories": {
                        "ontbijt": { "label": "Ontbijt", "color": "#f59e0b" },
                        "tussendoortje": { "label": "Tussendoortje", "color": "#8b5cf6" }
                    },
                    "default_key": "tussendoortje",
                    "fallback_color": "#000000"
                }
            }"##,
        )
        .unwrap();

        assert_eq!(config.meals.default_key, "tussendoortje");
        assert_eq!(config.meals.style_for("ontbijt").label, "Ontbijt");
        assert_eq!(config.meals.style_for("lunch").color, "#000000");
        assert_eq!(config.macronutrients, MacroPalette::default());
    }

    #[test]
    fn test_category_order_is_preserved() {
        let config = ChartConfig::from_json(
            r##"{ "meals": { "categories": {
                "z": { "label": "Z", "color": "#111111" },
                "a": { "label": "A", "color": "#222222" }
            }, "default_key": "a", "fallback_color": "#333333" } }"##,
        )
        .unwrap();
        let keys: Vec<_> = config.meals.categories.keys().map(String::as_str).collect();
        assert_eq!(keys, ["z", "a"]);
    }

    #[test]
    fn test_invalid_json() {
        let err = ChartConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = ChartConfig::load("/nonexistent/mealplan-chart.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(ChartConfig::from_json("{}").unwrap(), ChartConfig::default());
    }
}
