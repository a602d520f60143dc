//! Calculator configuration
//!
//! Every field has a default, so a JSON config file only needs the keys it
//! overrides:
//!
//! ```json
//! { "chart": { "output_dir": "charts", "width": 1280 }, "yearly_breakdown": false }
//! ```

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::{Path, PathBuf};

use crate::error::{CalculatorError, Result};

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_width() -> u32 {
    1024
}

fn default_height() -> u32 {
    640
}

fn default_true() -> bool {
    true
}

/// Chart rendering settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSettings {
    /// Directory persisted charts are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Image width in pixels
    #[serde(default = "default_width")]
    pub width: u32,

    /// Image height in pixels
    #[serde(default = "default_height")]
    pub height: u32,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            width: default_width(),
            height: default_height(),
        }
    }
}

/// Settings for an `InvestmentCalculator`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    #[serde(default)]
    pub chart: ChartSettings,

    /// Append a year-by-year table to the detailed report
    #[serde(default = "default_true")]
    pub yearly_breakdown: bool,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            chart: ChartSettings::default(),
            yearly_breakdown: true,
        }
    }
}

impl CalculatorConfig {
    /// Load a config from a JSON file
    pub fn from_json_path(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let config: Self = serde_json::from_reader(file)
            .map_err(|e| CalculatorError::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a config from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| CalculatorError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.chart.width == 0 || self.chart.height == 0 {
            return Err(CalculatorError::Config(format!(
                "chart size must be non-zero, got {}x{}",
                self.chart.width, self.chart.height
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = CalculatorConfig::from_json_str("{}").unwrap();
        assert_eq!(config, CalculatorConfig::default());
        assert_eq!(config.chart.output_dir, PathBuf::from("."));
        assert!(config.yearly_breakdown);
    }

    #[test]
    fn test_partial_override() {
        let config = CalculatorConfig::from_json_str(
            r#"{ "chart": { "output_dir": "charts", "width": 1280 }, "yearly_breakdown": false }"#,
        )
        .unwrap();
        assert_eq!(config.chart.output_dir, PathBuf::from("charts"));
        assert_eq!(config.chart.width, 1280);
        assert_eq!(config.chart.height, 640);
        assert!(!config.yearly_breakdown);
    }

    #[test]
    fn test_rejects_zero_size_and_bad_json() {
        assert!(matches!(
            CalculatorConfig::from_json_str(r#"{ "chart": { "height": 0 } }"#),
            Err(CalculatorError::Config(_))
        ));
        assert!(matches!(
            CalculatorConfig::from_json_str("not json"),
            Err(CalculatorError::Config(_))
        ));
    }

    #[test]
    fn test_from_json_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calc.json");
        std::fs::write(&path, r#"{ "chart": { "width": 800, "height": 400 } }"#).unwrap();

        let config = CalculatorConfig::from_json_path(&path).unwrap();
        assert_eq!((config.chart.width, config.chart.height), (800, 400));

        assert!(matches!(
            CalculatorConfig::from_json_path(&dir.path().join("missing.json")),
            Err(CalculatorError::Io(_))
        ));
    }
}
