//! Configuration
//!
//! One immutable `ImpactConfig` is built at start-up and handed explicitly to
//! the impact model, the chart builder and the report generator. It is read
//! from a JSON file; any field left out takes its default, and a reference
//! dataset CSV may replace the built-in table.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use anyhow::{Context, Result};

use crate::data::ReferenceDataset;
use crate::error::{ImpactError, ImpactResult};
use crate::metrics::{WasteFormula, CONTAINER_CAPACITY_TONS};

/// RGB triple as stored in JSON (`[240, 128, 128]`)
pub type Rgb = [u8; 3];

/// Rendering parameters shared by every chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    /// Canvas size for a single comparison chart
    pub width_px: u32,
    pub height_px: u32,
    /// Canvas size for the three-panel dashboard
    pub dashboard_width_px: u32,
    pub dashboard_height_px: u32,
    /// Resolution written into the PNG pHYs chunk
    pub dpi: u32,
    /// Whitespace kept around the tight bounding box
    pub tight_padding_px: u32,
    pub font_family: String,
    pub baseline_color: Rgb,
    pub ghg_color: Rgb,
    pub waste_color: Rgb,
    pub economic_color: Rgb,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width_px: 1200,
            height_px: 1050,
            dashboard_width_px: 3000,
            dashboard_height_px: 1050,
            dpi: 300,
            tight_padding_px: 30,
            font_family: "sans-serif".to_string(),
            baseline_color: [240, 128, 128], // light coral
            ghg_color: [135, 206, 235],      // sky blue
            waste_color: [144, 238, 144],    // light green
            economic_color: [135, 206, 235], // sky blue
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImpactConfig {
    /// Inline reference table (ignored when `dataset_csv` is set)
    pub dataset: ReferenceDataset,
    /// Long-format CSV replacing the inline table, relative to the config file
    pub dataset_csv: Option<PathBuf>,
    pub waste_formula: WasteFormula,
    pub container_capacity_tons: f64,
    pub chart_style: ChartStyle,
}

impl Default for ImpactConfig {
    fn default() -> Self {
        Self {
            dataset: ReferenceDataset::standard(),
            dataset_csv: None,
            waste_formula: WasteFormula::default(),
            container_capacity_tons: CONTAINER_CAPACITY_TONS,
            chart_style: ChartStyle::default(),
        }
    }
}

impl ImpactConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        tracing::info!("Loading configuration: {:?}", path);

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let mut config: ImpactConfig = serde_json::from_str(&contents)
            .with_context(|| "Failed to parse config JSON")?;

        if let Some(csv) = &config.dataset_csv {
            let csv_path = match path.parent() {
                Some(dir) if csv.is_relative() => dir.join(csv),
                _ => csv.clone(),
            };
            config.dataset = ReferenceDataset::load_csv(&csv_path)?;
            config.dataset_csv = Some(csv_path);
        }

        config.validate()?;

        tracing::info!("  Waste formula: {:?}", config.waste_formula);
        tracing::info!("  Container capacity: {} t", config.container_capacity_tons);
        Ok(config)
    }

    /// Load from `path` if given, otherwise use the built-in defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => {
                tracing::info!("No config file given - using built-in reference dataset");
                Ok(Self::default())
            }
        }
    }

    /// Validate the dataset plus the settings that feed the formulas
    pub fn validate(&self) -> ImpactResult<()> {
        self.dataset.validate()?;

        if !self.container_capacity_tons.is_finite() || self.container_capacity_tons <= 0.0 {
            return Err(ImpactError::InvalidDataset(format!(
                "container_capacity_tons must be positive, got {}",
                self.container_capacity_tons
            )));
        }
        if self.waste_formula == WasteFormula::DirectPercentage
            && self.dataset.waste.loss_rate_max_pct == 0.0
        {
            return Err(ImpactError::InvalidDataset(
                "direct_percentage waste formula needs a non-zero loss_rate_max_pct".to_string(),
            ));
        }

        let style = &self.chart_style;
        if style.width_px == 0 || style.height_px == 0
            || style.dashboard_width_px == 0 || style.dashboard_height_px == 0
        {
            return Err(ImpactError::InvalidDataset("chart dimensions must be non-zero".to_string()));
        }
        if style.dpi == 0 {
            return Err(ImpactError::InvalidDataset("chart dpi must be non-zero".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ImpactConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.container_capacity_tons, 20.0);
        assert_eq!(config.chart_style.dpi, 300);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: ImpactConfig = serde_json::from_str(
            r#"{ "waste_formula": "direct_percentage", "chart_style": { "dpi": 150 } }"#,
        )
        .unwrap();

        assert_eq!(config.waste_formula, WasteFormula::DirectPercentage);
        assert_eq!(config.chart_style.dpi, 150);
        assert_eq!(config.chart_style.width_px, 1200);
        assert_eq!(config.dataset, ReferenceDataset::standard());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let config = ImpactConfig {
            container_capacity_tons: 0.0,
            ..ImpactConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_direct_formula_needs_loss_max() {
        let mut config = ImpactConfig {
            waste_formula: WasteFormula::DirectPercentage,
            ..ImpactConfig::default()
        };
        config.dataset.waste.loss_rate_min_pct = 0.0;
        config.dataset.waste.loss_rate_max_pct = 0.0;
        assert!(config.validate().is_err());

        config.waste_formula = WasteFormula::ReferenceRatio;
        assert!(config.validate().is_ok());
    }
}
