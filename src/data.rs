//! Reference Dataset
//!
//! The five indicator records the impact model reads its constants from.
//! Each indicator is an explicit typed record holding only the cells that
//! apply to it, so nothing is null-checked at read time.
//!
//! The standard table is built in code. A replacement table can be loaded
//! from a long-format CSV (`indicator,name,unit,parameter,value`) with Polars;
//! every loaded table goes through `validate()` before use.

use polars::prelude::*;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use anyhow::{Context, Result};
use std::path::Path;

use crate::error::{ImpactError, ImpactResult};

/// Greenhouse-gas emissions avoided through fewer international returns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GhgIndicator {
    pub name: String,
    pub unit: String,
    /// tCO₂e emitted shipping one rejected container back
    pub ghg_per_container_tco2e: f64,
    /// Rejection-avoidance % the reference example assumes
    pub reference_rejection_pct: f64,
}

/// Food waste reduction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WasteIndicator {
    pub name: String,
    pub unit: String,
    /// Sugaring loss as % of exported volume (low end)
    pub loss_rate_min_pct: f64,
    /// Sugaring loss as % of exported volume (high end)
    pub loss_rate_max_pct: f64,
    pub reference_volume_tons: f64,
}

/// Economic losses avoided on rejected lots
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EconomicIndicator {
    pub name: String,
    pub unit: String,
    pub reference_volume_tons: f64,
    pub reference_price_usd_per_ton: f64,
}

/// Indirect post-harvest energy savings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyIndicator {
    pub name: String,
    pub unit: String,
    pub savings_pct: f64,
}

/// Indirect technical employment and training
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmploymentIndicator {
    pub name: String,
    pub unit: String,
    pub technician_factor_min: f64,
    pub technician_factor_max: f64,
    pub people_to_train_per_plant: f64,
}

/// Immutable reference table, built once at start-up
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceDataset {
    pub ghg: GhgIndicator,
    pub waste: WasteIndicator,
    pub economic: EconomicIndicator,
    pub energy: EnergyIndicator,
    pub employment: EmploymentIndicator,
}

impl Default for ReferenceDataset {
    fn default() -> Self {
        Self::standard()
    }
}

impl ReferenceDataset {
    /// The technical-sheet values for the microwave anti-sugaring subproject
    pub fn standard() -> Self {
        Self {
            ghg: GhgIndicator {
                name: "GHG avoided from international returns".to_string(),
                unit: "tCO₂e/yr".to_string(),
                ghg_per_container_tco2e: 2.4,
                reference_rejection_pct: 10.0,
            },
            waste: WasteIndicator {
                name: "Food waste reduction".to_string(),
                unit: "t/yr".to_string(),
                loss_rate_min_pct: 5.0,
                loss_rate_max_pct: 10.0,
                reference_volume_tons: 1000.0,
            },
            economic: EconomicIndicator {
                name: "Economic losses avoided on rejected lots".to_string(),
                unit: "USD/yr".to_string(),
                reference_volume_tons: 1000.0,
                reference_price_usd_per_ton: 2800.0,
            },
            energy: EnergyIndicator {
                name: "Indirect energy savings (post-harvest consumption)".to_string(),
                unit: "%".to_string(),
                savings_pct: 10.0,
            },
            employment: EmploymentIndicator {
                name: "New indirect jobs (technicians per plant)".to_string(),
                unit: "technicians".to_string(),
                technician_factor_min: 1.0,
                technician_factor_max: 3.0,
                people_to_train_per_plant: 20.0,
            },
        }
    }

    /// Check the constants the formulas divide by or compare
    ///
    /// `reference_rejection_pct` and the reference volume are divisors, so
    /// zero (or non-finite) values are rejected here rather than in the model.
    pub fn validate(&self) -> ImpactResult<()> {
        let checks: [(&str, f64); 11] = [
            ("ghg.ghg_per_container_tco2e", self.ghg.ghg_per_container_tco2e),
            ("ghg.reference_rejection_pct", self.ghg.reference_rejection_pct),
            ("waste.loss_rate_min_pct", self.waste.loss_rate_min_pct),
            ("waste.loss_rate_max_pct", self.waste.loss_rate_max_pct),
            ("waste.reference_volume_tons", self.waste.reference_volume_tons),
            ("economic.reference_volume_tons", self.economic.reference_volume_tons),
            ("economic.reference_price_usd_per_ton", self.economic.reference_price_usd_per_ton),
            ("energy.savings_pct", self.energy.savings_pct),
            ("employment.technician_factor_min", self.employment.technician_factor_min),
            ("employment.technician_factor_max", self.employment.technician_factor_max),
            ("employment.people_to_train_per_plant", self.employment.people_to_train_per_plant),
        ];

        for (field, value) in checks {
            if !value.is_finite() || value < 0.0 {
                return Err(ImpactError::InvalidDataset(format!(
                    "{} must be a finite non-negative number, got {}",
                    field, value
                )));
            }
        }

        if self.ghg.reference_rejection_pct == 0.0 {
            return Err(ImpactError::InvalidDataset(
                "ghg.reference_rejection_pct must be non-zero (waste factor divisor)".to_string(),
            ));
        }
        if self.waste.reference_volume_tons == 0.0 {
            return Err(ImpactError::InvalidDataset(
                "waste.reference_volume_tons must be non-zero (training scale divisor)".to_string(),
            ));
        }
        if self.waste.loss_rate_min_pct > self.waste.loss_rate_max_pct {
            return Err(ImpactError::InvalidDataset(format!(
                "waste loss range is inverted: {} > {}",
                self.waste.loss_rate_min_pct, self.waste.loss_rate_max_pct
            )));
        }
        if self.employment.technician_factor_min > self.employment.technician_factor_max {
            return Err(ImpactError::InvalidDataset(format!(
                "technician factor range is inverted: {} > {}",
                self.employment.technician_factor_min, self.employment.technician_factor_max
            )));
        }

        Ok(())
    }

    /// Load a reference table from a long-format CSV
    ///
    /// # Columns
    /// * `indicator` - one of `ghg`, `waste`, `economic`, `energy`, `employment`
    /// * `name`, `unit` - display metadata (repeated on every row of an indicator)
    /// * `parameter` - field name of the typed record (e.g. `loss_rate_min_pct`)
    /// * `value` - numeric cell
    ///
    /// Parameters that no record uses are logged and skipped. A parameter
    /// repeated within one indicator is an error.
    pub fn load_csv(path: &Path) -> Result<Self> {
        tracing::info!("Loading reference dataset: {:?}", path);

        let df = CsvReadOptions::default()
            .with_has_header(true)
            .try_into_reader_with_file_path(Some(path.into()))
            .with_context(|| format!("Failed to create CSV reader: {:?}", path))?
            .finish()
            .with_context(|| format!("Failed to load reference dataset: {:?}", path))?;

        let dataset = Self::from_dataframe(&df)?;
        dataset.validate()?;

        tracing::info!("  Indicators: 5 ({} rows)", df.height());
        Ok(dataset)
    }

    /// Map a long-format DataFrame onto the typed records
    pub fn from_dataframe(df: &DataFrame) -> Result<Self> {
        let indicators = df.column("indicator")
            .with_context(|| "Column 'indicator' not found")?
            .str()
            .with_context(|| "Column 'indicator' is not string type")?;
        let names = df.column("name")
            .with_context(|| "Column 'name' not found")?
            .str()
            .with_context(|| "Column 'name' is not string type")?;
        let units = df.column("unit")
            .with_context(|| "Column 'unit' not found")?
            .str()
            .with_context(|| "Column 'unit' is not string type")?;
        let parameters = df.column("parameter")
            .with_context(|| "Column 'parameter' not found")?
            .str()
            .with_context(|| "Column 'parameter' is not string type")?;

        // Integer-only files are inferred as i64
        let values_col = df.column("value")
            .with_context(|| "Column 'value' not found")?
            .cast(&DataType::Float64)
            .with_context(|| "Column 'value' is not numeric")?;
        let values = values_col.f64()?;

        let mut rows: FxHashMap<String, IndicatorRows> = FxHashMap::default();
        for idx in 0..df.height() {
            let (Some(indicator), Some(parameter), Some(value)) =
                (indicators.get(idx), parameters.get(idx), values.get(idx))
            else {
                continue;
            };

            let entry = rows.entry(indicator.trim().to_string()).or_default();
            if entry.name.is_empty() {
                entry.name = names.get(idx).unwrap_or("").to_string();
                entry.unit = units.get(idx).unwrap_or("").to_string();
            }
            let parameter = parameter.trim();
            if entry.params.insert(parameter.to_string(), value).is_some() {
                return Err(ImpactError::InvalidDataset(format!(
                    "parameter '{}' appears more than once for indicator '{}' (row {})",
                    parameter,
                    indicator.trim(),
                    idx + 1
                ))
                .into());
            }
        }

        for key in rows.keys() {
            if !INDICATOR_KEYS.contains(&key.as_str()) {
                return Err(ImpactError::UnknownIndicator(key.clone()).into());
            }
        }

        let ghg = take_indicator(&mut rows, "ghg")?;
        let waste = take_indicator(&mut rows, "waste")?;
        let economic = take_indicator(&mut rows, "economic")?;
        let energy = take_indicator(&mut rows, "energy")?;
        let employment = take_indicator(&mut rows, "employment")?;

        ghg.warn_unused(&["ghg_per_container_tco2e", "reference_rejection_pct"]);
        waste.warn_unused(&["loss_rate_min_pct", "loss_rate_max_pct", "reference_volume_tons"]);
        economic.warn_unused(&["reference_volume_tons", "reference_price_usd_per_ton"]);
        energy.warn_unused(&["savings_pct"]);
        employment.warn_unused(&[
            "technician_factor_min",
            "technician_factor_max",
            "people_to_train_per_plant",
        ]);

        let dataset = ReferenceDataset {
            ghg: GhgIndicator {
                ghg_per_container_tco2e: ghg.require("ghg_per_container_tco2e")?,
                reference_rejection_pct: ghg.require("reference_rejection_pct")?,
                name: ghg.name,
                unit: ghg.unit,
            },
            waste: WasteIndicator {
                loss_rate_min_pct: waste.require("loss_rate_min_pct")?,
                loss_rate_max_pct: waste.require("loss_rate_max_pct")?,
                reference_volume_tons: waste.require("reference_volume_tons")?,
                name: waste.name,
                unit: waste.unit,
            },
            economic: EconomicIndicator {
                reference_volume_tons: economic.require("reference_volume_tons")?,
                reference_price_usd_per_ton: economic.require("reference_price_usd_per_ton")?,
                name: economic.name,
                unit: economic.unit,
            },
            energy: EnergyIndicator {
                savings_pct: energy.require("savings_pct")?,
                name: energy.name,
                unit: energy.unit,
            },
            employment: EmploymentIndicator {
                technician_factor_min: employment.require("technician_factor_min")?,
                technician_factor_max: employment.require("technician_factor_max")?,
                people_to_train_per_plant: employment.require("people_to_train_per_plant")?,
                name: employment.name,
                unit: employment.unit,
            },
        };

        Ok(dataset)
    }
}

const INDICATOR_KEYS: [&str; 5] = ["ghg", "waste", "economic", "energy", "employment"];

/// Cells collected for one indicator while reading the long-format table
#[derive(Debug, Default)]
struct IndicatorRows {
    key: String,
    name: String,
    unit: String,
    params: FxHashMap<String, f64>,
}

impl IndicatorRows {
    fn require(&self, parameter: &str) -> ImpactResult<f64> {
        self.params
            .get(parameter)
            .copied()
            .ok_or_else(|| ImpactError::MissingParameter {
                indicator: self.key.clone(),
                parameter: parameter.to_string(),
            })
    }

    fn warn_unused(&self, known: &[&str]) {
        let mut unused: Vec<&str> = self.params
            .keys()
            .map(|k| k.as_str())
            .filter(|k| !known.contains(k))
            .collect();
        unused.sort_unstable();
        for parameter in unused {
            tracing::warn!("Ignoring unused parameter '{}' for indicator '{}'", parameter, self.key);
        }
    }
}

/// Remove one indicator's cells, failing if the table never mentions it
fn take_indicator(
    rows: &mut FxHashMap<String, IndicatorRows>,
    key: &str,
) -> ImpactResult<IndicatorRows> {
    let mut indicator = rows.remove(key).ok_or_else(|| ImpactError::MissingParameter {
        indicator: key.to_string(),
        parameter: "*".to_string(),
    })?;
    indicator.key = key.to_string();
    Ok(indicator)
}
