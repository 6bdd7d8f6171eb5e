//! Impact Model - coordinator for the impact metrics
//!
//! Binds an immutable reference table, the waste formula and the container
//! capacity, and evaluates scenarios against them. Also produces the
//! baseline: the same formulas evaluated at the table's own example inputs.

use serde::{Deserialize, Serialize};

use crate::config::ImpactConfig;
use crate::data::ReferenceDataset;
use crate::error::ImpactResult;
use crate::metrics::{evaluate, Metrics, WasteFormula};
use crate::scenario::ScenarioInput;

/// Baseline values for the three charted metric families
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Baseline {
    pub ghg_tco2e: f64,
    pub waste_tons: f64,
    pub economic_loss_usd: f64,
}

/// Main impact model
#[derive(Debug, Clone)]
pub struct ImpactModel {
    dataset: ReferenceDataset,
    waste_formula: WasteFormula,
    container_capacity_tons: f64,
}

impl ImpactModel {
    /// Build a model from a validated configuration
    pub fn new(config: &ImpactConfig) -> ImpactResult<Self> {
        config.validate()?;

        Ok(Self {
            dataset: config.dataset.clone(),
            waste_formula: config.waste_formula,
            container_capacity_tons: config.container_capacity_tons,
        })
    }

    /// Model over the standard table with default settings
    pub fn standard() -> Self {
        let config = ImpactConfig::default();
        Self {
            dataset: config.dataset,
            waste_formula: config.waste_formula,
            container_capacity_tons: config.container_capacity_tons,
        }
    }

    pub fn dataset(&self) -> &ReferenceDataset {
        &self.dataset
    }

    pub fn waste_formula(&self) -> WasteFormula {
        self.waste_formula
    }

    /// Evaluate one scenario
    pub fn compute(&self, input: &ScenarioInput) -> Metrics {
        let metrics = evaluate(
            &self.dataset,
            self.waste_formula,
            self.container_capacity_tons,
            input.rejection_pct,
            input.volume_tons,
            input.price_per_ton,
        );

        tracing::debug!(
            rejection_pct = input.rejection_pct,
            volume_tons = input.volume_tons,
            price_per_ton = input.price_per_ton,
            ghg = metrics.ghg_avoided_tco2e,
            waste_max = metrics.waste_avoided_max_tons,
            economic = metrics.economic_loss_avoided_usd,
            "computed scenario metrics"
        );

        metrics
    }

    /// Scenario the reference table describes: reference rejection %,
    /// reference volume and reference price
    pub fn reference_scenario(&self) -> ScenarioInput {
        ScenarioInput::raw(
            self.dataset.ghg.reference_rejection_pct,
            self.dataset.waste.reference_volume_tons,
            self.dataset.economic.reference_price_usd_per_ton,
        )
    }

    /// Baseline for the comparison charts
    ///
    /// Depends only on the reference table, never on the current sliders.
    pub fn baseline(&self) -> Baseline {
        let reference = self.reference_scenario();
        let metrics = evaluate(
            &self.dataset,
            self.waste_formula,
            self.container_capacity_tons,
            reference.rejection_pct,
            reference.volume_tons,
            reference.price_per_ton,
        );

        Baseline {
            ghg_tco2e: metrics.ghg_avoided_tco2e,
            waste_tons: metrics.waste_avoided_max_tons,
            economic_loss_usd: metrics.economic_loss_avoided_usd,
        }
    }
}
