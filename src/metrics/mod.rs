//! Impact metric modules
//!
//! Each indicator family is calculated in its own module. `compute_metrics`
//! is the one-call entry point over the standard reference table; the
//! configurable path goes through `ImpactModel`.

pub mod ghg;
pub mod waste;
pub mod economic;
pub mod workforce;

// Re-export metric functions
pub use ghg::{calculate_ghg_avoided, containers_avoided, CONTAINER_CAPACITY_TONS};
pub use waste::{calculate_waste_avoided, waste_factor, WasteFormula, WasteRange};
pub use economic::calculate_economic_loss_avoided;
pub use workforce::{energy_savings_pct, technicians_range, training_headcount};

use serde::{Deserialize, Serialize};

use crate::data::ReferenceDataset;

/// The six derived impact metrics for one scenario
///
/// `waste_factor` is carried alongside the waste range because the
/// formulas and the report both refer to it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub ghg_avoided_tco2e: f64,
    pub waste_factor: f64,
    pub waste_avoided_min_tons: f64,
    pub waste_avoided_max_tons: f64,
    pub economic_loss_avoided_usd: f64,
    pub energy_savings_pct: f64,
    pub technicians_min: f64,
    pub technicians_max: f64,
    pub training_headcount: f64,
}

/// Evaluate every metric for one set of raw inputs
///
/// Pure: no validation, no logging, no state. Inputs are expected to be
/// slider-constrained already.
pub fn evaluate(
    dataset: &ReferenceDataset,
    formula: WasteFormula,
    container_capacity_tons: f64,
    rejection_pct: f64,
    volume_tons: f64,
    price_per_ton: f64,
) -> Metrics {
    let ghg = calculate_ghg_avoided(&dataset.ghg, rejection_pct, volume_tons, container_capacity_tons);
    let waste = calculate_waste_avoided(formula, &dataset.ghg, &dataset.waste, rejection_pct, volume_tons);
    let economic = calculate_economic_loss_avoided(waste.max_tons, price_per_ton);
    let (technicians_min, technicians_max) = technicians_range(&dataset.employment);

    Metrics {
        ghg_avoided_tco2e: ghg,
        waste_factor: waste.waste_factor,
        waste_avoided_min_tons: waste.min_tons,
        waste_avoided_max_tons: waste.max_tons,
        economic_loss_avoided_usd: economic,
        energy_savings_pct: energy_savings_pct(&dataset.energy),
        technicians_min,
        technicians_max,
        training_headcount: training_headcount(&dataset.employment, &dataset.waste, volume_tons),
    }
}

/// Compute metrics against the standard reference table
///
/// # Arguments
/// * `rejection_pct` - Rejection avoided, % of exported volume (0-20)
/// * `volume_tons` - Annual processed volume, tons (100-5000)
/// * `price_per_ton` - Export price, USD/ton (1000-5000)
pub fn compute_metrics(rejection_pct: f64, volume_tons: f64, price_per_ton: f64) -> Metrics {
    evaluate(
        &ReferenceDataset::standard(),
        WasteFormula::default(),
        CONTAINER_CAPACITY_TONS,
        rejection_pct,
        volume_tons,
        price_per_ton,
    )
}
