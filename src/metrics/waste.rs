//! Food waste avoided
//!
//! Two formulas exist for the avoided-waste range and both are kept:
//!
//! - `ReferenceRatio` scales the technical sheet's loss-rate range by how far
//!   the scenario's rejection % is from the reference estimate:
//!   waste_factor = rejection_pct / reference_rejection_pct
//!   waste_min = (loss_rate_min / 100) × volume × waste_factor
//!   waste_max = (loss_rate_max / 100) × volume × waste_factor
//!
//! - `DirectPercentage` applies the slider % to the volume and derives the low
//!   end from the ratio of the loss-rate bounds:
//!   waste_max = (rejection_pct / 100) × volume
//!   waste_min = waste_max × (loss_rate_min / loss_rate_max)
//!
//! With the standard table (loss_rate_max == reference_rejection_pct == 10)
//! the two agree; they diverge once the table is edited.

use serde::{Deserialize, Serialize};

use crate::data::{GhgIndicator, WasteIndicator};

/// Which avoided-waste formula the model applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WasteFormula {
    #[default]
    ReferenceRatio,
    DirectPercentage,
}

/// Avoided-waste range in tons per year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WasteRange {
    pub waste_factor: f64,
    pub min_tons: f64,
    pub max_tons: f64,
}

/// Ratio of the scenario's rejection % to the reference estimate
///
/// The dataset is validated with a non-zero `reference_rejection_pct`.
pub fn waste_factor(ghg: &GhgIndicator, rejection_pct: f64) -> f64 {
    rejection_pct / ghg.reference_rejection_pct
}

/// Calculate the avoided-waste range with the chosen formula
pub fn calculate_waste_avoided(
    formula: WasteFormula,
    ghg: &GhgIndicator,
    waste: &WasteIndicator,
    rejection_pct: f64,
    volume_tons: f64,
) -> WasteRange {
    let factor = waste_factor(ghg, rejection_pct);

    match formula {
        WasteFormula::ReferenceRatio => WasteRange {
            waste_factor: factor,
            min_tons: (waste.loss_rate_min_pct / 100.0) * volume_tons * factor,
            max_tons: (waste.loss_rate_max_pct / 100.0) * volume_tons * factor,
        },
        WasteFormula::DirectPercentage => {
            let max_tons = (rejection_pct / 100.0) * volume_tons;
            WasteRange {
                waste_factor: factor,
                min_tons: max_tons * (waste.loss_rate_min_pct / waste.loss_rate_max_pct),
                max_tons,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ReferenceDataset;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_ratio_at_reference_example() {
        let d = ReferenceDataset::standard();
        let range = calculate_waste_avoided(WasteFormula::ReferenceRatio, &d.ghg, &d.waste, 10.0, 1000.0);
        assert_relative_eq!(range.waste_factor, 1.0, epsilon = 1e-12);
        assert_relative_eq!(range.min_tons, 50.0, epsilon = 1e-9);
        assert_relative_eq!(range.max_tons, 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_formulas_agree_on_standard_table() {
        let d = ReferenceDataset::standard();
        for &(pct, vol) in &[(0.0, 100.0), (7.5, 2350.0), (20.0, 5000.0)] {
            let a = calculate_waste_avoided(WasteFormula::ReferenceRatio, &d.ghg, &d.waste, pct, vol);
            let b = calculate_waste_avoided(WasteFormula::DirectPercentage, &d.ghg, &d.waste, pct, vol);
            assert_relative_eq!(a.min_tons, b.min_tons, epsilon = 1e-9);
            assert_relative_eq!(a.max_tons, b.max_tons, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_formulas_diverge_on_edited_table() {
        let mut d = ReferenceDataset::standard();
        d.waste.loss_rate_min_pct = 4.0;
        d.waste.loss_rate_max_pct = 8.0;

        let ratio = calculate_waste_avoided(WasteFormula::ReferenceRatio, &d.ghg, &d.waste, 10.0, 1000.0);
        let direct = calculate_waste_avoided(WasteFormula::DirectPercentage, &d.ghg, &d.waste, 10.0, 1000.0);

        // ratio: 8% of 1000 × 1.0; direct: 10% of 1000
        assert_relative_eq!(ratio.max_tons, 80.0, epsilon = 1e-9);
        assert_relative_eq!(direct.max_tons, 100.0, epsilon = 1e-9);
        assert_relative_eq!(ratio.min_tons, 40.0, epsilon = 1e-9);
        assert_relative_eq!(direct.min_tons, 50.0, epsilon = 1e-9);
    }
}
