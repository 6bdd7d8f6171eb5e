//! Energy savings, technician staffing and training headcount
//!
//! None of these respond to the rejection % slider. Energy savings is a
//! fixed percentage from the technical sheet; no scaling formula is known
//! for it. Technicians per plant is the sheet's range, unscaled. Only the
//! training headcount follows the processed volume.

use crate::data::{EmploymentIndicator, EnergyIndicator, WasteIndicator};

/// Post-harvest energy consumption reduction, %
pub fn energy_savings_pct(energy: &EnergyIndicator) -> f64 {
    energy.savings_pct
}

/// Technicians needed per plant, as (min, max)
pub fn technicians_range(employment: &EmploymentIndicator) -> (f64, f64) {
    (employment.technician_factor_min, employment.technician_factor_max)
}

/// People to train, scaled linearly with volume against the reference volume
///
/// training = people_to_train_per_plant × (volume_tons / reference_volume_tons)
pub fn training_headcount(
    employment: &EmploymentIndicator,
    waste: &WasteIndicator,
    volume_tons: f64,
) -> f64 {
    employment.people_to_train_per_plant * (volume_tons / waste.reference_volume_tons)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ReferenceDataset;
    use approx::assert_relative_eq;

    #[test]
    fn test_training_equals_per_plant_at_reference_volume() {
        let d = ReferenceDataset::standard();
        assert_eq!(training_headcount(&d.employment, &d.waste, 1000.0), 20.0);
    }

    #[test]
    fn test_training_scales_linearly() {
        let d = ReferenceDataset::standard();
        assert_relative_eq!(training_headcount(&d.employment, &d.waste, 2500.0), 50.0, epsilon = 1e-9);
        assert_relative_eq!(training_headcount(&d.employment, &d.waste, 100.0), 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_constants_pass_through() {
        let d = ReferenceDataset::standard();
        assert_eq!(energy_savings_pct(&d.energy), 10.0);
        assert_eq!(technicians_range(&d.employment), (1.0, 3.0));
    }
}
