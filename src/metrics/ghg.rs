//! GHG emissions avoided through fewer international returns
//!
//! Every rejected lot is shipped back in containers; avoiding the rejection
//! avoids the return leg.
//!
//! gei_avoided = (rejection_pct / 100) × (volume_tons / container_capacity) × ghg_per_container

use crate::data::GhgIndicator;

/// Standard load of one export container, tons
pub const CONTAINER_CAPACITY_TONS: f64 = 20.0;

/// Containers no longer returned for a given rejection % and volume
pub fn containers_avoided(rejection_pct: f64, volume_tons: f64, container_capacity_tons: f64) -> f64 {
    (rejection_pct / 100.0) * (volume_tons / container_capacity_tons)
}

/// tCO₂e avoided per year
pub fn calculate_ghg_avoided(
    indicator: &GhgIndicator,
    rejection_pct: f64,
    volume_tons: f64,
    container_capacity_tons: f64,
) -> f64 {
    containers_avoided(rejection_pct, volume_tons, container_capacity_tons)
        * indicator.ghg_per_container_tco2e
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ReferenceDataset;
    use approx::assert_relative_eq;

    #[test]
    fn test_containers_avoided() {
        // 10% of 1000 t = 100 t = 5 containers
        assert_relative_eq!(containers_avoided(10.0, 1000.0, 20.0), 5.0, epsilon = 1e-12);
        assert_eq!(containers_avoided(0.0, 5000.0, 20.0), 0.0);
    }

    #[test]
    fn test_ghg_at_reference_example() {
        let dataset = ReferenceDataset::standard();
        let ghg = calculate_ghg_avoided(&dataset.ghg, 10.0, 1000.0, CONTAINER_CAPACITY_TONS);
        // 0.10 × 50 × 2.4
        assert_relative_eq!(ghg, 12.0, epsilon = 1e-9);
    }

    #[test]
    fn test_ghg_scales_with_capacity() {
        let dataset = ReferenceDataset::standard();
        let small = calculate_ghg_avoided(&dataset.ghg, 10.0, 1000.0, 10.0);
        let large = calculate_ghg_avoided(&dataset.ghg, 10.0, 1000.0, 40.0);
        assert_relative_eq!(small, 4.0 * large, epsilon = 1e-9);
    }
}
