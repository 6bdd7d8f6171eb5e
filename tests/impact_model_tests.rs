// Impact model property tests
//
// Purpose: Check non-negativity, monotonicity and baseline stability over
//          randomly sampled slider positions
// Run with: cargo test --test impact_model_tests

use approx::assert_relative_eq;
use impact_projector::{compute_metrics, ImpactModel, ScenarioInput, SliderSpec};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SAMPLES: usize = 500;

fn sample(rng: &mut StdRng, spec: &SliderSpec) -> f64 {
    spec.value_at(rng.gen_range(0..spec.positions()))
}

fn random_input(rng: &mut StdRng) -> ScenarioInput {
    ScenarioInput::raw(
        sample(rng, &SliderSpec::REJECTION_PCT),
        sample(rng, &SliderSpec::VOLUME_TONS),
        sample(rng, &SliderSpec::PRICE_PER_TON),
    )
}

// =========================================================================
// Section 1: Value ranges
// =========================================================================

#[test]
fn test_metrics_non_negative() {
    let mut rng = StdRng::seed_from_u64(42);
    let model = ImpactModel::standard();

    for _ in 0..SAMPLES {
        let input = random_input(&mut rng);
        let m = model.compute(&input);

        assert!(m.ghg_avoided_tco2e >= 0.0, "{:?}", input);
        assert!(m.waste_avoided_min_tons >= 0.0, "{:?}", input);
        assert!(m.waste_avoided_max_tons >= m.waste_avoided_min_tons, "{:?}", input);
        assert!(m.economic_loss_avoided_usd >= 0.0, "{:?}", input);
        assert!(m.training_headcount > 0.0, "{:?}", input);
    }
}

// =========================================================================
// Section 2: Monotonicity
// =========================================================================

#[test]
fn test_rejection_monotonic() {
    let mut rng = StdRng::seed_from_u64(7);
    let spec = SliderSpec::REJECTION_PCT;

    for _ in 0..SAMPLES {
        let base = random_input(&mut rng);
        let idx = rng.gen_range(0..spec.positions() - 1);
        let lo = compute_metrics(spec.value_at(idx), base.volume_tons, base.price_per_ton);
        let hi = compute_metrics(spec.value_at(idx + 1), base.volume_tons, base.price_per_ton);

        assert!(hi.ghg_avoided_tco2e >= lo.ghg_avoided_tco2e);
        assert!(hi.waste_avoided_min_tons >= lo.waste_avoided_min_tons);
        assert!(hi.waste_avoided_max_tons >= lo.waste_avoided_max_tons);
        assert!(hi.economic_loss_avoided_usd >= lo.economic_loss_avoided_usd);
    }
}

#[test]
fn test_volume_monotonic() {
    let mut rng = StdRng::seed_from_u64(11);
    let spec = SliderSpec::VOLUME_TONS;

    for _ in 0..SAMPLES {
        let base = random_input(&mut rng);
        let idx = rng.gen_range(0..spec.positions() - 1);
        let lo = compute_metrics(base.rejection_pct, spec.value_at(idx), base.price_per_ton);
        let hi = compute_metrics(base.rejection_pct, spec.value_at(idx + 1), base.price_per_ton);

        assert!(hi.ghg_avoided_tco2e >= lo.ghg_avoided_tco2e);
        assert!(hi.waste_avoided_max_tons >= lo.waste_avoided_max_tons);
        assert!(hi.training_headcount >= lo.training_headcount);
    }
}

// =========================================================================
// Section 3: Fixed points
// =========================================================================

#[test]
fn test_training_headcount_at_reference_volume() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..50 {
        let input = random_input(&mut rng);
        let m = compute_metrics(input.rejection_pct, 1000.0, input.price_per_ton);
        assert_eq!(m.training_headcount, 20.0);
    }
}

#[test]
fn test_baseline_ignores_sliders() {
    let mut rng = StdRng::seed_from_u64(99);
    let model = ImpactModel::standard();
    let expected = model.baseline();

    for _ in 0..50 {
        let _ = model.compute(&random_input(&mut rng));
        assert_eq!(model.baseline(), expected);
    }

    assert_relative_eq!(expected.ghg_tco2e, 12.0, epsilon = 1e-9);
    assert_relative_eq!(expected.waste_tons, 100.0, epsilon = 1e-9);
    assert_relative_eq!(expected.economic_loss_usd, 280_000.0, epsilon = 1e-6);
}

#[test]
fn test_constrained_inputs_land_on_slider() {
    let input = ScenarioInput::new(12.74, 1234.0, 99_999.0);
    assert_eq!(input.rejection_pct, 12.5);
    assert_eq!(input.volume_tons, 1250.0);
    assert_eq!(input.price_per_ton, 5000.0);
}
