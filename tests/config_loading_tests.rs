// Configuration and dataset loading tests
//
// Purpose: Load the reference dataset CSV and the JSON config from disk,
//          including the shipped files under data/
// Run with: cargo test --test config_loading_tests

use approx::assert_relative_eq;
use impact_projector::{ImpactConfig, ImpactModel, ReferenceDataset, ScenarioInput, WasteFormula};
use std::fs;
use std::path::Path;

const MANIFEST_DIR: &str = env!("CARGO_MANIFEST_DIR");

fn shipped(name: &str) -> std::path::PathBuf {
    Path::new(MANIFEST_DIR).join("data").join(name)
}

// =========================================================================
// Section 1: Shipped data files
// =========================================================================

#[test]
fn test_shipped_csv_matches_standard_table() {
    let dataset = ReferenceDataset::load_csv(&shipped("reference_dataset.csv")).unwrap();
    assert_eq!(dataset, ReferenceDataset::standard());
}

#[test]
fn test_shipped_config_matches_defaults() {
    let config = ImpactConfig::load(&shipped("impact_config.json")).unwrap();
    assert_eq!(config.dataset, ReferenceDataset::standard());
    assert_eq!(config.chart_style, ImpactConfig::default().chart_style);
    assert_eq!(config.waste_formula, WasteFormula::ReferenceRatio);
    assert!(config.dataset_csv.unwrap().is_absolute());
}

// =========================================================================
// Section 2: Edited tables
// =========================================================================

#[test]
fn test_config_with_edited_csv() {
    let dir = tempfile::tempdir().unwrap();
    let csv = fs::read_to_string(shipped("reference_dataset.csv"))
        .unwrap()
        .replace("ghg_per_container_tco2e,2.4", "ghg_per_container_tco2e,3.0");
    fs::write(dir.path().join("edited.csv"), csv).unwrap();

    let config_path = dir.path().join("config.json");
    fs::write(
        &config_path,
        r#"{ "dataset_csv": "edited.csv", "waste_formula": "direct_percentage" }"#,
    )
    .unwrap();

    let config = ImpactConfig::load(&config_path).unwrap();
    assert_eq!(config.dataset.ghg.ghg_per_container_tco2e, 3.0);
    assert_eq!(config.waste_formula, WasteFormula::DirectPercentage);

    let model = ImpactModel::new(&config).unwrap();
    let m = model.compute(&ScenarioInput::default());
    // 0.10 × 50 × 3.0
    assert_relative_eq!(m.ghg_avoided_tco2e, 15.0, epsilon = 1e-9);
    assert_relative_eq!(model.baseline().ghg_tco2e, 15.0, epsilon = 1e-9);
}

#[test]
fn test_zero_reference_rejection_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let csv = fs::read_to_string(shipped("reference_dataset.csv"))
        .unwrap()
        .replace("reference_rejection_pct,10", "reference_rejection_pct,0");
    let path = dir.path().join("bad.csv");
    fs::write(&path, csv).unwrap();

    assert!(ReferenceDataset::load_csv(&path).is_err());
}

#[test]
fn test_missing_file_errors() {
    let dir = tempfile::tempdir().unwrap();
    assert!(ReferenceDataset::load_csv(&dir.path().join("nope.csv")).is_err());
    assert!(ImpactConfig::load(&dir.path().join("nope.json")).is_err());
}

#[test]
fn test_malformed_json_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, "{ \"container_capacity_tons\": ").unwrap();
    assert!(ImpactConfig::load(&path).is_err());
}

#[test]
fn test_load_or_default_without_path() {
    let config = ImpactConfig::load_or_default(None).unwrap();
    assert_eq!(config, ImpactConfig::default());
}
