// Scenario sweep binary
//
// Purpose: Evaluate the impact model over a grid of slider positions and
//          write the results as CSV and Parquet
// Usage: SWEEP_VOLUME_STRIDE=10 cargo run --release --bin scenario_sweep

use anyhow::Context;
use impact_projector::sweep::{run_sweep, write_csv, write_parquet, SweepGrid};
use impact_projector::{ImpactConfig, ImpactModel};
use std::fs;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn env_stride(name: &str) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(1)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "impact_projector=info,scenario_sweep=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_path = std::env::var("IMPACT_CONFIG").ok().map(PathBuf::from);
    let output_dir = PathBuf::from(
        std::env::var("OUTPUT_DIR").unwrap_or_else(|_| "impact_output".to_string()),
    );
    let grid = SweepGrid::with_strides(
        env_stride("SWEEP_REJECTION_STRIDE"),
        env_stride("SWEEP_VOLUME_STRIDE"),
        env_stride("SWEEP_PRICE_STRIDE"),
    );

    tracing::info!("Configuration:");
    tracing::info!("  IMPACT_CONFIG: {:?}", config_path);
    tracing::info!("  OUTPUT_DIR: {:?}", output_dir);
    tracing::info!("  Grid: {:?} ({} scenarios)", grid, grid.len());

    let config = ImpactConfig::load_or_default(config_path.as_deref())?;
    let model = ImpactModel::new(&config)?;

    let start = Instant::now();
    let mut df = run_sweep(&model, &grid)?;
    tracing::info!("Sweep computed in {:.3}s", start.elapsed().as_secs_f64());

    fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create output directory: {:?}", output_dir))?;

    write_csv(&mut df, &output_dir.join("scenario_sweep.csv"))?;
    write_parquet(&mut df, &output_dir.join("scenario_sweep.parquet"))?;

    Ok(())
}
