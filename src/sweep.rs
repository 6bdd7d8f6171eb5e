//! Scenario sensitivity sweep
//!
//! Evaluates the model over a grid of slider positions and collects the
//! results into a Polars DataFrame (one row per scenario, one column per
//! input and metric). Evaluation runs on the Rayon pool; rows come back in
//! grid order regardless of scheduling.

use polars::prelude::*;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

use crate::error::ImpactResult;
use crate::metrics::Metrics;
use crate::model::ImpactModel;
use crate::scenario::{ScenarioInput, SliderSpec};

/// Grid of slider positions, with a stride per axis (1 = every step)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepGrid {
    pub rejection_stride: usize,
    pub volume_stride: usize,
    pub price_stride: usize,
}

impl Default for SweepGrid {
    fn default() -> Self {
        Self::full()
    }
}

impl SweepGrid {
    /// Every slider position on every axis
    pub fn full() -> Self {
        Self::with_strides(1, 1, 1)
    }

    /// Zero strides are treated as 1
    pub fn with_strides(rejection_stride: usize, volume_stride: usize, price_stride: usize) -> Self {
        Self {
            rejection_stride: rejection_stride.max(1),
            volume_stride: volume_stride.max(1),
            price_stride: price_stride.max(1),
        }
    }

    /// Positions visited on one axis; the upper bound is always included
    pub fn axis(spec: &SliderSpec, stride: usize) -> Vec<f64> {
        let positions = spec.positions();
        let mut indices: Vec<usize> = (0..positions).step_by(stride.max(1)).collect();
        if indices.last() != Some(&(positions - 1)) {
            indices.push(positions - 1);
        }
        indices.into_iter().map(|i| spec.value_at(i)).collect()
    }

    /// All grid points, rejection-major then volume then price
    pub fn points(&self) -> Vec<ScenarioInput> {
        let rejection = Self::axis(&SliderSpec::REJECTION_PCT, self.rejection_stride);
        let volume = Self::axis(&SliderSpec::VOLUME_TONS, self.volume_stride);
        let price = Self::axis(&SliderSpec::PRICE_PER_TON, self.price_stride);

        let mut points = Vec::with_capacity(rejection.len() * volume.len() * price.len());
        for &r in &rejection {
            for &v in &volume {
                for &p in &price {
                    points.push(ScenarioInput::raw(r, v, p));
                }
            }
        }
        points
    }

    pub fn len(&self) -> usize {
        Self::axis(&SliderSpec::REJECTION_PCT, self.rejection_stride).len()
            * Self::axis(&SliderSpec::VOLUME_TONS, self.volume_stride).len()
            * Self::axis(&SliderSpec::PRICE_PER_TON, self.price_stride).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Evaluate every grid point and collect the results
pub fn run_sweep(model: &ImpactModel, grid: &SweepGrid) -> ImpactResult<DataFrame> {
    let points = grid.points();
    tracing::info!("Running sweep over {} scenarios", points.len());

    let results: Vec<(ScenarioInput, Metrics)> = points
        .par_iter()
        .map(|input| (*input, model.compute(input)))
        .collect();

    let column = |f: fn(&(ScenarioInput, Metrics)) -> f64| -> Vec<f64> { results.iter().map(f).collect() };

    let df = df!(
        "rejection_pct" => column(|(i, _)| i.rejection_pct),
        "volume_tons" => column(|(i, _)| i.volume_tons),
        "price_per_ton" => column(|(i, _)| i.price_per_ton),
        "ghg_avoided_tco2e" => column(|(_, m)| m.ghg_avoided_tco2e),
        "waste_factor" => column(|(_, m)| m.waste_factor),
        "waste_avoided_min_tons" => column(|(_, m)| m.waste_avoided_min_tons),
        "waste_avoided_max_tons" => column(|(_, m)| m.waste_avoided_max_tons),
        "economic_loss_avoided_usd" => column(|(_, m)| m.economic_loss_avoided_usd),
        "energy_savings_pct" => column(|(_, m)| m.energy_savings_pct),
        "technicians_min" => column(|(_, m)| m.technicians_min),
        "technicians_max" => column(|(_, m)| m.technicians_max),
        "training_headcount" => column(|(_, m)| m.training_headcount),
    )?;

    tracing::info!("  Sweep DataFrame: {} rows × {} cols", df.height(), df.width());
    Ok(df)
}

/// Write a sweep as CSV with a header row
pub fn write_csv(df: &mut DataFrame, path: &Path) -> ImpactResult<()> {
    let mut file = File::create(path)?;
    CsvWriter::new(&mut file).include_header(true).finish(df)?;
    tracing::info!("Wrote sweep CSV: {:?}", path);
    Ok(())
}

/// Write a sweep as ZSTD-compressed Parquet
pub fn write_parquet(df: &mut DataFrame, path: &Path) -> ImpactResult<()> {
    let file = File::create(path)?;
    ParquetWriter::new(file)
        .with_compression(ParquetCompression::Zstd(None))
        .finish(df)?;
    tracing::info!("Wrote sweep Parquet: {:?}", path);
    Ok(())
}
