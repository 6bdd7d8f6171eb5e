//! Chart Builder
//!
//! Baseline-vs-projection bar comparisons for the three charted metric
//! families (GHG avoided, waste avoided, economic loss avoided).
//!
//! `build_comparison` produces a `ChartArtifact`: plain data describing the
//! two bars, their labels and the axis. Rendering happens only when an
//! artifact is asked for its PNG, so each family can be exported on its own
//! without touching the others.

pub mod render;
pub mod png_export;
pub mod dashboard;

pub use dashboard::{export_dashboard, render_dashboard, DASHBOARD_TITLE};
pub use png_export::{crop_to_content, encode_png, pixels_per_meter};

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::config::{ChartStyle, Rgb};
use crate::error::{ImpactError, ImpactResult};
use crate::metrics::Metrics;
use crate::model::Baseline;
use crate::utils::formatting::{format_dollars, format_integer, format_thousands};

/// Head room above the taller bar, as a fraction of its height
const HEADROOM: f64 = 0.15;

/// The three charted metric families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricFamily {
    Ghg,
    Waste,
    EconomicLoss,
}

impl MetricFamily {
    pub const ALL: [MetricFamily; 3] = [MetricFamily::Ghg, MetricFamily::Waste, MetricFamily::EconomicLoss];

    /// Stable identifier used for export file names
    pub fn slug(&self) -> &'static str {
        match self {
            MetricFamily::Ghg => "ghg_avoided",
            MetricFamily::Waste => "waste_avoided",
            MetricFamily::EconomicLoss => "economic_loss_avoided",
        }
    }
}

/// How a bar's value label is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueFormat {
    /// "12.00"
    Decimal2,
    /// "100"
    Integer,
    /// "$280,000"
    Currency,
}

impl ValueFormat {
    pub fn format(&self, value: f64) -> String {
        match self {
            ValueFormat::Decimal2 => format!("{:.2}", value),
            ValueFormat::Integer => format_integer(value),
            ValueFormat::Currency => format_dollars(value),
        }
    }

    /// Tick labels on the y axis
    pub fn format_axis(&self, value: f64) -> String {
        match self {
            ValueFormat::Decimal2 => format!("{:.1}", value),
            ValueFormat::Integer => format_thousands(value),
            ValueFormat::Currency => format_thousands(value),
        }
    }
}

/// Per-family chart description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSpec {
    pub family: MetricFamily,
    pub title: String,
    pub axis_label: String,
    pub value_format: ValueFormat,
    pub baseline_color: Rgb,
    pub projection_color: Rgb,
}

impl MetricSpec {
    /// Standard chart description with the default palette
    pub fn for_family(family: MetricFamily) -> Self {
        Self::styled(family, &ChartStyle::default())
    }

    /// Standard chart description with colors taken from `style`
    pub fn styled(family: MetricFamily, style: &ChartStyle) -> Self {
        let (title, axis_label, value_format, projection_color) = match family {
            MetricFamily::Ghg => (
                "GHG Emissions Avoided (tCO₂e/yr)",
                "tCO₂e/yr",
                ValueFormat::Decimal2,
                style.ghg_color,
            ),
            MetricFamily::Waste => (
                "Food Waste Reduction (t/yr)",
                "Tons/yr",
                ValueFormat::Integer,
                style.waste_color,
            ),
            MetricFamily::EconomicLoss => (
                "Economic Losses Avoided (USD/yr)",
                "USD/yr",
                ValueFormat::Currency,
                style.economic_color,
            ),
        };

        Self {
            family,
            title: title.to_string(),
            axis_label: axis_label.to_string(),
            value_format,
            baseline_color: style.baseline_color,
            projection_color,
        }
    }
}

/// One bar of a comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub value_label: String,
    pub color: Rgb,
}

/// A renderable baseline-vs-projection comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartArtifact {
    pub family: MetricFamily,
    pub title: String,
    pub axis_label: String,
    pub value_format: ValueFormat,
    /// Baseline first, projection second
    pub bars: [Bar; 2],
    /// y axis always starts at 0
    pub y_max: f64,
}

/// Build the comparison for one metric family
pub fn build_comparison(baseline_value: f64, projected_value: f64, spec: &MetricSpec) -> ChartArtifact {
    let tallest = baseline_value.max(projected_value).max(0.0);
    let y_max = if tallest > 0.0 { tallest * (1.0 + HEADROOM) } else { 1.0 };

    let bar = |label: &str, value: f64, color: Rgb| Bar {
        label: label.to_string(),
        value,
        value_label: spec.value_format.format(value),
        color,
    };

    ChartArtifact {
        family: spec.family,
        title: spec.title.clone(),
        axis_label: spec.axis_label.clone(),
        value_format: spec.value_format,
        bars: [
            bar("Baseline", baseline_value, spec.baseline_color),
            bar("Projection", projected_value, spec.projection_color),
        ],
        y_max,
    }
}

impl ChartArtifact {
    pub fn baseline(&self) -> &Bar {
        &self.bars[0]
    }

    pub fn projection(&self) -> &Bar {
        &self.bars[1]
    }

    /// Render to PNG bytes (tight bounding box, DPI from `style`)
    pub fn render_png(&self, style: &ChartStyle) -> ImpactResult<Vec<u8>> {
        let (width, height) = (style.width_px, style.height_px);
        let pixels = render::render_pixels(width, height, |area| {
            render::draw_comparison(area, self, style)
        })?;

        tracing::debug!(family = ?self.family, width, height, "rendered comparison chart");
        png_export::encode_tight(&pixels, width, height, style)
    }

    /// Render and write to `path`
    pub fn export_png(&self, path: &Path, style: &ChartStyle) -> ImpactResult<()> {
        let bytes = self.render_png(style)?;
        fs::write(path, bytes)?;
        tracing::info!("Wrote {:?} chart: {:?}", self.family, path);
        Ok(())
    }
}

/// The three comparisons for one scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSet {
    pub ghg: ChartArtifact,
    pub waste: ChartArtifact,
    pub economic_loss: ChartArtifact,
}

impl ChartSet {
    pub fn build(baseline: &Baseline, metrics: &Metrics, style: &ChartStyle) -> Self {
        Self {
            ghg: build_comparison(
                baseline.ghg_tco2e,
                metrics.ghg_avoided_tco2e,
                &MetricSpec::styled(MetricFamily::Ghg, style),
            ),
            waste: build_comparison(
                baseline.waste_tons,
                metrics.waste_avoided_max_tons,
                &MetricSpec::styled(MetricFamily::Waste, style),
            ),
            economic_loss: build_comparison(
                baseline.economic_loss_usd,
                metrics.economic_loss_avoided_usd,
                &MetricSpec::styled(MetricFamily::EconomicLoss, style),
            ),
        }
    }

    pub fn get(&self, family: MetricFamily) -> &ChartArtifact {
        match family {
            MetricFamily::Ghg => &self.ghg,
            MetricFamily::Waste => &self.waste,
            MetricFamily::EconomicLoss => &self.economic_loss,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChartArtifact> {
        [&self.ghg, &self.waste, &self.economic_loss].into_iter()
    }

    /// Write `<slug>.png` for every family into `dir`
    pub fn export_all(&self, dir: &Path, style: &ChartStyle) -> ImpactResult<Vec<std::path::PathBuf>> {
        if !dir.is_dir() {
            return Err(ImpactError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("output directory does not exist: {:?}", dir),
            )));
        }

        let mut written = Vec::with_capacity(3);
        for artifact in self.iter() {
            let path = dir.join(format!("{}.png", artifact.family.slug()));
            artifact.export_png(&path, style)?;
            written.push(path);
        }
        Ok(written)
    }
}
