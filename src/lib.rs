//! Impact Projector
//!
//! Scenario-driven impact metrics and baseline-vs-projection charts for the
//! microwave anti-"sugaring" raisin treatment subproject.
//!
//! - `data/`: Reference dataset (typed indicator records, CSV loading)
//! - `scenario/`: Slider bounds and scenario inputs
//! - `metrics/`: Per-family formulas (GHG, waste, economic, workforce)
//! - `model/`: Configured impact model and baseline
//! - `charts/`: Comparison charts rendered with plotters, exported as PNG
//! - `report/`: Display cards and Markdown / JSON / HTML rendering
//! - `sweep/`: Parallel scenario sweeps into Polars DataFrames

pub mod error;
pub mod utils;
pub mod data;
pub mod scenario;
pub mod metrics;
pub mod config;
pub mod model;
pub mod charts;
pub mod report;
pub mod sweep;

// Re-export commonly used types
pub use error::{ImpactError, ImpactResult};
pub use data::ReferenceDataset;
pub use scenario::{ScenarioInput, SliderSpec};
pub use metrics::{compute_metrics, Metrics, WasteFormula};
pub use config::{ChartStyle, ImpactConfig};
pub use model::{Baseline, ImpactModel};
pub use charts::{build_comparison, ChartArtifact, ChartSet, MetricFamily, MetricSpec};
pub use report::{HtmlFormatter, ImpactReport, JsonFormatter, MarkdownFormatter, ReportGenerator};
pub use sweep::{run_sweep, SweepGrid};
