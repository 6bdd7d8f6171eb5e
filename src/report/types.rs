use serde::{Deserialize, Serialize};

use crate::charts::MetricFamily;
use crate::metrics::Metrics;
use crate::model::Baseline;
use crate::scenario::ScenarioInput;

/// Complete impact report for one scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImpactReport {
    pub title: String,
    pub subtitle: String,
    pub scenario: ScenarioInput,
    pub metrics: Metrics,
    pub baseline: Baseline,
    pub cards: Vec<MetricCard>,
    pub comparisons: Vec<ComparisonRow>,
    pub circularity_note: String,
    pub status_note: String,
}

/// One headline figure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricCard {
    pub key: String,     // "ghg_avoided"
    pub label: String,   // "GHG Emissions Avoided from Returns"
    pub value: String,   // "12.00 tCO₂e"
    pub caption: String,
}

/// Baseline vs projection for one charted family
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub family: MetricFamily,
    pub title: String,
    pub baseline: f64,
    pub projection: f64,
    pub baseline_display: String,
    pub projection_display: String,
    /// PNG file name the chart is exported under
    pub chart_file: String,
}
