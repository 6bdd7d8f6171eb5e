use crate::charts::ChartSet;
use crate::config::ChartStyle;
use crate::metrics::Metrics;
use crate::model::{Baseline, ImpactModel};
use crate::report::types::*;
use crate::scenario::ScenarioInput;
use crate::utils::formatting::{format_integer, format_usd};

pub const REPORT_TITLE: &str = "Impact Visualizer - Subproject P1.1";
pub const REPORT_SUBTITLE: &str = "Reducing \"sugaring\" in raisins through microwave treatment";

const STATUS_NOTE: &str = "The project has pilot validation and experimental laboratory evidence. \
Monitoring sheets at user companies are recommended to record the volume of raisins saved.";

/// Main report generator
pub struct ReportGenerator;

impl ReportGenerator {
    /// Evaluate `input` on `model` and assemble the report
    ///
    /// The chart set is built from the same metrics as the cards, and
    /// returned alongside the report for export.
    pub fn generate(model: &ImpactModel, input: &ScenarioInput, style: &ChartStyle) -> (ImpactReport, ChartSet) {
        let metrics = model.compute(input);
        let baseline = model.baseline();
        let charts = ChartSet::build(&baseline, &metrics, style);
        let report = Self::assemble(input, &metrics, &baseline, &charts);
        (report, charts)
    }

    /// Assemble from already computed values
    ///
    /// `charts` must have been built from `metrics` and `baseline`.
    pub fn assemble(
        input: &ScenarioInput,
        metrics: &Metrics,
        baseline: &Baseline,
        charts: &ChartSet,
    ) -> ImpactReport {
        let comparisons = charts
            .iter()
            .map(|artifact| ComparisonRow {
                family: artifact.family,
                title: artifact.title.clone(),
                baseline: artifact.baseline().value,
                projection: artifact.projection().value,
                baseline_display: artifact.baseline().value_label.clone(),
                projection_display: artifact.projection().value_label.clone(),
                chart_file: format!("{}.png", artifact.family.slug()),
            })
            .collect();

        ImpactReport {
            title: REPORT_TITLE.to_string(),
            subtitle: REPORT_SUBTITLE.to_string(),
            scenario: *input,
            metrics: *metrics,
            baseline: *baseline,
            cards: Self::metric_cards(metrics),
            comparisons,
            circularity_note: Self::circularity_note(input.rejection_pct),
            status_note: STATUS_NOTE.to_string(),
        }
    }

    /// The six headline cards, in display order
    pub fn metric_cards(metrics: &Metrics) -> Vec<MetricCard> {
        let card = |key: &str, label: &str, value: String, caption: &str| MetricCard {
            key: key.to_string(),
            label: label.to_string(),
            value,
            caption: caption.to_string(),
        };

        vec![
            card(
                "ghg_avoided",
                "GHG Emissions Avoided from Returns",
                format!("{:.2} tCO₂e", metrics.ghg_avoided_tco2e),
                "Emission reduction from avoiding the return transport of rejected lots.",
            ),
            card(
                "waste_avoided",
                "Food Waste Reduction",
                format!("{} tons", format_integer(metrics.waste_avoided_max_tons)),
                "Estimate based on avoiding rejection caused by sugaring.",
            ),
            card(
                "economic_loss_avoided",
                "Economic Losses Avoided",
                format_usd(metrics.economic_loss_avoided_usd),
                "Direct savings from avoiding the loss of raisin value.",
            ),
            card(
                "energy_savings",
                "Indirect Energy Savings",
                format!("{}%", format_integer(metrics.energy_savings_pct)),
                "Estimated reduction in post-harvest energy consumption.",
            ),
            card(
                "technicians",
                "New Indirect Jobs (per plant)",
                format!(
                    "Between {} and {} technicians",
                    format_integer(metrics.technicians_min),
                    format_integer(metrics.technicians_max)
                ),
                "Technical staff required to implement the technology.",
            ),
            card(
                "training",
                "Estimated Technical Training",
                format!("{} people", format_integer(metrics.training_headcount)),
                "People trained, scaled with the annual processed volume.",
            ),
        ]
    }

    /// Circularity index note: improvement from 0% to ~N% (N = rejection %, rounded)
    pub fn circularity_note(rejection_pct: f64) -> String {
        format!(
            "Circularity Index (CTI-WBCSD): circularity is estimated to improve from 0% to ~{}% with the implemented technology.",
            format_integer(rejection_pct)
        )
    }
}
