use crate::report::types::{ComparisonRow, ImpactReport};

/// Markdown formatter for impact reports
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Format report as markdown
    pub fn format(report: &ImpactReport) -> String {
        let mut md = String::with_capacity(2048);

        md.push_str(&format!("# {}\n\n", report.title));
        md.push_str(&format!("*{}*\n\n", report.subtitle));

        // Scenario
        md.push_str("## Scenario\n\n");
        md.push_str(&format!(
            "- **Rejection avoided:** {:.1}% of exported volume\n",
            report.scenario.rejection_pct
        ));
        md.push_str(&format!(
            "- **Annual processed volume:** {:.0} t\n",
            report.scenario.volume_tons
        ));
        md.push_str(&format!(
            "- **Export price:** {:.0} USD/t\n\n",
            report.scenario.price_per_ton
        ));

        // Headline figures
        md.push_str("## Projected Annual Results\n\n");
        for card in &report.cards {
            md.push_str(&format!("### {}\n\n", card.label));
            md.push_str(&format!("**{}**  \n", card.value));
            md.push_str(&format!("*{}*\n\n", card.caption));
        }

        // Baseline vs projection
        if !report.comparisons.is_empty() {
            md.push_str("## Impact Charts\n\n");
            Self::format_comparison_table(&mut md, &report.comparisons);
            for row in &report.comparisons {
                md.push_str(&format!("![{}]({})\n\n", row.title, row.chart_file));
            }
        }

        md.push_str("## Additional Information\n\n");
        md.push_str(&format!("- {}\n", report.circularity_note));
        md.push_str(&format!("- **Project status:** {}\n", report.status_note));

        md
    }

    fn format_comparison_table(md: &mut String, rows: &[ComparisonRow]) {
        md.push_str("| Metric | Baseline | Projection |\n");
        md.push_str("|--------|----------|------------|\n");
        for row in rows {
            md.push_str(&format!(
                "| {} | {} | {} |\n",
                row.title, row.baseline_display, row.projection_display
            ));
        }
        md.push('\n');
    }
}
