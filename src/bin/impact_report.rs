// Impact report binary
//
// Purpose: Evaluate one scenario, print the markdown report and write the
//          chart PNGs, the dashboard, report.json and report.html
// Usage: REJECTION_PCT=15 VOLUME_TONS=2500 cargo run --bin impact_report

use anyhow::Context;
use impact_projector::charts::export_dashboard;
use impact_projector::{
    HtmlFormatter, ImpactConfig, ImpactModel, JsonFormatter, MarkdownFormatter,
    ReportGenerator, ScenarioInput, SliderSpec,
};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn env_f64(name: &str, default: f64) -> f64 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "impact_projector=info,impact_report=info,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Configuration from environment variables
    let config_path = std::env::var("IMPACT_CONFIG").ok().map(PathBuf::from);
    let output_dir = PathBuf::from(
        std::env::var("OUTPUT_DIR").unwrap_or_else(|_| "impact_output".to_string()),
    );

    let input = ScenarioInput::new(
        env_f64("REJECTION_PCT", SliderSpec::REJECTION_PCT.default),
        env_f64("VOLUME_TONS", SliderSpec::VOLUME_TONS.default),
        env_f64("PRICE_PER_TON", SliderSpec::PRICE_PER_TON.default),
    );

    tracing::info!("Configuration:");
    tracing::info!("  IMPACT_CONFIG: {:?}", config_path);
    tracing::info!("  OUTPUT_DIR: {:?}", output_dir);
    tracing::info!(
        "  Scenario: rejection {}%, volume {} t, price {} USD/t",
        input.rejection_pct,
        input.volume_tons,
        input.price_per_ton
    );

    let config = ImpactConfig::load_or_default(config_path.as_deref())?;
    let model = ImpactModel::new(&config)?;
    let style = &config.chart_style;

    let (report, charts) = ReportGenerator::generate(&model, &input, style);

    println!("{}", MarkdownFormatter::format(&report));

    fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create output directory: {:?}", output_dir))?;

    charts.export_all(&output_dir, style)?;
    export_dashboard(&charts, &output_dir.join("dashboard.png"), style)?;

    let json_path = output_dir.join("report.json");
    fs::write(&json_path, JsonFormatter::format(&report)?)
        .with_context(|| format!("Failed to write {:?}", json_path))?;

    let html_path = output_dir.join("report.html");
    fs::write(&html_path, HtmlFormatter::format(&report))
        .with_context(|| format!("Failed to write {:?}", html_path))?;

    tracing::info!("Report written to {:?}", output_dir);
    Ok(())
}
