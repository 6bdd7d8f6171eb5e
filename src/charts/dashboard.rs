//! Three-panel dashboard: the GHG, waste and economic comparisons side by side

use std::fs;
use std::path::Path;

use super::{png_export, render, ChartSet};
use crate::config::ChartStyle;
use crate::error::ImpactResult;

pub const DASHBOARD_TITLE: &str = "Impact Projections";

/// Render the dashboard to PNG bytes
pub fn render_dashboard(set: &ChartSet, style: &ChartStyle) -> ImpactResult<Vec<u8>> {
    let (width, height) = (style.dashboard_width_px, style.dashboard_height_px);

    let pixels = render::render_pixels(width, height, |root| {
        let title_size = (f64::from(height) / 18.0).max(12.0);
        let body = root.titled(DASHBOARD_TITLE, (style.font_family.as_str(), title_size))?;

        let panels = body.split_evenly((1, 3));
        for (panel, artifact) in panels.iter().zip(set.iter()) {
            render::draw_comparison(panel, artifact, style)?;
        }
        Ok(())
    })?;

    tracing::debug!(width, height, "rendered dashboard");
    png_export::encode_tight(&pixels, width, height, style)
}

/// Render the dashboard and write it to `path`
pub fn export_dashboard(set: &ChartSet, path: &Path, style: &ChartStyle) -> ImpactResult<()> {
    let bytes = render_dashboard(set, style)?;
    fs::write(path, bytes)?;
    tracing::info!("Wrote dashboard: {:?}", path);
    Ok(())
}
