//! Plotters drawing for comparison charts
//!
//! Everything is drawn into an in-memory RGB buffer so the caller decides
//! what happens to the pixels (tight crop, PNG encoding, file output).

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::error::Error;

use super::ChartArtifact;
use crate::config::ChartStyle;
use crate::error::{ImpactError, ImpactResult};

pub type DrawResult<T> = Result<T, Box<dyn Error>>;

/// Bar width as a fraction of its slot
const BAR_WIDTH: f64 = 0.6;

/// Allocate a white `width` × `height` RGB canvas, run `draw` on it and
/// return the raw pixels
pub fn render_pixels<F>(width: u32, height: u32, draw: F) -> ImpactResult<Vec<u8>>
where
    F: for<'b> FnOnce(&DrawingArea<BitMapBackend<'b>, Shift>) -> DrawResult<()>,
{
    let mut buffer = vec![0u8; width as usize * height as usize * 3];

    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(render_error)?;
        draw(&root).map_err(|e| ImpactError::Render(e.to_string()))?;
        root.present().map_err(render_error)?;
    }

    Ok(buffer)
}

fn render_error<E: std::fmt::Display>(e: E) -> ImpactError {
    ImpactError::Render(e.to_string())
}

fn font<'a>(family: &'a str, size: f64) -> TextStyle<'a> {
    TextStyle::from((family, size))
}

/// Draw one baseline-vs-projection bar chart onto `area`
///
/// Font sizes follow the area height, so the same routine serves the
/// standalone charts and the dashboard panels.
pub fn draw_comparison<DB>(
    area: &DrawingArea<DB, Shift>,
    artifact: &ChartArtifact,
    style: &ChartStyle,
) -> DrawResult<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let (_, height) = area.dim_in_pixel();
    let h = f64::from(height.max(1));
    let family = style.font_family.as_str();

    let title_font = font(family, (h / 24.0).max(10.0));
    let label_font = font(family, (h / 34.0).max(8.0));
    let value_font = font(family, (h / 30.0).max(8.0));
    let offset = (h / 90.0).round().max(2.0) as i32;

    let mut chart = ChartBuilder::on(area)
        .caption(&artifact.title, title_font)
        .margin((h / 40.0).max(5.0))
        .x_label_area_size((h / 12.0).max(20.0))
        .y_label_area_size((h / 7.0).max(40.0))
        .build_cartesian_2d(0.0..2.0, 0.0..artifact.y_max)?;

    let y_fmt = |v: &f64| artifact.value_format.format_axis(*v);
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(0)
        .y_labels(6)
        .y_desc(artifact.axis_label.as_str())
        .y_label_formatter(&y_fmt)
        .label_style(label_font.clone())
        .axis_desc_style(label_font.clone())
        .draw()?;

    let inset = (1.0 - BAR_WIDTH) / 2.0;
    for (i, bar) in artifact.bars.iter().enumerate() {
        let x = i as f64;
        let top = bar.value.max(0.0);
        let [r, g, b] = bar.color;

        chart.draw_series(std::iter::once(Rectangle::new(
            [(x + inset, 0.0), (x + 1.0 - inset, top)],
            RGBColor(r, g, b).filled(),
        )))?;

        chart.draw_series(std::iter::once(
            EmptyElement::at((x + 0.5, top))
                + Text::new(
                    bar.value_label.clone(),
                    (0, -offset),
                    value_font.pos(Pos::new(HPos::Center, VPos::Bottom)),
                ),
        ))?;

        chart.draw_series(std::iter::once(
            EmptyElement::at((x + 0.5, 0.0))
                + Text::new(
                    bar.label.clone(),
                    (0, offset),
                    label_font.pos(Pos::new(HPos::Center, VPos::Top)),
                ),
        ))?;
    }

    Ok(())
}
