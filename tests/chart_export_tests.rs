// Chart export tests
//
// Purpose: Render the comparison charts and dashboard to PNG and check
//          determinism, the PNG header, the pHYs resolution and file export
// Run with: cargo test --test chart_export_tests

use impact_projector::charts::{export_dashboard, render_dashboard};
use impact_projector::{
    build_comparison, ChartSet, ChartStyle, ImpactModel, MetricFamily, MetricSpec, ScenarioInput,
};

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

fn chart_set(input: ScenarioInput, style: &ChartStyle) -> ChartSet {
    let model = ImpactModel::standard();
    ChartSet::build(&model.baseline(), &model.compute(&input), style)
}

fn ihdr_size(png: &[u8]) -> (u32, u32) {
    // signature (8) + length (4) + "IHDR" (4)
    let w = u32::from_be_bytes([png[16], png[17], png[18], png[19]]);
    let h = u32::from_be_bytes([png[20], png[21], png[22], png[23]]);
    (w, h)
}

fn phys(png: &[u8]) -> Option<(u32, u32, u8)> {
    let at = png.windows(4).position(|w| w == b"pHYs")?;
    let d = &png[at + 4..at + 13];
    Some((
        u32::from_be_bytes([d[0], d[1], d[2], d[3]]),
        u32::from_be_bytes([d[4], d[5], d[6], d[7]]),
        d[8],
    ))
}

// =========================================================================
// Section 1: Single charts
// =========================================================================

#[test]
fn test_render_is_byte_identical() {
    let style = ChartStyle::default();
    let spec = MetricSpec::for_family(MetricFamily::Ghg);

    let first = build_comparison(12.0, 36.0, &spec).render_png(&style).unwrap();
    let second = build_comparison(12.0, 36.0, &spec).render_png(&style).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_png_header_and_resolution() {
    let style = ChartStyle::default();
    let charts = chart_set(ScenarioInput::default(), &style);

    for artifact in charts.iter() {
        let png = artifact.render_png(&style).unwrap();
        assert_eq!(&png[..8], &PNG_SIGNATURE);
        // 300 dpi = 11811 px/m
        assert_eq!(phys(&png), Some((11811, 11811, 1)));

        // Tight bounding box never grows past canvas plus padding
        let (w, h) = ihdr_size(&png);
        assert!(w > 0 && w <= style.width_px + 2 * style.tight_padding_px);
        assert!(h > 0 && h <= style.height_px + 2 * style.tight_padding_px);
    }
}

#[test]
fn test_custom_dpi() {
    let style = ChartStyle { dpi: 96, width_px: 480, height_px: 420, ..ChartStyle::default() };
    let charts = chart_set(ScenarioInput::new(5.0, 500.0, 1500.0), &style);
    let png = charts.waste.render_png(&style).unwrap();
    assert_eq!(phys(&png), Some((3780, 3780, 1)));
}

#[test]
fn test_charts_differ_between_scenarios() {
    let style = ChartStyle { width_px: 480, height_px: 420, ..ChartStyle::default() };
    let low = chart_set(ScenarioInput::new(2.0, 500.0, 1500.0), &style);
    let high = chart_set(ScenarioInput::new(20.0, 5000.0, 5000.0), &style);

    assert_ne!(
        low.economic_loss.render_png(&style).unwrap(),
        high.economic_loss.render_png(&style).unwrap()
    );
}

// =========================================================================
// Section 2: File export
// =========================================================================

#[test]
fn test_export_single_family() {
    let dir = tempfile::tempdir().unwrap();
    let style = ChartStyle { width_px: 600, height_px: 525, ..ChartStyle::default() };
    let charts = chart_set(ScenarioInput::default(), &style);

    let path = dir.path().join("ghg.png");
    charts.ghg.export_png(&path, &style).unwrap();

    let written = std::fs::read(&path).unwrap();
    assert_eq!(written, charts.ghg.render_png(&style).unwrap());
    // Other families were not exported
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn test_export_all() {
    let dir = tempfile::tempdir().unwrap();
    let style = ChartStyle { width_px: 600, height_px: 525, ..ChartStyle::default() };
    let charts = chart_set(ScenarioInput::new(15.0, 2000.0, 3500.0), &style);

    let paths = charts.export_all(dir.path(), &style).unwrap();
    assert_eq!(paths.len(), 3);
    for (path, family) in paths.iter().zip(MetricFamily::ALL) {
        assert_eq!(path.file_name().unwrap().to_str().unwrap(), format!("{}.png", family.slug()));
        assert_eq!(&std::fs::read(path).unwrap()[..8], &PNG_SIGNATURE);
    }
}

#[test]
fn test_export_all_missing_dir() {
    let dir = tempfile::tempdir().unwrap();
    let style = ChartStyle::default();
    let charts = chart_set(ScenarioInput::default(), &style);
    assert!(charts.export_all(&dir.path().join("missing"), &style).is_err());
}

// =========================================================================
// Section 3: Dashboard
// =========================================================================

#[test]
fn test_dashboard_export() {
    let dir = tempfile::tempdir().unwrap();
    let style = ChartStyle {
        dashboard_width_px: 1200,
        dashboard_height_px: 420,
        ..ChartStyle::default()
    };
    let charts = chart_set(ScenarioInput::default(), &style);

    let bytes = render_dashboard(&charts, &style).unwrap();
    assert_eq!(&bytes[..8], &PNG_SIGNATURE);
    assert_eq!(bytes, render_dashboard(&charts, &style).unwrap());

    let path = dir.path().join("dashboard.png");
    export_dashboard(&charts, &path, &style).unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), bytes);

    // Wider than any single panel
    let (w, _) = ihdr_size(&bytes);
    assert!(w > 400);
}
