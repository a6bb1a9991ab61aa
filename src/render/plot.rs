//! I-V chart rendering with `plotters`.

use std::path::Path;

use log::info;
use plotters::prelude::*;

use super::PlotConfig;
use crate::error::{LabError, Result};
use crate::readings::PlotView;

/// Render the I-V characteristics of `view` to an SVG file at `path`.
///
/// Axis bounds are fixed by `config`; data outside them is clipped.
pub fn render_svg(view: &PlotView, config: &PlotConfig, path: &Path) -> Result<()> {
    let root = SVGBackend::new(path, (config.width, config.height)).into_drawing_area();
    draw(&root, view, config)?;
    info!(
        "rendered I-V plot ({} points) to {}",
        view.points.len(),
        path.display()
    );
    Ok(())
}

/// Render the I-V characteristics of `view` to an SVG document in memory.
pub fn render_svg_string(view: &PlotView, config: &PlotConfig) -> Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (config.width, config.height))
            .into_drawing_area();
        draw(&root, view, config)?;
    }
    Ok(svg)
}

fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    view: &PlotView,
    config: &PlotConfig,
) -> Result<()> {
    let err = |e: DrawingAreaErrorKind<DB::ErrorType>| LabError::plot(e.to_string());

    root.fill(&WHITE).map_err(err)?;

    let (x_min, x_max) = config.x_range;
    let (y_min, y_max) = config.y_range;

    let mut chart = ChartBuilder::on(root)
        .caption(&config.title, ("sans-serif", 24).into_font())
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(err)?;

    chart
        .configure_mesh()
        .x_desc("Voltage (V)")
        .y_desc("Current (A)")
        .y_label_formatter(&|y| format!("{:.3}", y))
        .draw()
        .map_err(err)?;

    // Zero-axis reference lines
    chart
        .draw_series(LineSeries::new(vec![(x_min, 0.0), (x_max, 0.0)], &BLACK))
        .map_err(err)?;
    chart
        .draw_series(LineSeries::new(vec![(0.0, y_min), (0.0, y_max)], &BLACK))
        .map_err(err)?;

    if let Some(curve) = &view.curve {
        chart
            .draw_series(LineSeries::new(curve.iter().copied(), &BLUE))
            .map_err(err)?
            .label("I-V Curve")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));
    }

    chart
        .draw_series(
            view.points
                .iter()
                .map(|r| Circle::new((r.voltage, r.current), 4, RED.filled())),
        )
        .map_err(err)?
        .label("Data Points")
        .legend(|(x, y)| Circle::new((x + 10, y), 4, RED.filled()));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()
        .map_err(err)?;

    root.present().map_err(err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::readings::Reading;

    fn view(readings: &[Reading]) -> PlotView {
        PlotView::derive(readings, 200)
    }

    #[test]
    fn test_svg_has_title_axes_and_legends() {
        let v = view(&[Reading::new(-1.0, -1e-2), Reading::new(0.1, 1.1e-5)]);
        let svg = render_svg_string(&v, &PlotConfig::default()).unwrap();
        for text in [
            "PN Junction I-V Characteristics",
            "Voltage (V)",
            "Current (A)",
            "I-V Curve",
            "Data Points",
        ] {
            assert!(svg.contains(text), "missing '{}'", text);
        }
    }

    #[test]
    fn test_svg_single_voltage_has_points_only() {
        let v = view(&[Reading::new(0.5, 1.0), Reading::new(0.5, 2.0)]);
        let svg = render_svg_string(&v, &PlotConfig::default()).unwrap();
        assert!(svg.contains("Data Points"));
        assert!(!svg.contains("I-V Curve"));
    }

    #[test]
    fn test_svg_uses_configured_size() {
        let v = view(&[Reading::new(0.0, 0.0)]);
        let config = PlotConfig::new().with_size(400, 300);
        let svg = render_svg_string(&v, &config).unwrap();
        assert!(svg.contains("width=\"400\""));
        assert!(svg.contains("height=\"300\""));
    }
}
