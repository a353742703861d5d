//! SVG rendering of grouped bar figures.
//!
//! Rendering never touches the filesystem: a figure is drawn into an
//! in-memory SVG document and returned as a string.

use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::model::{ChartError, Figure, GroupedBarChart};
use super::style::ChartStyle;

const FONT_FAMILY: &str = "sans-serif";

type DrawResult<T> = Result<T, DrawingAreaErrorKind<std::io::Error>>;

/// Render a figure to an SVG document
pub fn render_svg(style: &ChartStyle, figure: &Figure) -> Result<String, ChartError> {
    figure.validate()?;

    let mut svg = String::new();
    draw_figure(&mut svg, style, figure).map_err(|e| ChartError::Render {
        figure: figure.name.clone(),
        message: e.to_string(),
    })?;

    Ok(svg)
}

fn draw_figure(svg: &mut String, style: &ChartStyle, figure: &Figure) -> DrawResult<()> {
    let root = SVGBackend::with_string(svg, style.canvas_size(figure.panels.len())).into_drawing_area();
    root.fill(&WHITE)?;

    let areas = root.split_evenly((1, figure.panels.len()));
    for (area, chart) in areas.iter().zip(&figure.panels) {
        draw_panel(area, style, chart)?;
    }

    root.present()?;
    Ok(())
}

fn draw_panel(
    area: &DrawingArea<SVGBackend<'_>, Shift>,
    style: &ChartStyle,
    chart: &GroupedBarChart,
) -> DrawResult<()> {
    let n = chart.categories.len();
    let x_range = -0.5..n as f64 - 0.5;

    let mut ctx = ChartBuilder::on(area)
        .caption(&chart.title, (FONT_FAMILY, style.title_font_size()))
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(x_range, 0.0..chart.y_upper())?;

    let category_label = |x: &f64| {
        let rounded = x.round();
        if (x - rounded).abs() > 1e-6 || rounded < 0.0 {
            return String::new();
        }
        chart.categories.get(rounded as usize).cloned().unwrap_or_default()
    };

    let mut mesh = ctx.configure_mesh();
    mesh.disable_x_mesh()
        .x_labels(n)
        .x_label_formatter(&category_label)
        .y_desc(chart.y_label.as_str())
        .label_style((FONT_FAMILY, style.font_size))
        .axis_desc_style((FONT_FAMILY, style.font_size));
    if !chart.x_label.is_empty() {
        mesh.x_desc(chart.x_label.as_str());
    }
    if style.grid {
        mesh.bold_line_style(BLACK.mix(style.grid_alpha))
            .light_line_style(BLACK.mix(style.grid_alpha * 0.3));
    } else {
        mesh.disable_y_mesh();
    }
    mesh.draw()?;

    let width = chart.bar_width();
    for (series_index, series) in chart.series.iter().enumerate() {
        let color = series.color.rgb().mix(series.opacity);

        let bars = series.values.iter().enumerate().map(move |(category_index, &value)| {
            let center = chart.bar_center(category_index, series_index);
            Rectangle::new(
                [(center - width / 2.0, 0.0), (center + width / 2.0, value)],
                color.filled(),
            )
        });
        ctx.draw_series(bars)?
            .label(series.name.as_str())
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 12, y + 5)], color.filled()));

        if chart.value_labels {
            let text_style = TextStyle::from((FONT_FAMILY, style.font_size * 0.85).into_font())
                .pos(Pos::new(HPos::Center, VPos::Bottom));
            ctx.draw_series(series.values.iter().enumerate().map(|(category_index, &value)| {
                Text::new(
                    format!("{:.1}", value),
                    (chart.bar_center(category_index, series_index), value),
                    text_style.clone(),
                )
            }))?;
        }
    }

    // Fixed axes put the tallest bars near the top edge
    let legend_position = if chart.y_max.is_some() {
        SeriesLabelPosition::LowerRight
    } else {
        SeriesLabelPosition::UpperRight
    };
    ctx.configure_series_labels()
        .position(legend_position)
        .label_font((FONT_FAMILY, style.font_size))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::datasets;
    use crate::charts::model::{BarColor, BarSeries};

    #[test]
    fn test_render_contains_labels() {
        let svg = render_svg(&ChartStyle::default(), &datasets::fpr_comparison()).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("</svg>"));
        assert!(svg.contains("SecRPL"));
        assert!(svg.contains("8s"));
        assert!(svg.contains("False Positive Rate (%)"));
    }

    #[test]
    fn test_render_uses_canvas_size() {
        let svg = render_svg(&ChartStyle::default(), &datasets::pdr_comparison()).unwrap();
        assert!(svg.contains("width=\"1400\""));
        assert!(svg.contains("PDR - Mobile Network"));
    }

    #[test]
    fn test_value_labels() {
        let svg = render_svg(&ChartStyle::default(), &datasets::memory_overhead()).unwrap();
        assert!(svg.contains("92.0"));
        assert!(svg.contains("4.5"));
    }

    #[test]
    fn test_every_figure_renders_its_categories() {
        let style = ChartStyle::default();
        for figure in datasets::reference_figures() {
            let svg = render_svg(&style, &figure).unwrap();
            for chart in &figure.panels {
                for category in &chart.categories {
                    assert!(svg.contains(category.as_str()), "{} missing {}", figure.name, category);
                }
            }
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        let style = ChartStyle::default();
        let figure = datasets::delay_comparison();
        assert_eq!(render_svg(&style, &figure).unwrap(), render_svg(&style, &figure).unwrap());
    }

    #[test]
    fn test_invalid_figure_is_rejected() {
        let chart = GroupedBarChart::new("bad", "x", "y")
            .categories(["a", "b", "c"])
            .series(BarSeries::new("short", vec![1.0], BarColor::Red));
        let figure = Figure::new("bad", vec![chart]);
        assert!(matches!(
            render_svg(&ChartStyle::default(), &figure),
            Err(ChartError::SeriesLengthMismatch { .. })
        ));
    }
}
