use ratatui::style::Style;
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Block, Chart, Dataset, GraphType};
use species_core::ChartPoint;

use super::chart::axis_max;
use super::constants::{AXIS_FG, POINT_FG, X_AXIS_NAME, Y_AXIS_NAME};

/// Plottable coordinates with the padded axis maxima, both axes from zero.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterData {
    pub points: Vec<(f64, f64)>,
    pub x_max: f64,
    pub y_max: f64,
}

impl ScatterData {
    /// `None` when no point has both a height and a mass.
    pub fn from_points(points: &[ChartPoint]) -> Option<Self> {
        let x_max = axis_max(points, |p| p.height)?;
        let y_max = axis_max(points, |p| p.mass)?;
        let points = points
            .iter()
            .filter_map(|point| Some((point.height?, point.mass?)))
            .collect();
        Some(Self {
            points,
            x_max: x_max.max(1.0),
            y_max: y_max.max(1.0),
        })
    }
}

pub fn scatter_chart(data: &ScatterData, title: String) -> Chart<'_> {
    let dataset = Dataset::default()
        .marker(Marker::Dot)
        .graph_type(GraphType::Scatter)
        .style(Style::default().fg(POINT_FG))
        .data(&data.points);

    Chart::new(vec![dataset])
        .block(Block::bordered().title(title))
        .x_axis(value_axis(X_AXIS_NAME, data.x_max))
        .y_axis(value_axis(Y_AXIS_NAME, data.y_max))
}

fn value_axis(name: &'static str, max: f64) -> Axis<'static> {
    Axis::default()
        .title(name)
        .style(Style::default().fg(AXIS_FG))
        .bounds([0.0, max])
        .labels(vec![Span::raw("0"), Span::raw(format_value(max))])
}

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}
