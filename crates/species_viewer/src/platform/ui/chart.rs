//! ECharts-compatible chart configuration for the current selection.
//!
//! The option object is what a web chart renderer would consume; the viewer
//! shows it in the JSON panel. `dataset.source` carries members exactly as fetched
//! and `encode` maps `height` to x and `mass` to y.

use serde::Serialize;
use species_core::{AppViewModel, ChartPoint};

use super::constants::*;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOption {
    pub background_color: LinearGradient,
    pub title: Title,
    pub x_axis: ValueAxis,
    pub y_axis: ValueAxis,
    pub dataset: Dataset,
    pub tooltip: Tooltip,
    pub series: Vec<ScatterSeries>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinearGradient {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub x: u8,
    pub y: u8,
    pub x2: u8,
    pub y2: u8,
    pub color_stops: Vec<ColorStop>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorStop {
    pub offset: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Title {
    pub text: &'static str,
    pub left: &'static str,
    pub top: u32,
    pub text_style: TextStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub color: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueAxis {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub name: String,
    pub name_text_style: TextStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    pub source: Vec<DatasetRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetRow {
    pub name: String,
    pub height: String,
    pub mass: String,
    pub gender: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tooltip {
    pub position: &'static str,
    pub formatter: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScatterSeries {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub symbol_size: u32,
    pub item_style: ItemStyle,
    pub encode: Encode,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemStyle {
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Encode {
    pub x: &'static str,
    pub y: &'static str,
}

pub fn build_chart(view: &AppViewModel) -> ChartOption {
    let has_members = !view.members.is_empty();
    let axis_name = |name: &str| if has_members { name.to_string() } else { String::new() };

    ChartOption {
        background_color: LinearGradient {
            kind: "linear",
            x: 0,
            y: 0,
            x2: 1,
            y2: 1,
            color_stops: vec![
                ColorStop {
                    offset: 0.0,
                    color: BACKGROUND_FROM,
                },
                ColorStop {
                    offset: 1.0,
                    color: BACKGROUND_TO,
                },
            ],
        },
        title: Title {
            text: TITLE,
            left: "center",
            top: 20,
            text_style: TextStyle {
                color: TITLE_COLOR,
                font_size: Some(30),
            },
        },
        x_axis: value_axis(axis_name(X_AXIS_NAME), axis_max(&view.points, |p| p.height)),
        y_axis: value_axis(axis_name(Y_AXIS_NAME), axis_max(&view.points, |p| p.mass)),
        dataset: Dataset {
            source: view
                .members
                .iter()
                .map(|member| DatasetRow {
                    name: member.name.clone(),
                    height: member.height.clone(),
                    mass: member.mass.clone(),
                    gender: member.gender.clone(),
                })
                .collect(),
        },
        tooltip: Tooltip {
            position: "top",
            formatter: TOOLTIP_FORMATTER,
        },
        series: vec![ScatterSeries {
            kind: "scatter",
            symbol_size: SYMBOL_SIZE,
            item_style: ItemStyle { color: POINT_COLOR },
            encode: Encode {
                x: "height",
                y: "mass",
            },
        }],
    }
}

fn value_axis(name: String, max: Option<f64>) -> ValueAxis {
    ValueAxis {
        kind: "value",
        name,
        name_text_style: TextStyle {
            color: AXIS_NAME_COLOR,
            font_size: None,
        },
        max,
    }
}

/// Largest coordinate among plottable points, padded and rounded up.
pub fn axis_max(points: &[ChartPoint], coordinate: impl Fn(&ChartPoint) -> Option<f64>) -> Option<f64> {
    points
        .iter()
        .filter(|point| point.is_plottable())
        .filter_map(|point| coordinate(point))
        .reduce(f64::max)
        .map(|max| (max * AXIS_HEADROOM).ceil())
}

#[cfg(test)]
mod tests {
    use super::*;
    use species_core::{chart_points, Member};

    fn view_with(members: Vec<Member>) -> AppViewModel {
        AppViewModel {
            points: chart_points(&members),
            members,
            ..AppViewModel::default()
        }
    }

    fn member(name: &str, height: &str, mass: &str) -> Member {
        Member {
            name: name.into(),
            height: height.into(),
            mass: mass.into(),
            gender: "male".into(),
        }
    }

    #[test]
    fn empty_selection_has_unnamed_open_axes() {
        let chart = build_chart(&AppViewModel::default());

        assert_eq!(chart.x_axis.name, "");
        assert_eq!(chart.y_axis.name, "");
        assert_eq!(chart.x_axis.max, None);
        assert!(chart.dataset.source.is_empty());
    }

    #[test]
    fn axes_are_padded_from_plottable_points() {
        let chart = build_chart(&view_with(vec![
            member("Chewbacca", "228", "112"),
            member("Tarfful", "234", "136"),
            member("Unknown giant", "400", "unknown"),
        ]));

        assert_eq!(chart.x_axis.name, "Height");
        assert_eq!(chart.y_axis.name, "Mass");
        assert_eq!(chart.x_axis.max, Some(242.0));
        assert_eq!(chart.y_axis.max, Some(141.0));
        assert_eq!(chart.dataset.source.len(), 3);
    }

    #[test]
    fn serializes_with_chart_field_names() {
        let chart = build_chart(&view_with(vec![member("Chewbacca", "228", "112")]));
        let json = serde_json::to_value(&chart).unwrap();

        assert_eq!(json["dataset"]["source"][0]["name"], "Chewbacca");
        assert_eq!(json["dataset"]["source"][0]["height"], "228");
        assert_eq!(json["series"][0]["type"], "scatter");
        assert_eq!(json["series"][0]["encode"]["x"], "height");
        assert_eq!(json["xAxis"]["type"], "value");
        assert_eq!(json["backgroundColor"]["colorStops"][1]["color"], BACKGROUND_TO);
        assert!(json["yAxis"]["nameTextStyle"].get("fontSize").is_none());
    }
}
