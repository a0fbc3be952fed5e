use ratatui::style::Color;

pub const TITLE: &str = "Star Wars Species";
pub const PROMPT: &str = "Pick a Species:";
pub const HELP: &str =
    "type to filter | Up/Down move | Enter select | Tab chart JSON | Esc clear/quit";
pub const EMPTY_CHART: &str = "Select a species to plot its members.";
pub const NOTHING_PLOTTABLE: &str = "No member has both a numeric height and mass.";

pub const X_AXIS_NAME: &str = "Height";
pub const Y_AXIS_NAME: &str = "Mass";
/// Axis maxima are padded by this factor and rounded up.
pub const AXIS_HEADROOM: f64 = 1.03;

pub const SELECTOR_WIDTH: u16 = 36;
/// Rows of the chart pane kept for the plot before the member list gets any.
pub const MIN_PLOT_HEIGHT: u16 = 10;

// Chart option colors, as the web renderer expects them.
pub const BACKGROUND_FROM: &str = "#2c343c";
pub const BACKGROUND_TO: &str = "#051937";
pub const TITLE_COLOR: &str = "#cfcfcf";
pub const AXIS_NAME_COLOR: &str = "#f2f2f2";
pub const POINT_COLOR: &str = "#f2e879";
pub const SYMBOL_SIZE: u32 = 15;
pub const TOOLTIP_FORMATTER: &str = "{@name}<br/>{@gender}";

// Terminal colors.
pub const TITLE_FG: Color = Color::Rgb(0xcf, 0xcf, 0xcf);
pub const AXIS_FG: Color = Color::Rgb(0xf2, 0xf2, 0xf2);
pub const POINT_FG: Color = Color::Rgb(0xf2, 0xe8, 0x79);
pub const FOCUS_FG: Color = Color::LightGreen;
pub const NOTICE_FG: Color = Color::LightRed;
pub const HELP_FG: Color = Color::Gray;
