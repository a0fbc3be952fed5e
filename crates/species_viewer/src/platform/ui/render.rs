use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, Paragraph, Wrap};
use ratatui::Frame;
use species_core::{AppViewModel, ChartPoint};

use super::chart::build_chart;
use super::constants::*;
use super::scatter::{scatter_chart, ScatterData};
use super::selector::Selector;

/// What the right-hand pane shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartPanel {
    #[default]
    Plot,
    Json,
}

impl ChartPanel {
    pub fn toggled(self) -> Self {
        match self {
            ChartPanel::Plot => ChartPanel::Json,
            ChartPanel::Json => ChartPanel::Plot,
        }
    }
}

/// Draws one full screen for the current view.
pub fn draw(frame: &mut Frame<'_>, view: &AppViewModel, selector: &mut Selector, panel: ChartPanel) {
    let [title_area, body, status_area, help_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let title = Paragraph::new(TITLE)
        .style(Style::default().fg(TITLE_FG).add_modifier(Modifier::BOLD))
        .centered();
    frame.render_widget(title, title_area);

    let [selector_area, chart_area] =
        Layout::horizontal([Constraint::Length(SELECTOR_WIDTH), Constraint::Min(0)]).areas(body);
    draw_selector(frame, view, selector, selector_area);
    match panel {
        ChartPanel::Plot => draw_members(frame, view, chart_area),
        ChartPanel::Json => draw_chart_json(frame, view, chart_area),
    }

    frame.render_widget(Paragraph::new(status_line(view)), status_area);
    frame.render_widget(
        Paragraph::new(HELP).style(Style::default().fg(HELP_FG)),
        help_area,
    );
}

fn draw_selector(frame: &mut Frame<'_>, view: &AppViewModel, selector: &mut Selector, area: Rect) {
    let [filter_area, list_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

    let prompt = match &view.selected {
        Some(name) => format!("{PROMPT} [{name}]"),
        None => PROMPT.to_string(),
    };
    let filter = Paragraph::new(view.filter.as_str()).block(
        Block::bordered()
            .title(prompt)
            .border_style(Style::default().fg(FOCUS_FG)),
    );
    frame.render_widget(filter, filter_area);

    let items: Vec<ListItem> = view
        .options
        .iter()
        .map(|option| {
            let item = ListItem::new(option.text.as_str());
            if view.selected.as_deref() == Some(option.value.as_str()) {
                item.style(Style::default().add_modifier(Modifier::BOLD))
            } else {
                item
            }
        })
        .collect();
    let list = List::new(items)
        .block(Block::bordered().title(option_title(view)))
        .highlight_style(Style::default().fg(FOCUS_FG).add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, list_area, &mut selector.list);
}

fn option_title(view: &AppViewModel) -> String {
    if view.loading {
        return "loading...".to_string();
    }
    if view.option_count == 0 {
        return "no species".to_string();
    }
    if view.filter.trim().is_empty() {
        format!("{} species", view.option_count)
    } else {
        format!("{} of {} species", view.options.len(), view.option_count)
    }
}

fn draw_members(frame: &mut Frame<'_>, view: &AppViewModel, area: Rect) {
    let title = match &view.selected {
        Some(name) => format!("Members of {name}"),
        None => "Members".to_string(),
    };
    if view.members.is_empty() {
        let empty = Paragraph::new(EMPTY_CHART).block(Block::bordered().title(title));
        frame.render_widget(empty, area);
        return;
    }

    let legend_height =
        (view.points.len() as u16 + 2).min(area.height.saturating_sub(MIN_PLOT_HEIGHT));
    let [plot_area, legend_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(legend_height)]).areas(area);

    match ScatterData::from_points(&view.points) {
        Some(data) => frame.render_widget(scatter_chart(&data, title), plot_area),
        None => frame.render_widget(
            Paragraph::new(NOTHING_PLOTTABLE).block(Block::bordered().title(title)),
            plot_area,
        ),
    }

    // Tooltip text for every point: name and gender.
    let legend: Vec<ListItem> = view
        .points
        .iter()
        .map(|point| ListItem::new(legend_line(point)))
        .collect();
    frame.render_widget(
        List::new(legend).block(Block::bordered().title(format!("{} members", view.points.len()))),
        legend_area,
    );
}

fn legend_line(point: &ChartPoint) -> String {
    match (point.height, point.mass) {
        (Some(height), Some(mass)) => {
            format!("{} / {} ({height}, {mass})", point.name, point.gender)
        }
        _ => format!("{} / {} (not plotted)", point.name, point.gender),
    }
}

fn draw_chart_json(frame: &mut Frame<'_>, view: &AppViewModel, area: Rect) {
    let json = serde_json::to_string_pretty(&build_chart(view))
        .unwrap_or_else(|err| format!("chart option unavailable: {err}"));
    let paragraph = Paragraph::new(json)
        .block(Block::bordered().title("Chart option (JSON)"))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn status_line(view: &AppViewModel) -> Line<'static> {
    let mut spans = Vec::new();
    if let Some(notice) = &view.notice {
        spans.push(Span::styled(
            format!("! {notice}"),
            Style::default().fg(NOTICE_FG),
        ));
    }
    if view.loading {
        let text = match view.load_progress {
            Some(progress) => format!(
                "Loading catalog... ({} pages, {} species)",
                progress.pages, progress.species
            ),
            None => "Loading catalog...".to_string(),
        };
        spans.push(Span::raw(text));
    } else if let Some(pending) = &view.pending {
        spans.push(Span::raw(format!("Loading members of {pending}...")));
    }
    if spans.len() > 1 {
        spans.insert(1, Span::raw("  "));
    }
    Line::from(spans)
}
