use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use species_core::{Msg, SpeciesOption};

use super::ui::selector::Selector;

const PAGE_STEP: isize = 10;

/// What a key press asks the main loop to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Dispatch(Msg),
    /// Only the highlight moved.
    Redraw,
    ToggleChartJson,
    Quit,
}

/// Maps one key press onto the selector. `options` are the rows currently
/// shown, so Enter emits the exact value of the highlighted species.
pub fn handle_key(
    key: KeyEvent,
    selector: &mut Selector,
    options: &[SpeciesOption],
) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc if selector.filter.is_empty() => Some(Action::Quit),
        KeyCode::Esc => {
            selector.filter.clear();
            Some(filter_changed(selector))
        }
        KeyCode::Tab => Some(Action::ToggleChartJson),
        KeyCode::Up => move_highlight(selector, -1, options),
        KeyCode::Down => move_highlight(selector, 1, options),
        KeyCode::PageUp => move_highlight(selector, -PAGE_STEP, options),
        KeyCode::PageDown => move_highlight(selector, PAGE_STEP, options),
        KeyCode::Enter => selector
            .highlighted(options)
            .map(|option| Action::Dispatch(Msg::SpeciesSelected(option.value.clone()))),
        KeyCode::Backspace => {
            selector.filter.pop()?;
            Some(filter_changed(selector))
        }
        KeyCode::Char(c) => {
            selector.filter.push(c);
            Some(filter_changed(selector))
        }
        _ => None,
    }
}

fn move_highlight(selector: &mut Selector, delta: isize, options: &[SpeciesOption]) -> Option<Action> {
    selector.move_by(delta, options.len());
    Some(Action::Redraw)
}

fn filter_changed(selector: &mut Selector) -> Action {
    // The visible rows change; start again from the top match.
    selector.list.select(Some(0));
    Action::Dispatch(Msg::FilterChanged(selector.filter.clone()))
}
