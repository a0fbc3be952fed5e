use ratatui::widgets::ListState;
use species_core::SpeciesOption;

/// Local state of the searchable species list: the filter being typed and
/// the highlighted row among the currently visible options.
#[derive(Debug, Default)]
pub struct Selector {
    pub filter: String,
    pub list: ListState,
}

impl Selector {
    /// Keeps the highlight on a visible row after the option list changed.
    pub fn sync(&mut self, option_count: usize) {
        let next = match (self.list.selected(), option_count) {
            (_, 0) => None,
            (Some(index), count) => Some(index.min(count - 1)),
            (None, _) => Some(0),
        };
        self.list.select(next);
    }

    pub fn move_by(&mut self, delta: isize, option_count: usize) {
        if option_count == 0 {
            self.list.select(None);
            return;
        }
        let current = self.list.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, option_count as isize - 1);
        self.list.select(Some(next as usize));
    }

    pub fn highlighted<'a>(&self, options: &'a [SpeciesOption]) -> Option<&'a SpeciesOption> {
        self.list.selected().and_then(|index| options.get(index))
    }
}
