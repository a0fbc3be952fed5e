use crate::view_model::{chart_points, species_options, AppViewModel, LoadProgress, SpeciesOption};

/// Monotonic number attached to every selection attempt.
pub type Generation = u64;

/// One species entry of the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Species {
    pub name: String,
    pub member_refs: Vec<String>,
}

/// One resolved member of a species. Measurements stay textual.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub name: String,
    pub height: String,
    pub mass: String,
    pub gender: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingSelection {
    generation: Generation,
    species: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    catalog: Vec<Species>,
    options: Vec<SpeciesOption>,
    loading: bool,
    load_progress: Option<LoadProgress>,
    filter: String,
    latest_generation: Generation,
    pending: Option<PendingSelection>,
    selected: Option<String>,
    members: Vec<Member>,
    notice: Option<String>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        let needle = self.filter.trim().to_lowercase();
        let options = self
            .options
            .iter()
            .filter(|option| needle.is_empty() || option.text.to_lowercase().contains(&needle))
            .cloned()
            .collect();

        AppViewModel {
            options,
            option_count: self.options.len(),
            filter: self.filter.clone(),
            loading: self.loading,
            load_progress: self.load_progress,
            selected: self.selected.clone(),
            pending: self.pending.as_ref().map(|p| p.species.clone()),
            members: self.members.clone(),
            points: chart_points(&self.members),
            notice: self.notice.clone(),
            dirty: self.dirty,
        }
    }

    /// Returns whether a render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn catalog(&self) -> &[Species] {
        &self.catalog
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn latest_generation(&self) -> Generation {
        self.latest_generation
    }

    /// First species with exactly this name; later duplicates are shadowed.
    /// Same rule as `species_engine::find_species`, applied to the catalog the
    /// viewer holds so a selection only ships member references to the engine.
    pub fn find_species(&self, name: &str) -> Option<&Species> {
        self.catalog.iter().find(|species| species.name == name)
    }

    pub(crate) fn should_load_catalog(&self) -> bool {
        !self.loading && self.catalog.is_empty()
    }

    pub(crate) fn begin_catalog_load(&mut self) {
        self.loading = true;
        self.load_progress = None;
        self.dirty = true;
    }

    pub(crate) fn apply_catalog_progress(&mut self, pages: usize, species: usize) {
        if !self.loading {
            return;
        }
        self.load_progress = Some(LoadProgress { pages, species });
        self.dirty = true;
    }

    pub(crate) fn replace_catalog(&mut self, catalog: Vec<Species>) {
        self.options = species_options(&catalog);
        self.catalog = catalog;
        self.loading = false;
        self.load_progress = None;
        self.notice = None;
        self.dirty = true;
    }

    pub(crate) fn fail_catalog(&mut self, reason: &str) {
        self.loading = false;
        self.load_progress = None;
        self.notice = Some(format!("Could not load species catalog: {reason}"));
        self.dirty = true;
    }

    pub(crate) fn set_filter(&mut self, filter: String) {
        if self.filter != filter {
            self.filter = filter;
            self.dirty = true;
        }
    }

    pub(crate) fn start_selection(&mut self, species: &str) -> Generation {
        self.latest_generation += 1;
        self.pending = Some(PendingSelection {
            generation: self.latest_generation,
            species: species.to_owned(),
        });
        self.dirty = true;
        self.latest_generation
    }

    /// Replaces the member list when `generation` is the latest attempt.
    /// Returns `false` for superseded results, which leave the state untouched.
    pub(crate) fn accept_members(&mut self, generation: Generation, members: Vec<Member>) -> bool {
        let Some(pending) = self.take_pending(generation) else {
            return false;
        };
        self.selected = Some(pending.species);
        self.members = members;
        self.notice = None;
        self.dirty = true;
        true
    }

    /// Records a failed attempt without touching the displayed members.
    pub(crate) fn reject_members(&mut self, generation: Generation, reason: &str) -> bool {
        let Some(pending) = self.take_pending(generation) else {
            return false;
        };
        self.notice = Some(format!(
            "Could not load members of {}: {reason}",
            pending.species
        ));
        self.dirty = true;
        true
    }

    fn take_pending(&mut self, generation: Generation) -> Option<PendingSelection> {
        if generation != self.latest_generation {
            return None;
        }
        let is_current = self
            .pending
            .as_ref()
            .is_some_and(|pending| pending.generation == generation);
        if is_current {
            self.pending.take()
        } else {
            None
        }
    }
}
