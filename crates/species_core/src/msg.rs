use crate::{Generation, Member, Species};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Application is up; triggers the one-time catalog load.
    Started,
    /// Engine finished one catalog page.
    CatalogProgress { pages: usize, species: usize },
    /// Engine delivered the complete, flattened catalog.
    CatalogLoaded(Vec<Species>),
    /// Catalog load aborted; carries a human readable reason.
    CatalogFailed(String),
    /// User edited the option filter.
    FilterChanged(String),
    /// User picked a species by name.
    SpeciesSelected(String),
    /// Engine resolved every member of a selection attempt.
    MembersResolved {
        generation: Generation,
        members: Vec<Member>,
    },
    /// At least one member fetch of a selection attempt failed.
    MembersFailed {
        generation: Generation,
        reason: String,
    },
}
