use crate::Generation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch every catalog page and report back with `CatalogLoaded`/`CatalogFailed`.
    LoadCatalog,
    /// Fetch all member references of one species concurrently.
    ResolveMembers {
        generation: Generation,
        species: String,
        member_refs: Vec<String>,
    },
}
