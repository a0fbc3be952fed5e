use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => {
            if state.should_load_catalog() {
                state.begin_catalog_load();
                vec![Effect::LoadCatalog]
            } else {
                Vec::new()
            }
        }
        Msg::CatalogProgress { pages, species } => {
            state.apply_catalog_progress(pages, species);
            Vec::new()
        }
        Msg::CatalogLoaded(catalog) => {
            state.replace_catalog(catalog);
            Vec::new()
        }
        Msg::CatalogFailed(reason) => {
            state.fail_catalog(&reason);
            Vec::new()
        }
        Msg::FilterChanged(filter) => {
            state.set_filter(filter);
            Vec::new()
        }
        Msg::SpeciesSelected(name) => {
            // Unknown names leave the current selection and members as they are.
            let found = state
                .find_species(&name)
                .map(|species| (species.name.clone(), species.member_refs.clone()));
            let Some((species, member_refs)) = found else {
                return (state, Vec::new());
            };
            let generation = state.start_selection(&species);
            vec![Effect::ResolveMembers {
                generation,
                species,
                member_refs,
            }]
        }
        Msg::MembersResolved {
            generation,
            members,
        } => {
            state.accept_members(generation, members);
            Vec::new()
        }
        Msg::MembersFailed { generation, reason } => {
            state.reject_members(generation, &reason);
            Vec::new()
        }
    };

    (state, effects)
}
