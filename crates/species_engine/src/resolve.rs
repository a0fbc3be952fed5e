use futures_util::future::try_join_all;

use crate::fetch::{fetch_json, Fetcher};
use crate::{MemberRecord, ResolveFailure, SchemePolicy, SpeciesRecord};

/// First species named `name`; later entries with the same name are shadowed.
///
/// This is the lookup for callers holding raw catalog records. The viewer
/// keeps its catalog in `species_core::AppState`, looks names up there with
/// the same first-match rule and hands only the member references to
/// [`resolve_members`].
pub fn find_species<'a>(catalog: &'a [SpeciesRecord], name: &str) -> Option<&'a SpeciesRecord> {
    catalog.iter().find(|species| species.name == name)
}

/// Looks up `selected` and resolves all of its members.
///
/// Standalone form of the selection flow for callers without a state machine
/// in front of the engine.
///
/// Returns `Ok(None)` without issuing any request when no species matches.
pub async fn resolve_details(
    fetcher: &dyn Fetcher,
    catalog: &[SpeciesRecord],
    selected: &str,
    policy: SchemePolicy,
) -> Result<Option<Vec<MemberRecord>>, ResolveFailure> {
    let Some(species) = find_species(catalog, selected) else {
        return Ok(None);
    };
    resolve_members(fetcher, &species.member_refs, policy)
        .await
        .map(Some)
}

/// Fetches every reference concurrently; the result keeps reference order.
/// The first failure fails the whole batch.
pub async fn resolve_members(
    fetcher: &dyn Fetcher,
    member_refs: &[String],
    policy: SchemePolicy,
) -> Result<Vec<MemberRecord>, ResolveFailure> {
    let requests = member_refs.iter().map(|reference| async move {
        let target = policy.apply(reference);
        let result = fetch_json::<MemberRecord>(fetcher, &target).await;
        result.map_err(|source| ResolveFailure {
            reference: target,
            source,
        })
    });
    try_join_all(requests).await
}
