//! Species engine: remote catalog and member fetching.
mod catalog;
mod engine;
mod fetch;
mod resolve;
mod scheme;
mod schema;
mod types;

pub use catalog::{load_catalog, ChannelProgressSink, ProgressSink};
pub use engine::{EngineConfig, EngineHandle, DEFAULT_CATALOG_ROOT, DEFAULT_PAGE_LIMIT};
pub use fetch::{fetch_json, FetchSettings, Fetcher, ReqwestFetcher};
pub use resolve::{find_species, resolve_details, resolve_members};
pub use scheme::SchemePolicy;
pub use schema::{CatalogPage, MemberRecord, SpeciesRecord};
pub use types::{
    EngineEvent, FailureKind, FetchError, FetchMetadata, FetchOutput, Generation, LoadFailure,
    ResolveFailure,
};
