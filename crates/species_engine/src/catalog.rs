use std::sync::mpsc;

use viewer_logging::{viewer_debug, viewer_info};

use crate::fetch::{fetch_json, Fetcher};
use crate::{CatalogPage, EngineConfig, EngineEvent, LoadFailure, SchemePolicy, SpeciesRecord};

pub trait ProgressSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelProgressSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelProgressSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl ProgressSink for ChannelProgressSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

/// Follows the `next` chain from the catalog root and returns every species,
/// page by page in arrival order.
///
/// Pages are fetched strictly one after another. Any failed page aborts the
/// whole load and the species gathered so far are dropped.
pub async fn load_catalog(
    fetcher: &dyn Fetcher,
    config: &EngineConfig,
    sink: &dyn ProgressSink,
) -> Result<Vec<SpeciesRecord>, LoadFailure> {
    let policy = SchemePolicy::for_origin(&config.catalog_root);
    let mut species = Vec::new();
    let mut pages = 0usize;
    let mut next = Some(config.catalog_root.clone());

    while let Some(url) = next.take() {
        if pages >= config.page_limit {
            return Err(LoadFailure::PageLimitExceeded {
                limit: config.page_limit,
            });
        }
        pages += 1;

        let page: CatalogPage = fetch_json(fetcher, &url)
            .await
            .map_err(|source| LoadFailure::Page {
                page: pages,
                url: url.clone(),
                source,
            })?;
        viewer_debug!(
            "Catalog page {} from {} had {} species",
            pages,
            url,
            page.results.len()
        );

        species.extend(page.results);
        sink.emit(EngineEvent::CatalogProgress {
            pages,
            species: species.len(),
        });

        next = page
            .next
            .filter(|reference| !reference.is_empty())
            .map(|reference| policy.apply(&reference));
    }

    viewer_info!("Catalog loaded: {} species in {} pages", species.len(), pages);
    Ok(species)
}
