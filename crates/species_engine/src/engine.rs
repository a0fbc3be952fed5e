use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use viewer_logging::{viewer_debug, viewer_warn};

use crate::catalog::{load_catalog, ChannelProgressSink};
use crate::fetch::{FetchSettings, Fetcher, ReqwestFetcher};
use crate::resolve::resolve_members;
use crate::{EngineEvent, Generation, SchemePolicy};

pub const DEFAULT_CATALOG_ROOT: &str = "https://swapi.dev/api/species/";
pub const DEFAULT_PAGE_LIMIT: usize = 500;

#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// First catalog page; its scheme decides whether references get upgraded.
    pub catalog_root: String,
    pub fetch: FetchSettings,
    /// Upper bound on followed `next` links.
    pub page_limit: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            catalog_root: DEFAULT_CATALOG_ROOT.to_string(),
            fetch: FetchSettings::default(),
            page_limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

enum EngineCommand {
    LoadCatalog,
    ResolveMembers {
        generation: Generation,
        member_refs: Vec<String>,
    },
}

/// Runs fetches on a background tokio runtime and reports through events.
///
/// Commands are executed concurrently; nothing in flight is ever cancelled.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(config: EngineConfig) -> std::io::Result<Self> {
        let fetcher = Arc::new(ReqwestFetcher::new(config.fetch.clone()));
        Self::with_fetcher(config, fetcher)
    }

    pub fn with_fetcher(config: EngineConfig, fetcher: Arc<dyn Fetcher>) -> std::io::Result<Self> {
        let runtime = tokio::runtime::Runtime::new()?;
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let config = Arc::new(config);

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let fetcher = fetcher.clone();
                let config = config.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(fetcher.as_ref(), &config, command, event_tx).await;
                });
            }
            viewer_debug!("Engine command channel closed");
        });

        Ok(Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        })
    }

    pub fn load_catalog(&self) {
        let _ = self.cmd_tx.send(EngineCommand::LoadCatalog);
    }

    pub fn resolve_members(&self, generation: Generation, member_refs: Vec<String>) {
        let _ = self.cmd_tx.send(EngineCommand::ResolveMembers {
            generation,
            member_refs,
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }
}

async fn handle_command(
    fetcher: &dyn Fetcher,
    config: &EngineConfig,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::LoadCatalog => {
            let sink = ChannelProgressSink::new(event_tx.clone());
            let result = load_catalog(fetcher, config, &sink).await;
            if let Err(failure) = &result {
                viewer_warn!("Catalog load failed: {}", failure);
            }
            let _ = event_tx.send(EngineEvent::CatalogLoaded(result));
        }
        EngineCommand::ResolveMembers {
            generation,
            member_refs,
        } => {
            let policy = SchemePolicy::for_origin(&config.catalog_root);
            let result = resolve_members(fetcher, &member_refs, policy).await;
            if let Err(failure) = &result {
                viewer_warn!("Selection {} failed: {}", generation, failure);
            }
            let _ = event_tx.send(EngineEvent::MembersResolved { generation, result });
        }
    }
}
