use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use species_core::{Effect, Member, Msg, Species};
use species_engine::{EngineConfig, EngineEvent, EngineHandle, MemberRecord, SpeciesRecord};
use viewer_logging::{viewer_info, viewer_warn};

/// Executes core effects on the engine and feeds engine events back as messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(config: EngineConfig, msg_tx: mpsc::Sender<Msg>) -> std::io::Result<Self> {
        let engine = EngineHandle::new(config)?;
        let runner = Self { engine };
        runner.spawn_event_loop(msg_tx);
        Ok(runner)
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::LoadCatalog => {
                    viewer_info!("LoadCatalog");
                    self.engine.load_catalog();
                }
                Effect::ResolveMembers {
                    generation,
                    species,
                    member_refs,
                } => {
                    viewer_info!(
                        "ResolveMembers generation={} species={} refs={}",
                        generation,
                        species,
                        member_refs.len()
                    );
                    self.engine.resolve_members(generation, member_refs);
                }
            }
        }
    }

    fn spawn_event_loop(&self, msg_tx: mpsc::Sender<Msg>) {
        let engine = self.engine.clone();
        thread::spawn(move || loop {
            let Some(event) = engine.try_recv() else {
                thread::sleep(Duration::from_millis(20));
                continue;
            };
            if msg_tx.send(map_event(event)).is_err() {
                break;
            }
        });
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::CatalogProgress { pages, species } => Msg::CatalogProgress { pages, species },
        EngineEvent::CatalogLoaded(Ok(records)) => {
            Msg::CatalogLoaded(records.into_iter().map(map_species).collect())
        }
        EngineEvent::CatalogLoaded(Err(failure)) => {
            viewer_warn!("Catalog unavailable: {}", failure);
            Msg::CatalogFailed(failure.to_string())
        }
        EngineEvent::MembersResolved {
            generation,
            result: Ok(records),
        } => Msg::MembersResolved {
            generation,
            members: records.into_iter().map(map_member).collect(),
        },
        EngineEvent::MembersResolved {
            generation,
            result: Err(failure),
        } => {
            viewer_warn!("Selection {} unavailable: {}", generation, failure);
            Msg::MembersFailed {
                generation,
                reason: failure.source.to_string(),
            }
        }
    }
}

fn map_species(record: SpeciesRecord) -> Species {
    Species {
        name: record.name,
        member_refs: record.member_refs,
    }
}

fn map_member(record: MemberRecord) -> Member {
    Member {
        name: record.name,
        height: record.height,
        mass: record.mass,
        gender: record.gender,
    }
}
