mod common;

use std::time::{Duration, Instant};

use common::init_logging;
use serde_json::json;
use species_engine::{EngineConfig, EngineEvent, EngineHandle};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn next_event(engine: &EngineHandle) -> EngineEvent {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        if let Some(event) = engine.try_recv() {
            return event;
        }
        assert!(Instant::now() < deadline, "engine produced no event");
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn engine_reports_catalog_then_members() {
    init_logging();
    let server = MockServer::start().await;
    let uri = server.uri();
    Mock::given(method("GET"))
        .and(path("/api/species/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{"name": "Droid", "people": [format!("{uri}/api/people/2/")]}],
            "next": null
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/people/2/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "C-3PO", "height": "167", "mass": "75", "gender": "n/a"
        })))
        .mount(&server)
        .await;

    let engine = EngineHandle::new(EngineConfig {
        catalog_root: format!("{uri}/api/species/"),
        ..EngineConfig::default()
    })
    .expect("engine starts");

    engine.load_catalog();
    assert_eq!(
        next_event(&engine).await,
        EngineEvent::CatalogProgress {
            pages: 1,
            species: 1
        }
    );
    let catalog = match next_event(&engine).await {
        EngineEvent::CatalogLoaded(Ok(catalog)) => catalog,
        other => panic!("unexpected event: {other:?}"),
    };
    assert_eq!(catalog[0].name, "Droid");

    engine.resolve_members(7, catalog[0].member_refs.clone());
    match next_event(&engine).await {
        EngineEvent::MembersResolved {
            generation,
            result: Ok(members),
        } => {
            assert_eq!(generation, 7);
            assert_eq!(members[0].name, "C-3PO");
            assert_eq!(members[0].gender, "n/a");
        }
        other => panic!("unexpected event: {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn engine_reports_catalog_failure() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/species/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let engine = EngineHandle::new(EngineConfig {
        catalog_root: format!("{}/api/species/", server.uri()),
        ..EngineConfig::default()
    })
    .expect("engine starts");

    engine.load_catalog();
    assert!(matches!(
        next_event(&engine).await,
        EngineEvent::CatalogLoaded(Err(_))
    ));
}
