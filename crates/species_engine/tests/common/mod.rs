#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex, Once};

use serde_json::Value;
use species_engine::{
    EngineEvent, FailureKind, FetchError, FetchMetadata, FetchOutput, Fetcher, ProgressSink,
};

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(viewer_logging::initialize_for_tests);
}

/// Serves canned JSON bodies and remembers every requested url.
#[derive(Default)]
pub struct RecordingFetcher {
    bodies: HashMap<String, Value>,
    requested: Mutex<Vec<String>>,
}

impl RecordingFetcher {
    pub fn with(mut self, url: &str, body: Value) -> Self {
        self.bodies.insert(url.to_string(), body);
        self
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Fetcher for RecordingFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchOutput, FetchError> {
        self.requested.lock().unwrap().push(url.to_string());
        let body = self.bodies.get(url).ok_or_else(|| FetchError {
            kind: FailureKind::HttpStatus(404),
            message: format!("no canned body for {url}"),
        })?;
        let bytes = serde_json::to_vec(body).unwrap();
        Ok(FetchOutput {
            metadata: FetchMetadata {
                final_url: url.to_string(),
                redirect_count: 0,
                content_type: Some("application/json".to_string()),
                byte_len: bytes.len() as u64,
            },
            bytes,
        })
    }
}

#[derive(Default)]
pub struct TestSink {
    events: Arc<Mutex<Vec<EngineEvent>>>,
}

impl TestSink {
    pub fn take(&self) -> Vec<EngineEvent> {
        self.events.lock().unwrap().drain(..).collect()
    }
}

impl ProgressSink for TestSink {
    fn emit(&self, event: EngineEvent) {
        self.events.lock().unwrap().push(event);
    }
}
