// ABOUTME: Scripted settings gateway shared by the store integration tests
// ABOUTME: Queued read results, per-section write scripts with delays, call recording

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use sitepanel_core::{AuthToken, Section, SectionPayload, SettingsDocument};
use sitepanel_gateway::{Ack, GatewayError, GatewayResult, SettingsGateway};
use sitepanel_settings::{HeadStyleHost, SettingsSyncStore, StyleInjector};
use sitepanel_storage::{LocalSettingsCache, MemoryKeyValueStore};

#[derive(Default)]
pub struct ScriptedGateway {
    public_reads: Mutex<VecDeque<GatewayResult<SettingsDocument>>>,
    operator_reads: Mutex<VecDeque<GatewayResult<SettingsDocument>>>,
    writes: Mutex<HashMap<Section, VecDeque<(Duration, GatewayResult<Ack>)>>>,
    recorded: Mutex<Vec<SectionPayload>>,
}

impl ScriptedGateway {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_public(&self, result: GatewayResult<SettingsDocument>) {
        self.public_reads.lock().unwrap().push_back(result);
    }

    pub fn push_operator(&self, result: GatewayResult<SettingsDocument>) {
        self.operator_reads.lock().unwrap().push_back(result);
    }

    /// Script the next write of `section`; unscripted writes succeed at once
    pub fn push_write(&self, section: Section, delay: Duration, result: GatewayResult<Ack>) {
        self.writes
            .lock()
            .unwrap()
            .entry(section)
            .or_default()
            .push_back((delay, result));
    }

    pub fn recorded_writes(&self) -> Vec<SectionPayload> {
        self.recorded.lock().unwrap().clone()
    }

    pub fn writes_for(&self, section: Section) -> usize {
        self.recorded_writes()
            .iter()
            .filter(|payload| payload.section() == section)
            .count()
    }
}

pub fn network_error() -> GatewayError {
    GatewayError::Network("connection refused".to_string())
}

pub fn server_error() -> GatewayError {
    GatewayError::Http {
        status: 500,
        message: "Internal Server Error".to_string(),
    }
}

#[async_trait]
impl SettingsGateway for ScriptedGateway {
    async fn login(&self, _username: &str, _password: &str) -> GatewayResult<AuthToken> {
        Err(GatewayError::auth("login is not scripted"))
    }

    async fn fetch_public_settings(&self) -> GatewayResult<SettingsDocument> {
        self.public_reads
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(network_error()))
    }

    async fn fetch_authenticated_settings(
        &self,
        _token: &AuthToken,
    ) -> GatewayResult<SettingsDocument> {
        self.operator_reads
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(network_error()))
    }

    async fn write_section(
        &self,
        _token: &AuthToken,
        payload: &SectionPayload,
    ) -> GatewayResult<Ack> {
        self.recorded.lock().unwrap().push(payload.clone());
        let scripted = self
            .writes
            .lock()
            .unwrap()
            .get_mut(&payload.section())
            .and_then(|queue| queue.pop_front());

        match scripted {
            Some((delay, result)) => {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                result
            }
            None => Ok(Ack::default()),
        }
    }
}

pub struct Harness {
    pub gateway: Arc<ScriptedGateway>,
    pub cache: LocalSettingsCache,
    pub head: Arc<HeadStyleHost>,
    pub store: SettingsSyncStore,
}

pub fn harness() -> Harness {
    let gateway = ScriptedGateway::new();
    let cache = LocalSettingsCache::new(Arc::new(MemoryKeyValueStore::new()));
    let head = Arc::new(HeadStyleHost::new());
    let store = SettingsSyncStore::new(
        gateway.clone(),
        cache.clone(),
        StyleInjector::new(head.clone()),
    );
    Harness {
        gateway,
        cache,
        head,
        store,
    }
}

pub fn token() -> AuthToken {
    AuthToken::new("operator-token")
}

pub fn sample_document() -> SettingsDocument {
    let mut doc = SettingsDocument::default();
    doc.appearance.announcement_bar.text = "Maintenance tonight".to_string();
    doc.appearance.announcement_bar.background_color = "#222222".to_string();
    doc.appearance.announcement_bar.text_color = "#eeeeee".to_string();
    doc.content.contact_email = "ops@example.com".to_string();
    doc
}
