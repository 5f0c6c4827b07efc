// ABOUTME: Settings synchronization store coordinating gateway, cache and styling
// ABOUTME: Optimistic working copy with independent per-section save lifecycles

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

use sitepanel_core::{
    update_field, AdSlotKey, AdTemplate, AuthToken, BulkAdTemplate, Section, SectionPayload,
    SettingsDocument,
};
use sitepanel_gateway::{GatewayError, SettingsGateway};
use sitepanel_storage::LocalSettingsCache;

use crate::error::{SyncError, SyncResult};
use crate::state::{SectionSaveState, SectionTracker};
use crate::style::StyleInjector;

/// Page-level error when neither the network nor the cache has a document
pub const SETTINGS_UNAVAILABLE: &str = "settings unavailable";

/// Page-level error for a failed operator load
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load settings. Please try refreshing the page.";

/// Which read the store loads from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncMode {
    Public,
    Authenticated(AuthToken),
}

/// How a load resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Fetched from the remote API
    Fresh,
    /// Remote read failed; the cached document was used
    FromCache,
    /// Remote read failed; the previously held document was kept
    Stale,
    /// Remote read failed and no document is available
    Unavailable,
}

/// Boolean fields that save as soon as they change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Announcement,
    SocialButtons,
    AdSlot(AdSlotKey),
}

impl Toggle {
    pub fn section(&self) -> Section {
        match self {
            Toggle::Announcement => Section::Announcement,
            Toggle::SocialButtons => Section::Social,
            Toggle::AdSlot(_) => Section::Ads,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Toggle::Announcement | Toggle::SocialButtons => "enabled".to_string(),
            Toggle::AdSlot(key) => format!("{}.enabled", key),
        }
    }
}

#[derive(Default)]
struct StoreState {
    document: Option<SettingsDocument>,
    sections: SectionTracker,
    last_error: Option<String>,
    applied_css: Option<String>,
    mode: Option<SyncMode>,
}

pub struct SettingsSyncStore {
    gateway: Arc<dyn SettingsGateway>,
    cache: LocalSettingsCache,
    injector: StyleInjector,
    state: RwLock<StoreState>,
}

impl SettingsSyncStore {
    pub fn new(
        gateway: Arc<dyn SettingsGateway>,
        cache: LocalSettingsCache,
        injector: StyleInjector,
    ) -> Self {
        Self {
            gateway,
            cache,
            injector,
            state: RwLock::new(StoreState::default()),
        }
    }

    /// Load the document through the read matching `mode`.
    ///
    /// Only an auth failure on the operator read is an error; every other
    /// failure is reported through the outcome and `last_error`.
    pub async fn initialize(&self, mode: SyncMode) -> SyncResult<LoadOutcome> {
        self.state.write().await.mode = Some(mode.clone());

        let fetched = match &mode {
            SyncMode::Public => self.gateway.fetch_public_settings().await,
            SyncMode::Authenticated(token) => {
                self.gateway.fetch_authenticated_settings(token).await
            }
        };

        match (fetched, &mode) {
            (Ok(document), _) => {
                if let Err(e) = self.cache.save(&document).await {
                    warn!("Failed to cache settings document: {}", e);
                }

                let mut state = self.state.write().await;
                state.last_error = None;
                self.apply_loaded_css(&mut state, &document.appearance.custom_css);
                state.document = Some(document);
                info!("Settings loaded");
                Ok(LoadOutcome::Fresh)
            }
            (Err(e), SyncMode::Authenticated(_)) if e.is_auth_error() => {
                warn!("Operator settings read rejected: {}", e);
                Err(SyncError::SessionExpired)
            }
            (Err(e), SyncMode::Authenticated(_)) => {
                error!("Failed to load operator settings: {}", e);
                let mut state = self.state.write().await;
                state.last_error = Some(LOAD_FAILED_MESSAGE.to_string());
                Ok(if state.document.is_some() {
                    LoadOutcome::Stale
                } else {
                    LoadOutcome::Unavailable
                })
            }
            (Err(e), SyncMode::Public) => Ok(self.fall_back_to_cache(e).await),
        }
    }

    /// Re-run the last load
    pub async fn refresh(&self) -> SyncResult<LoadOutcome> {
        let mode = self
            .state
            .read()
            .await
            .mode
            .clone()
            .ok_or(SyncError::NotInitialized)?;
        self.initialize(mode).await
    }

    async fn fall_back_to_cache(&self, fetch_error: GatewayError) -> LoadOutcome {
        warn!("Public settings read failed, trying cache: {}", fetch_error);
        let cached = self.cache.load().await;

        let mut state = self.state.write().await;
        match cached {
            Some(document) => {
                state.last_error = Some(fetch_error.to_string());
                self.apply_loaded_css(&mut state, &document.appearance.custom_css);
                state.document = Some(document);
                info!("Using cached settings document");
                LoadOutcome::FromCache
            }
            None if state.document.is_some() => {
                state.last_error = Some(fetch_error.to_string());
                LoadOutcome::Stale
            }
            None => {
                state.last_error = Some(SETTINGS_UNAVAILABLE.to_string());
                LoadOutcome::Unavailable
            }
        }
    }

    fn apply_loaded_css(&self, state: &mut StoreState, css: &str) {
        if !css.is_empty() && state.applied_css.as_deref() != Some(css) {
            self.injector.apply(css);
            state.applied_css = Some(css.to_string());
        }
    }

    fn apply_committed_css(&self, state: &mut StoreState, css: &str) {
        if state.applied_css.as_deref().unwrap_or_default() != css {
            self.injector.apply(css);
            state.applied_css = Some(css.to_string());
        }
    }

    /// Local-only edit of one leaf of the working copy
    pub async fn update_field(
        &self,
        section: Section,
        path: &str,
        value: serde_json::Value,
    ) -> SyncResult<()> {
        let mut state = self.state.write().await;
        let document = state.document.as_mut().ok_or(SyncError::NoDocument)?;
        update_field(document, section, path, value)?;
        debug!("Updated {} field '{}'", section, path);
        Ok(())
    }

    /// Send the current snapshot of `section`.
    ///
    /// The section's status reflects the newest commit only; an older commit
    /// that completes later still returns its own result to its caller.
    pub async fn commit_section(&self, token: &AuthToken, section: Section) -> SyncResult<()> {
        let (payload, generation) = {
            let mut state = self.state.write().await;
            let payload = state
                .document
                .as_ref()
                .ok_or(SyncError::NoDocument)?
                .section_payload(section);
            let generation = state.sections.begin(section);
            (payload, generation)
        };

        let result = self.gateway.write_section(token, &payload).await;

        let mut state = self.state.write().await;
        match result {
            Ok(_) => {
                if !state
                    .sections
                    .finish(section, generation, SectionSaveState::Succeeded)
                {
                    debug!("Ignoring superseded {} save (generation {})", section, generation);
                    return Ok(());
                }
                info!("{}", section.success_message());
                if let SectionPayload::Css(css) = &payload {
                    if state.document.is_some() {
                        self.apply_committed_css(&mut state, &css.custom_css);
                    }
                }
                Ok(())
            }
            Err(e) => {
                let reason = e.to_string();
                if !state.sections.finish(
                    section,
                    generation,
                    SectionSaveState::Failed(reason.clone()),
                ) {
                    debug!("Ignoring superseded {} save (generation {})", section, generation);
                }
                error!("{} ({})", section.failure_message(), reason);

                if e.is_auth_error() {
                    Err(SyncError::SessionExpired)
                } else {
                    Err(SyncError::WriteFailed { section, reason })
                }
            }
        }
    }

    /// Set a boolean and save its section immediately
    pub async fn toggle_and_commit(
        &self,
        token: &AuthToken,
        toggle: Toggle,
        value: bool,
    ) -> SyncResult<()> {
        let section = toggle.section();
        self.update_field(section, &toggle.path(), serde_json::Value::Bool(value))
            .await?;
        self.commit_section(token, section).await
    }

    /// Replace the whole ads mapping and save it once
    pub async fn apply_bulk_ad_template(
        &self,
        token: &AuthToken,
        template: BulkAdTemplate,
    ) -> SyncResult<()> {
        {
            let mut state = self.state.write().await;
            let document = state.document.as_mut().ok_or(SyncError::NoDocument)?;
            document.ads = template.placements();
        }
        debug!("Applied bulk ad template {:?}", template);
        self.commit_section(token, Section::Ads).await
    }

    pub async fn find_first_disabled_ad_slot(&self) -> Option<AdSlotKey> {
        self.state
            .read()
            .await
            .document
            .as_ref()
            .and_then(|document| document.ads.first_disabled())
    }

    /// Fill the first disabled slot with `template` and save the ads section.
    /// Returns `None` without saving when every slot is enabled.
    pub async fn apply_ad_template(
        &self,
        token: &AuthToken,
        template: &AdTemplate,
    ) -> SyncResult<Option<AdSlotKey>> {
        let key = {
            let mut state = self.state.write().await;
            let document = state.document.as_mut().ok_or(SyncError::NoDocument)?;
            match document.ads.first_disabled() {
                Some(key) => {
                    *document.ads.get_mut(key) = template.to_slot();
                    key
                }
                None => {
                    info!("All ad slots are enabled; '{}' not applied", template.name);
                    return Ok(None);
                }
            }
        };

        debug!("Applying '{}' to {}", template.name, key);
        self.commit_section(token, Section::Ads).await?;
        Ok(Some(key))
    }

    pub async fn document(&self) -> Option<SettingsDocument> {
        self.state.read().await.document.clone()
    }

    pub async fn is_loaded(&self) -> bool {
        self.state.read().await.document.is_some()
    }

    pub async fn section_state(&self, section: Section) -> SectionSaveState {
        self.state.read().await.sections.get(section)
    }

    pub async fn section_states(&self) -> Vec<(Section, SectionSaveState)> {
        self.state.read().await.sections.snapshot()
    }

    pub async fn last_error(&self) -> Option<String> {
        self.state.read().await.last_error.clone()
    }

    pub async fn enabled_ad_count(&self) -> usize {
        self.state
            .read()
            .await
            .document
            .as_ref()
            .map(|document| document.ads.enabled_count())
            .unwrap_or(0)
    }

    /// Drop the working copy and every section status
    pub async fn discard(&self) {
        let mut state = self.state.write().await;
        state.document = None;
        state.last_error = None;
        state.applied_css = None;
        state.mode = None;
        state.sections.reset();
        debug!("Discarded settings working copy");
    }
}
