// ABOUTME: Last-known-good settings document and session token persistence
// ABOUTME: Fallback source for the public path; decode failures read as a cache miss

use std::sync::Arc;
use tracing::{debug, warn};

use sitepanel_core::{AuthToken, SettingsDocument, SETTINGS_STORAGE_KEY, TOKEN_STORAGE_KEY};

use crate::error::StorageResult;
use crate::kv::KeyValueStore;

/// Passive side store: written on successful fetch/login, read only as a
/// fallback or for session restore.
#[derive(Clone)]
pub struct LocalSettingsCache {
    store: Arc<dyn KeyValueStore>,
}

impl LocalSettingsCache {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Persist `document`, replacing any previously saved one
    pub async fn save(&self, document: &SettingsDocument) -> StorageResult<()> {
        let encoded = serde_json::to_string(document)?;
        self.store.set(SETTINGS_STORAGE_KEY, &encoded).await?;
        debug!("Cached settings document ({} bytes)", encoded.len());
        Ok(())
    }

    /// Most recently saved document. Read errors and malformed values are
    /// reported as absence.
    pub async fn load(&self) -> Option<SettingsDocument> {
        let raw = match self.store.get(SETTINGS_STORAGE_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!("Failed to read cached settings: {}", e);
                return None;
            }
        };

        match serde_json::from_str::<SettingsDocument>(&raw) {
            Ok(document) => Some(document),
            Err(e) => {
                warn!("Ignoring malformed cached settings: {}", e);
                None
            }
        }
    }

    pub async fn save_token(&self, token: &AuthToken) -> StorageResult<()> {
        self.store.set(TOKEN_STORAGE_KEY, token.as_str()).await
    }

    pub async fn load_token(&self) -> Option<AuthToken> {
        match self.store.get(TOKEN_STORAGE_KEY).await {
            Ok(Some(raw)) if !raw.is_empty() => Some(AuthToken::new(raw)),
            Ok(_) => None,
            Err(e) => {
                warn!("Failed to read stored token: {}", e);
                None
            }
        }
    }

    pub async fn clear_token(&self) -> StorageResult<()> {
        self.store.remove(TOKEN_STORAGE_KEY).await
    }
}
