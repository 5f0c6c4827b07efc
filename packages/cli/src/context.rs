// ABOUTME: Application context shared by every CLI command
// ABOUTME: Opens the local SQLite store and builds the gateway, store and session

use anyhow::{bail, Context};
use std::sync::Arc;
use tracing::debug;

use sitepanel_auth::{SessionController, SessionState};
use sitepanel_config::ClientConfig;
use sitepanel_gateway::{HttpSettingsGateway, SettingsGateway};
use sitepanel_settings::{HeadStyleHost, SettingsSyncStore, StyleInjector, LOAD_FAILED_MESSAGE};
use sitepanel_storage::{KeyValueStore, LocalSettingsCache, SqliteKeyValueStore};

pub struct AppContext {
    pub config: ClientConfig,
    pub cache: LocalSettingsCache,
    pub head: Arc<HeadStyleHost>,
    pub store: Arc<SettingsSyncStore>,
    pub session: SessionController,
}

impl AppContext {
    pub async fn from_config(config: ClientConfig) -> anyhow::Result<Self> {
        let db_path = config.database_path();
        let kv = SqliteKeyValueStore::open(&db_path)
            .await
            .with_context(|| format!("Failed to open local store at {}", db_path.display()))?;
        let gateway = HttpSettingsGateway::new(&config).context("Failed to build HTTP client")?;
        debug!("Using settings API at {}", gateway.base_url());

        Ok(Self::assemble(config, Arc::new(gateway), Arc::new(kv)))
    }

    pub fn assemble(
        config: ClientConfig,
        gateway: Arc<dyn SettingsGateway>,
        kv: Arc<dyn KeyValueStore>,
    ) -> Self {
        let cache = LocalSettingsCache::new(kv);
        let head = Arc::new(HeadStyleHost::new());
        let store = Arc::new(SettingsSyncStore::new(
            gateway.clone(),
            cache.clone(),
            StyleInjector::new(head.clone()),
        ));
        let session = SessionController::new(gateway, cache.clone(), store.clone());

        Self {
            config,
            cache,
            head,
            store,
            session,
        }
    }

    /// Resume the persisted session and make sure operator settings are loaded
    pub async fn require_session(&self) -> anyhow::Result<()> {
        if self.session.restore().await? != SessionState::Authenticated {
            match self.session.take_notice().await {
                Some(notice) => bail!("{}", notice.message()),
                None => bail!("Not logged in. Run `sitepanel login` first."),
            }
        }

        if !self.store.is_loaded().await {
            let reason = self
                .store
                .last_error()
                .await
                .unwrap_or_else(|| LOAD_FAILED_MESSAGE.to_string());
            bail!("{}", reason);
        }

        Ok(())
    }
}
