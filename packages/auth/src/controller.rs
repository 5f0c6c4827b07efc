// ABOUTME: Session controller owning the operator token
// ABOUTME: Drives login/logout and turns mid-session auth failures into forced logout

use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use sitepanel_core::{AdSlotKey, AdTemplate, AuthToken, BulkAdTemplate, Section};
use sitepanel_gateway::SettingsGateway;
use sitepanel_settings::{LoadOutcome, SettingsSyncStore, SyncMode, SyncResult, Toggle};
use sitepanel_storage::LocalSettingsCache;

use crate::error::{AuthError, AuthResult};
use crate::session::{SessionEvent, SessionMachine, SessionNotice, SessionState};

#[derive(Default)]
struct SessionInner {
    machine: SessionMachine,
    token: Option<AuthToken>,
    notice: Option<SessionNotice>,
}

/// Owns the bearer token and supplies it to every authenticated store call.
///
/// Any authenticated call rejected with an auth failure ends the session:
/// the token is dropped from memory and persistence, the working copy is
/// discarded and [`SessionNotice::SessionExpired`] is raised.
pub struct SessionController {
    gateway: Arc<dyn SettingsGateway>,
    cache: LocalSettingsCache,
    store: Arc<SettingsSyncStore>,
    inner: Mutex<SessionInner>,
}

impl SessionController {
    pub fn new(
        gateway: Arc<dyn SettingsGateway>,
        cache: LocalSettingsCache,
        store: Arc<SettingsSyncStore>,
    ) -> Self {
        Self {
            gateway,
            cache,
            store,
            inner: Mutex::new(SessionInner::default()),
        }
    }

    pub fn store(&self) -> &Arc<SettingsSyncStore> {
        &self.store
    }

    pub async fn state(&self) -> SessionState {
        self.inner.lock().await.machine.state()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.state().await == SessionState::Authenticated
    }

    pub async fn notice(&self) -> Option<SessionNotice> {
        self.inner.lock().await.notice
    }

    /// Return and clear the pending notice
    pub async fn take_notice(&self) -> Option<SessionNotice> {
        self.inner.lock().await.notice.take()
    }

    /// Pick up a persisted token and load operator settings with it
    pub async fn restore(&self) -> AuthResult<SessionState> {
        if self.state().await != SessionState::Anonymous {
            return Ok(self.state().await);
        }

        let Some(token) = self.cache.load_token().await else {
            return Ok(SessionState::Anonymous);
        };

        {
            let mut inner = self.inner.lock().await;
            inner.machine.transition(SessionEvent::Restored)?;
            inner.token = Some(token);
            inner.notice = None;
        }
        info!("Restored operator session");

        match self.load_settings().await {
            Ok(_) | Err(AuthError::SessionExpired) => Ok(self.state().await),
            Err(e) => Err(e),
        }
    }

    /// Exchange credentials for a token. Settings are not loaded here; call
    /// [`SessionController::load_settings`] afterwards.
    pub async fn login(&self, username: &str, password: &str) -> AuthResult<()> {
        {
            let mut inner = self.inner.lock().await;
            if inner.machine.state() == SessionState::Authenticating {
                return Err(AuthError::LoginInProgress);
            }
            inner.machine.transition(SessionEvent::LoginStarted)?;
            inner.notice = None;
        }

        match self.gateway.login(username, password).await {
            Ok(token) => {
                if let Err(e) = self.cache.save_token(&token).await {
                    warn!("Failed to persist session token: {}", e);
                }
                let mut inner = self.inner.lock().await;
                inner.machine.transition(SessionEvent::LoginSucceeded)?;
                inner.token = Some(token);
                info!("Logged in as {}", username);
                Ok(())
            }
            Err(e) => {
                let mut inner = self.inner.lock().await;
                inner.machine.transition(SessionEvent::LoginFailed)?;
                inner.token = None;
                inner.notice = Some(SessionNotice::LoginFailed);
                warn!("Login failed for {}: {}", username, e);
                Err(AuthError::LoginFailed(e.to_string()))
            }
        }
    }

    /// Operator-initiated logout
    pub async fn logout(&self) -> AuthResult<()> {
        {
            let mut inner = self.inner.lock().await;
            if inner.machine.state() == SessionState::Authenticated {
                inner.machine.transition(SessionEvent::Logout)?;
            }
            inner.token = None;
            inner.notice = None;
        }

        self.store.discard().await;
        self.cache.clear_token().await?;
        info!("Logged out");
        Ok(())
    }

    /// End the session after the API rejected the token
    pub async fn force_logout(&self) {
        {
            let mut inner = self.inner.lock().await;
            if inner.machine.state() == SessionState::Authenticated {
                let _ = inner.machine.transition(SessionEvent::Expired);
            }
            inner.token = None;
            inner.notice = Some(SessionNotice::SessionExpired);
        }

        self.store.discard().await;
        if let Err(e) = self.cache.clear_token().await {
            warn!("Failed to clear persisted token: {}", e);
        }
        warn!("{}", SessionNotice::SessionExpired.message());
    }

    async fn token(&self) -> AuthResult<AuthToken> {
        let inner = self.inner.lock().await;
        match (inner.machine.state(), &inner.token) {
            (SessionState::Authenticated, Some(token)) => Ok(token.clone()),
            _ => Err(AuthError::NotAuthenticated),
        }
    }

    /// Map a store result, ending the session only if `used` is still the
    /// token in force. A rejection of an earlier session's token is reported
    /// but leaves the current session alone.
    async fn guard<T>(&self, used: &AuthToken, result: SyncResult<T>) -> AuthResult<T> {
        match result {
            Ok(value) => Ok(value),
            Err(e) if e.is_session_expired() => {
                let current = self.inner.lock().await.token.as_ref() == Some(used);
                if current {
                    self.force_logout().await;
                } else {
                    debug!("Ignoring auth rejection of a superseded session token");
                }
                Err(AuthError::SessionExpired)
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn load_settings(&self) -> AuthResult<LoadOutcome> {
        let token = self.token().await?;
        let result = self
            .store
            .initialize(SyncMode::Authenticated(token.clone()))
            .await;
        self.guard(&token, result).await
    }

    pub async fn commit_section(&self, section: Section) -> AuthResult<()> {
        let token = self.token().await?;
        let result = self.store.commit_section(&token, section).await;
        self.guard(&token, result).await
    }

    pub async fn toggle(&self, toggle: Toggle, value: bool) -> AuthResult<()> {
        let token = self.token().await?;
        let result = self.store.toggle_and_commit(&token, toggle, value).await;
        self.guard(&token, result).await
    }

    pub async fn apply_bulk_ad_template(&self, template: BulkAdTemplate) -> AuthResult<()> {
        let token = self.token().await?;
        let result = self.store.apply_bulk_ad_template(&token, template).await;
        self.guard(&token, result).await
    }

    pub async fn apply_ad_template(&self, template: &AdTemplate) -> AuthResult<Option<AdSlotKey>> {
        let token = self.token().await?;
        let result = self.store.apply_ad_template(&token, template).await;
        self.guard(&token, result).await
    }
}
