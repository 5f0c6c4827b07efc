//! The remote settings API as seen by the sync core

use async_trait::async_trait;

use sitepanel_core::{AuthToken, SectionPayload, SettingsDocument};

use crate::api::Ack;
use crate::error::GatewayResult;

/// Every network call the panel and the public site make. Calls share no
/// mutable state and never retry.
#[async_trait]
pub trait SettingsGateway: Send + Sync {
    /// Exchange credentials for a bearer token. Any non-success outcome is an
    /// authentication error.
    async fn login(&self, username: &str, password: &str) -> GatewayResult<AuthToken>;

    /// Unauthenticated read used by the live site
    async fn fetch_public_settings(&self) -> GatewayResult<SettingsDocument>;

    /// Operator read; 401/403 surface as `GatewayError::Authentication`
    async fn fetch_authenticated_settings(
        &self,
        token: &AuthToken,
    ) -> GatewayResult<SettingsDocument>;

    /// Replace one section with the full snapshot in `payload`
    async fn write_section(&self, token: &AuthToken, payload: &SectionPayload)
        -> GatewayResult<Ack>;
}
