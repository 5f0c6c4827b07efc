//! reqwest implementation of the settings gateway

use async_trait::async_trait;
use reqwest::{header, Client, Response, StatusCode};
use tracing::{debug, warn};

use sitepanel_config::ClientConfig;
use sitepanel_core::{AuthToken, SectionPayload, SettingsDocument};

use crate::api::{Ack, LoginRequest, LoginResponse};
use crate::error::{GatewayError, GatewayResult};
use crate::gateway::SettingsGateway;

/// reqwest-backed gateway talking to `{api_url}/...`
#[derive(Clone)]
pub struct HttpSettingsGateway {
    http_client: Client,
    base_url: String,
}

impl HttpSettingsGateway {
    pub fn new(config: &ClientConfig) -> GatewayResult<Self> {
        let http_client = Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| GatewayError::Configuration(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Map a non-success status from an authenticated call
    async fn authenticated_failure(response: Response) -> GatewayError {
        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                warn!("Settings API rejected the bearer token");
                GatewayError::auth("Invalid or expired token")
            }
            status => Self::http_failure(status, response).await,
        }
    }

    async fn http_failure(status: StatusCode, response: Response) -> GatewayError {
        let message = response
            .text()
            .await
            .ok()
            .filter(|text| !text.trim().is_empty())
            .unwrap_or_else(|| status.to_string());
        GatewayError::Http {
            status: status.as_u16(),
            message,
        }
    }

    async fn decode_document(response: Response) -> GatewayResult<SettingsDocument> {
        response
            .json::<SettingsDocument>()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl SettingsGateway for HttpSettingsGateway {
    async fn login(&self, username: &str, password: &str) -> GatewayResult<AuthToken> {
        let url = self.url("/login");
        debug!("POST {}", url);

        let response = self
            .http_client
            .post(&url)
            .json(&LoginRequest { username, password })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::auth(format!("Login failed: {}", status)));
        }

        let body: LoginResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        if body.token.is_empty() {
            return Err(GatewayError::InvalidResponse(
                "Login response contained an empty token".to_string(),
            ));
        }

        Ok(AuthToken::new(body.token))
    }

    async fn fetch_public_settings(&self) -> GatewayResult<SettingsDocument> {
        let url = self.url("/public/settings");
        debug!("GET {}", url);

        let response = self
            .http_client
            .get(&url)
            .header(header::CACHE_CONTROL, "no-cache")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::http_failure(status, response).await);
        }

        Self::decode_document(response).await
    }

    async fn fetch_authenticated_settings(
        &self,
        token: &AuthToken,
    ) -> GatewayResult<SettingsDocument> {
        let url = self.url("/settings");
        debug!("GET {}", url);

        let response = self
            .http_client
            .get(&url)
            .header(header::AUTHORIZATION, token.bearer())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::authenticated_failure(response).await);
        }

        Self::decode_document(response).await
    }

    async fn write_section(
        &self,
        token: &AuthToken,
        payload: &SectionPayload,
    ) -> GatewayResult<Ack> {
        let section = payload.section();
        let url = self.url(&format!("/settings/{}", section.endpoint()));
        debug!("PUT {} ({} section)", url, section);

        let response = self
            .http_client
            .put(&url)
            .header(header::AUTHORIZATION, token.bearer())
            .json(payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::authenticated_failure(response).await);
        }

        let body = response.text().await.unwrap_or_default();
        Ok(Ack::from_body(&body))
    }
}
