//! API request and response models for the settings API

use serde::{Deserialize, Serialize};

/// Body of `POST /login`
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Acknowledgement of a section write. The API's body is advisory; any 2xx
/// status is a success, so missing or unknown fields decode as defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
}

impl Ack {
    pub(crate) fn from_body(body: &str) -> Self {
        if body.trim().is_empty() {
            return Self::default();
        }
        serde_json::from_str(body).unwrap_or_else(|e| {
            tracing::debug!("Write acknowledged with unrecognised body: {}", e);
            Self::default()
        })
    }
}
