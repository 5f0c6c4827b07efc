//! Integration tests for the HTTP settings gateway against a mock API

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use sitepanel_config::ClientConfig;
use sitepanel_core::{AdSlot, AuthToken, Section, SettingsDocument};
use sitepanel_gateway::{GatewayError, HttpSettingsGateway, SettingsGateway};

async fn setup() -> (MockServer, HttpSettingsGateway) {
    let server = MockServer::start().await;
    let config = ClientConfig::with_api_url(&format!("{}/api/admin", server.uri())).unwrap();
    let gateway = HttpSettingsGateway::new(&config).unwrap();
    (server, gateway)
}

fn sample_document_json() -> serde_json::Value {
    json!({
        "appearance": {
            "announcementBar": {"enabled": true, "text": "Hi", "backgroundColor": "#000", "textColor": "#fff"},
            "floatingSocialButtons": {"enabled": false, "discordUrl": "", "telegramUrl": ""},
            "customCSS": ".x { color: red; }"
        },
        "content": {
            "disclaimer": "d", "aboutUs": "a", "contactEmail": "ops@example.com",
            "socialLinks": {"discord": "", "telegram": ""}
        },
        "ads": {
            "mainPageAd1": {"enabled": true, "imageUrl": "https://img/1", "clickUrl": "https://c/1"}
        }
    })
}

#[tokio::test]
async fn test_login_returns_token() {
    let (server, gateway) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/admin/login"))
        .and(body_json(json!({"username": "admin", "password": "pw"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "tok-1"})))
        .expect(1)
        .mount(&server)
        .await;

    let token = gateway.login("admin", "pw").await.unwrap();
    assert_eq!(token, AuthToken::new("tok-1"));
}

#[tokio::test]
async fn test_login_failure_is_auth_error() {
    let (server, gateway) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/admin/login"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let err = gateway.login("admin", "wrong").await.unwrap_err();
    assert!(err.is_auth_error(), "unexpected error: {:?}", err);
}

#[tokio::test]
async fn test_fetch_public_settings_decodes_document() {
    let (server, gateway) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/admin/public/settings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_document_json()))
        .mount(&server)
        .await;

    let doc = gateway.fetch_public_settings().await.unwrap();
    assert_eq!(doc.appearance.custom_css, ".x { color: red; }");
    assert_eq!(doc.content.contact_email, "ops@example.com");
    assert_eq!(doc.ads.main_page_ad1, AdSlot::enabled("https://img/1", "https://c/1"));
    assert!(!doc.ads.main_page_ad2.enabled);
}

#[tokio::test]
async fn test_fetch_public_settings_server_error_is_not_auth() {
    let (server, gateway) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/admin/public/settings"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let err = gateway.fetch_public_settings().await.unwrap_err();
    assert_eq!(
        err,
        GatewayError::Http {
            status: 503,
            message: "maintenance".to_string()
        }
    );
}

#[tokio::test]
async fn test_fetch_authenticated_settings_sends_bearer() {
    let (server, gateway) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/admin/settings"))
        .and(header("authorization", "Bearer tok-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_document_json()))
        .expect(1)
        .mount(&server)
        .await;

    let doc = gateway
        .fetch_authenticated_settings(&AuthToken::new("tok-1"))
        .await
        .unwrap();
    assert!(doc.appearance.announcement_bar.enabled);
}

#[tokio::test]
async fn test_fetch_authenticated_settings_401_is_auth_error() {
    let (server, gateway) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/admin/settings"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = gateway
        .fetch_authenticated_settings(&AuthToken::new("expired"))
        .await
        .unwrap_err();
    assert!(err.is_auth_error());
}

#[tokio::test]
async fn test_malformed_document_is_invalid_response() {
    let (server, gateway) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/admin/settings"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    let err = gateway
        .fetch_authenticated_settings(&AuthToken::new("tok"))
        .await
        .unwrap_err();
    assert!(matches!(err, GatewayError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_write_section_routes_and_payloads() {
    let (server, gateway) = setup().await;
    let token = AuthToken::new("tok-1");

    let mut doc = SettingsDocument::default();
    doc.appearance.floating_social_buttons.enabled = true;
    doc.appearance.floating_social_buttons.discord_url = "https://discord.gg/x".to_string();
    doc.appearance.custom_css = "body{}".to_string();

    Mock::given(method("PUT"))
        .and(path("/api/admin/settings/social-buttons"))
        .and(header("authorization", "Bearer tok-1"))
        .and(body_json(json!({
            "enabled": true,
            "discordUrl": "https://discord.gg/x",
            "telegramUrl": ""
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/api/admin/settings/css"))
        .and(body_json(json!({"customCSS": "body{}"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let ack = gateway
        .write_section(&token, &doc.section_payload(Section::Social))
        .await
        .unwrap();
    assert_eq!(ack.success, Some(true));

    let ack = gateway
        .write_section(&token, &doc.section_payload(Section::Css))
        .await
        .unwrap();
    assert_eq!(ack.success, None);
}

#[tokio::test]
async fn test_write_ads_sends_all_eleven_slots() {
    let (server, gateway) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/api/admin/settings/ads"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    gateway
        .write_section(
            &AuthToken::new("tok"),
            &SettingsDocument::default().section_payload(Section::Ads),
        )
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body.as_object().unwrap().len(), 11);
}

#[tokio::test]
async fn test_write_section_forbidden_is_auth_error() {
    let (server, gateway) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/api/admin/settings/content"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let err = gateway
        .write_section(
            &AuthToken::new("tok"),
            &SettingsDocument::default().section_payload(Section::Content),
        )
        .await
        .unwrap_err();
    assert!(err.is_auth_error());
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let config = ClientConfig::with_api_url("http://127.0.0.1:9").unwrap();
    let gateway = HttpSettingsGateway::new(&config).unwrap();

    let err = gateway.fetch_public_settings().await.unwrap_err();
    assert!(err.is_network_error(), "unexpected error: {:?}", err);
}
