// ABOUTME: End-to-end tests of the CLI context against a mock settings API
// ABOUTME: Session persistence across runs, forced logout and public cache fallback

use pretty_assertions::assert_eq;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use sitepanel_auth::SessionState;
use sitepanel_cli::AppContext;
use sitepanel_config::ClientConfig;
use sitepanel_core::{AdSlotKey, AuthToken, CUSTOM_CSS_BLOCK_ID};
use sitepanel_settings::{LoadOutcome, SyncMode, Toggle};

fn config(server: &MockServer, data_dir: &TempDir) -> ClientConfig {
    let mut config = ClientConfig::with_api_url(&format!("{}/api/admin", server.uri())).unwrap();
    config.data_dir = data_dir.path().to_path_buf();
    config
}

fn document_json() -> serde_json::Value {
    json!({
        "appearance": {
            "announcementBar": {"enabled": false, "text": "", "backgroundColor": "", "textColor": ""},
            "floatingSocialButtons": {"enabled": false, "discordUrl": "", "telegramUrl": ""},
            "customCSS": "nav { display: none; }"
        },
        "content": {"disclaimer": "", "aboutUs": "", "contactEmail": "", "socialLinks": {"discord": "", "telegram": ""}},
        "ads": {}
    })
}

#[tokio::test]
async fn test_session_survives_between_runs() {
    let server = MockServer::start().await;
    let data_dir = TempDir::new().unwrap();

    Mock::given(method("POST"))
        .and(path("/api/admin/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "tok-9"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/admin/settings"))
        .and(header("authorization", "Bearer tok-9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(document_json()))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/admin/settings/ads"))
        .and(header("authorization", "Bearer tok-9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    {
        let ctx = AppContext::from_config(config(&server, &data_dir))
            .await
            .unwrap();
        ctx.session.login("admin", "secret").await.unwrap();
    }

    let ctx = AppContext::from_config(config(&server, &data_dir))
        .await
        .unwrap();
    ctx.require_session().await.unwrap();
    assert_eq!(ctx.session.state().await, SessionState::Authenticated);
    assert_eq!(
        ctx.head.block(CUSTOM_CSS_BLOCK_ID).as_deref(),
        Some("nav { display: none; }")
    );

    ctx.session
        .toggle(Toggle::AdSlot(AdSlotKey::SearchTopAd), true)
        .await
        .unwrap();
    assert_eq!(ctx.store.enabled_ad_count().await, 1);
}

#[tokio::test]
async fn test_expired_token_is_forgotten() {
    let server = MockServer::start().await;
    let data_dir = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/api/admin/settings"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let ctx = AppContext::from_config(config(&server, &data_dir))
        .await
        .unwrap();
    ctx.cache.save_token(&AuthToken::new("old")).await.unwrap();

    let err = ctx.require_session().await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Your session has expired. Please log in again."
    );
    assert_eq!(ctx.cache.load_token().await, None);
}

#[tokio::test]
async fn test_require_session_without_login() {
    let server = MockServer::start().await;
    let data_dir = TempDir::new().unwrap();

    let ctx = AppContext::from_config(config(&server, &data_dir))
        .await
        .unwrap();
    let err = ctx.require_session().await.unwrap_err();
    assert!(err.to_string().contains("Not logged in"));
}

#[tokio::test]
async fn test_public_read_falls_back_to_previous_run() {
    let server = MockServer::start().await;
    let data_dir = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/api/admin/public/settings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(document_json()))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/admin/public/settings"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    {
        let ctx = AppContext::from_config(config(&server, &data_dir))
            .await
            .unwrap();
        let outcome = ctx.store.initialize(SyncMode::Public).await.unwrap();
        assert_eq!(outcome, LoadOutcome::Fresh);
    }

    let ctx = AppContext::from_config(config(&server, &data_dir))
        .await
        .unwrap();
    let outcome = ctx.store.initialize(SyncMode::Public).await.unwrap();

    assert_eq!(outcome, LoadOutcome::FromCache);
    assert_eq!(
        ctx.store
            .document()
            .await
            .unwrap()
            .appearance
            .custom_css,
        "nav { display: none; }"
    );
    assert!(ctx.store.last_error().await.is_some());
}
