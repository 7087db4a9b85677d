//! Integration tests for `GraphClient` and batch enrichment using wiremock.

use cintel_core::config::DEFAULT_MAX_ENRICH;
use cintel_core::{LayeredCredentials, SettingsStore, StaticCredential};
use cintel_graph::client::discovery_fields;
use cintel_graph::{enrich_handles, GraphClient};
use wiremock::matchers::{any, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "test-token";

fn test_client(base_url: &str) -> GraphClient {
    GraphClient::with_base_url(base_url, "v21.0", None)
        .expect("client construction should not fail")
}

async fn mount_account_chain(server: &MockServer, token: &str) {
    Mock::given(method("GET"))
        .and(path("/v21.0/me/accounts"))
        .and(query_param("access_token", token))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [{ "id": "page-1", "name": "Agency Page" }]
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v21.0/page-1"))
        .and(query_param("fields", "instagram_business_account"))
        .and(query_param("access_token", token))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "instagram_business_account": { "id": "ig-1" },
            "id": "page-1"
        })))
        .mount(server)
        .await;
}

async fn mount_profile(server: &MockServer, username: &str, followers: u64) {
    Mock::given(method("GET"))
        .and(path("/v21.0/ig-1"))
        .and(query_param("fields", discovery_fields(username).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "business_discovery": {
                "name": format!("{username} name"),
                "username": username,
                "biography": "Home cook. Travel on weekends.",
                "followers_count": followers,
                "media_count": 321,
                "profile_picture_url": "https://cdn.example.com/p.jpg",
                "media": { "data": [
                    { "caption": "Street food in Pune" },
                    { "id": "no-caption" },
                    { "caption": "Goa diaries" }
                ]}
            },
            "id": "ig-1"
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn fetch_creator_signals_walks_the_chain() {
    let server = MockServer::start().await;
    mount_account_chain(&server, TOKEN).await;
    mount_profile(&server, "asha.cooks", 48_200).await;

    let client = test_client(&server.uri());
    let signal = client.fetch_creator_signals("@asha.cooks", TOKEN).await;

    assert!(signal.is_ok(), "unexpected error: {:?}", signal.error);
    assert_eq!(signal.handle, "@asha.cooks");
    assert_eq!(signal.name.as_deref(), Some("asha.cooks name"));
    assert_eq!(signal.follower_count, Some(48_200));
    assert_eq!(signal.media_count, Some(321));
    assert_eq!(signal.recent_captions, ["Street food in Pune", "Goa diaries"]);
}

#[tokio::test]
async fn auth_error_is_reported_with_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v21.0/me/accounts"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": { "message": "Invalid OAuth access token.", "type": "OAuthException", "code": 190 }
        })))
        .mount(&server)
        .await;

    let signal = test_client(&server.uri())
        .fetch_creator_signals("@asha", "expired")
        .await;

    assert_eq!(
        signal.error.as_deref(),
        Some("Auth Error: Invalid OAuth access token.")
    );
    assert!(signal.name.is_none());
}

#[tokio::test]
async fn token_without_pages_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v21.0/me/accounts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "data": [] })))
        .mount(&server)
        .await;

    let signal = test_client(&server.uri())
        .fetch_creator_signals("@asha", TOKEN)
        .await;

    assert_eq!(
        signal.error.as_deref(),
        Some("Access token is valid but no FB Page with IG permissions was found.")
    );
}

#[tokio::test]
async fn page_without_business_account_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v21.0/me/accounts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [{ "id": "page-1" }]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v21.0/page-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "id": "page-1" })))
        .mount(&server)
        .await;

    let signal = test_client(&server.uri())
        .fetch_creator_signals("@asha", TOKEN)
        .await;

    assert_eq!(
        signal.error.as_deref(),
        Some("The linked FB Page does not have an Instagram Business account associated.")
    );
}

#[tokio::test]
async fn discovery_error_is_reported_with_message() {
    let server = MockServer::start().await;
    mount_account_chain(&server, TOKEN).await;
    Mock::given(method("GET"))
        .and(path("/v21.0/ig-1"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": { "message": "Invalid user id", "code": 110 }
        })))
        .mount(&server)
        .await;

    let signal = test_client(&server.uri())
        .fetch_creator_signals("@private_person", TOKEN)
        .await;

    assert_eq!(signal.error.as_deref(), Some("Discovery Error: Invalid user id"));
}

#[tokio::test]
async fn non_json_body_is_a_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v21.0/me/accounts"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let signal = test_client(&server.uri())
        .fetch_creator_signals("@asha", TOKEN)
        .await;

    assert_eq!(
        signal.error.as_deref(),
        Some("Network connection error to Meta Graph API.")
    );
}

#[tokio::test]
async fn one_failed_handle_does_not_affect_the_others() {
    let server = MockServer::start().await;
    mount_account_chain(&server, TOKEN).await;
    mount_profile(&server, "asha.cooks", 1_000).await;
    mount_profile(&server, "ravi_fit", 2_000).await;
    Mock::given(method("GET"))
        .and(path("/v21.0/ig-1"))
        .and(query_param("fields", discovery_fields("ghost").as_str()))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": { "message": "Cannot find user" }
        })))
        .mount(&server)
        .await;

    let handles = vec![
        "@asha.cooks".to_string(),
        "@ghost".to_string(),
        "@ravi_fit".to_string(),
    ];
    let creds = StaticCredential(Some(TOKEN.to_string()));
    let signals = enrich_handles(&test_client(&server.uri()), &creds, &handles, 15).await;

    assert_eq!(signals.len(), 3);
    let order: Vec<&str> = signals.iter().map(|s| s.handle.as_str()).collect();
    assert_eq!(order, ["@asha.cooks", "@ghost", "@ravi_fit"]);
    assert_eq!(signals[0].follower_count, Some(1_000));
    assert_eq!(signals[1].error.as_deref(), Some("Discovery Error: Cannot find user"));
    assert_eq!(signals[2].follower_count, Some(2_000));
}

#[tokio::test]
async fn enrichment_is_capped() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v21.0/me/accounts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "data": [] })))
        .expect(15)
        .mount(&server)
        .await;

    let handles: Vec<String> = (0..20).map(|i| format!("@creator_{i}")).collect();
    let creds = StaticCredential(Some(TOKEN.to_string()));
    let signals =
        enrich_handles(&test_client(&server.uri()), &creds, &handles, DEFAULT_MAX_ENRICH).await;

    assert_eq!(signals.len(), DEFAULT_MAX_ENRICH);
    assert_eq!(signals[14].handle, "@creator_14");
    assert!(signals.iter().all(|s| !s.is_ok()));
}

#[tokio::test]
async fn missing_token_makes_no_requests() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let handles = vec!["@asha".to_string(), "@ravi".to_string()];
    let signals = enrich_handles(
        &test_client(&server.uri()),
        &StaticCredential(None),
        &handles,
        15,
    )
    .await;

    assert_eq!(signals.len(), 2);
    for signal in &signals {
        assert!(signal
            .error
            .as_deref()
            .is_some_and(|e| e.starts_with("Meta Access Token is missing.")));
    }
}

#[tokio::test]
async fn empty_handle_list_makes_no_requests() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let creds = StaticCredential(Some(TOKEN.to_string()));
    let signals = enrich_handles(&test_client(&server.uri()), &creds, &[], 15).await;
    assert!(signals.is_empty());
}

#[tokio::test]
async fn cleared_override_uses_environment_token() {
    let server = MockServer::start().await;
    mount_account_chain(&server, "env-token").await;
    mount_profile(&server, "asha.cooks", 10).await;

    let dir = tempfile::tempdir().expect("tempdir");
    let store = SettingsStore::new(dir.path().join("settings.json"));
    store.set_graph_token("user-token").expect("store override");
    let creds = LayeredCredentials::new(store, Some("env-token".to_string()));
    creds.store().clear_graph_token().expect("clear override");

    let handles = vec!["@asha.cooks".to_string()];
    let signals = enrich_handles(&test_client(&server.uri()), &creds, &handles, 15).await;

    assert!(signals[0].is_ok(), "unexpected error: {:?}", signals[0].error);
    assert_eq!(signals[0].follower_count, Some(10));
}
