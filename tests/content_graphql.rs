//! Content client integration tests
//!
//! Runs the GraphQL client and the content cache against a mock backend over
//! real HTTP. These tests verify:
//! - Decoding of theme and home payloads
//! - Mapping of transport, status and GraphQL errors
//! - Cache-first behavior and invalidation

mod mock_servers;

use std::time::Duration;

use mock_servers::graphql::MockReply;
use mock_servers::MockGraphQlServer;
use serde_json::json;

use spsa_site::content::{
    CachedContent, ContentError, ContentSource, GraphQlClient, GraphQlContent,
};
use spsa_site::menu::{active_root_url, get_menu_url};

fn content_for(server: &MockGraphQlServer) -> GraphQlContent {
    GraphQlContent::new(GraphQlClient::new(server.endpoint()).expect("client should build"))
}

// =============================================================================
// Decoding
// =============================================================================

#[tokio::test]
async fn theme_decodes_header_menu_in_backend_order() {
    let server = MockGraphQlServer::start().await;
    let content = content_for(&server);

    let menu = content
        .theme()
        .await
        .expect("theme should load")
        .into_header_menu()
        .expect("theme has a header menu");

    assert_eq!(menu.label, "Main menu");
    let labels: Vec<_> = menu.menu_entries.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, ["Home", "Events", "About"]);
    assert_eq!(get_menu_url(&menu.menu_entries[0]), "/");
    assert_eq!(
        active_root_url("/events/123", &menu.menu_entries).as_deref(),
        Some("/events")
    );

    server.stop();
}

#[tokio::test]
async fn home_decodes_overlay_and_photos() {
    let server = MockGraphQlServer::start().await;
    let content = content_for(&server);

    let home = content
        .home()
        .await
        .expect("home should load")
        .into_home()
        .expect("home content present");

    assert_eq!(home.overlay, "Welcome to St. Peter & St. Andrew");
    assert_eq!(
        home.photo_landscape.map(|a| a.url).as_deref(),
        Some("https://cdn.example/landscape.jpg")
    );

    server.stop();
}

#[tokio::test]
async fn client_posts_query_document_with_empty_variables() {
    let server = MockGraphQlServer::start().await;
    let content = content_for(&server);

    content.theme().await.expect("theme should load");

    let requests = server.requests().await;
    assert_eq!(requests.len(), 1);
    assert!(requests[0]["query"]
        .as_str()
        .is_some_and(|q| q.contains("getTheme")));
    assert_eq!(requests[0]["variables"], json!({}));

    server.stop();
}

#[tokio::test]
async fn null_theme_is_empty_not_an_error() {
    let server = MockGraphQlServer::start().await;
    server
        .set_theme(MockReply::Data(json!({ "getTheme": null })))
        .await;
    let content = content_for(&server);

    let theme = content.theme().await.expect("null theme still decodes");
    assert!(theme.into_header_menu().is_none());

    server.stop();
}

// =============================================================================
// Error mapping
// =============================================================================

#[tokio::test]
async fn graphql_errors_are_reported() {
    let server = MockGraphQlServer::start().await;
    server
        .set_theme(MockReply::Errors(vec!["theme not published".into()]))
        .await;
    let content = content_for(&server);

    match content.theme().await {
        Err(ContentError::GraphQl(messages)) => {
            assert_eq!(messages, vec!["theme not published".to_string()])
        }
        other => panic!("expected GraphQl error, got {:?}", other.map(|_| ())),
    }

    server.stop();
}

#[tokio::test]
async fn http_status_is_reported() {
    let server = MockGraphQlServer::start().await;
    server.set_home(MockReply::Status(503)).await;
    let content = content_for(&server);

    assert!(matches!(
        content.home().await,
        Err(ContentError::Status(503))
    ));

    server.stop();
}

#[tokio::test]
async fn response_without_data_is_reported() {
    let server = MockGraphQlServer::start().await;
    server.set_home(MockReply::Raw(json!({}))).await;
    let content = content_for(&server);

    assert!(matches!(content.home().await, Err(ContentError::MissingData)));

    server.stop();
}

#[tokio::test]
async fn malformed_data_is_a_decode_error() {
    let server = MockGraphQlServer::start().await;
    server
        .set_theme(MockReply::Data(json!({ "getTheme": { "headerMenu": { "label": 7 } } })))
        .await;
    let content = content_for(&server);

    assert!(matches!(content.theme().await, Err(ContentError::Decode(_))));

    server.stop();
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    let server = MockGraphQlServer::start().await;
    let endpoint = server.endpoint();
    server.stop();
    tokio::time::sleep(Duration::from_millis(50)).await;

    let content = GraphQlContent::new(GraphQlClient::new(endpoint).expect("client should build"));

    assert!(matches!(content.theme().await, Err(ContentError::Http(_))));
}

#[tokio::test]
async fn slow_backend_times_out() {
    let server = MockGraphQlServer::start().await;
    server.set_theme(MockReply::Stall(Duration::from_secs(5))).await;
    let client = GraphQlClient::with_timeout(server.endpoint(), Duration::from_millis(100))
        .expect("client should build");

    let result = GraphQlContent::new(client).theme().await;

    assert!(
        matches!(&result, Err(ContentError::Http(e)) if e.is_timeout()),
        "{result:?}"
    );

    server.stop();
}

// =============================================================================
// Cache
// =============================================================================

#[tokio::test]
async fn cache_serves_repeat_requests_from_memory() {
    let server = MockGraphQlServer::start().await;
    let cached = CachedContent::new(content_for(&server), Duration::from_secs(60));

    cached.theme().await.expect("first fetch");
    cached.theme().await.expect("cached fetch");
    cached.home().await.expect("home fetch");

    assert_eq!(server.requests().await.len(), 2);

    server.stop();
}

#[tokio::test]
async fn cache_invalidation_refetches_new_content() {
    let server = MockGraphQlServer::start().await;
    let cached = CachedContent::new(content_for(&server), Duration::from_secs(60));

    cached.home().await.expect("first fetch");
    server
        .set_home(MockReply::Data(json!({
            "getHome": { "overlay": "Christ is risen", "photoPortrait": null, "photoLandscape": null }
        })))
        .await;

    let stale = cached.home().await.expect("cached").into_home().expect("home");
    assert_eq!(stale.overlay, "Welcome to St. Peter & St. Andrew");

    cached.invalidate().await;

    let fresh = cached.home().await.expect("refetched").into_home().expect("home");
    assert_eq!(fresh.overlay, "Christ is risen");
    assert_eq!(server.requests().await.len(), 2);

    server.stop();
}

#[tokio::test]
async fn cache_does_not_keep_failures() {
    let server = MockGraphQlServer::start().await;
    server.set_theme(MockReply::Status(500)).await;
    let cached = CachedContent::new(content_for(&server), Duration::from_secs(60));

    assert!(cached.theme().await.is_err());

    server
        .set_theme(MockReply::Data(mock_servers::graphql::sample_theme()))
        .await;
    assert!(cached.theme().await.is_ok());

    server.stop();
}
