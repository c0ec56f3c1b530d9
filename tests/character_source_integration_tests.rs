use std::sync::Arc;
use std::time::Duration;

use roster::api::{
    CharacterQuery, CharacterSource, FetchError, HttpCharacterSource, ImageLoadError,
};
use roster::core::action::{Action, Effect, update};
use roster::core::state::{App, DisplayMode, FETCH_ERROR_MESSAGE};
use tokio_test::{assert_err, assert_ok};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

// ============================================================================
// Helper Functions
// ============================================================================

fn source_for(server: &MockServer) -> HttpCharacterSource {
    HttpCharacterSource::new(format!("{}/api", server.uri()), Duration::from_secs(5))
}

/// Mounts the characters endpoint, matching the fixed first-page query.
async fn mount_characters(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/api/characters"))
        .and(query_param("orderBy", "id"))
        .and(query_param("orderByDirection", "asc"))
        .and(query_param("page", "1"))
        .and(query_param("size", "50"))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

fn envelope(items: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "items": items,
        "total": 3,
        "page": 1,
        "size": 50,
        "pages": 1
    })
}

// ============================================================================
// Characters Endpoint
// ============================================================================

#[tokio::test]
async fn test_fetch_returns_items_in_server_order() {
    let server = MockServer::start().await;
    mount_characters(
        &server,
        ResponseTemplate::new(200).set_body_json(envelope(serde_json::json!([
            {"id": 3, "name": "Bender", "gender": "MALE", "status": "ALIVE", "species": "ROBOT", "image": null},
            {"id": 1, "name": "Philip J. Fry", "gender": "MALE", "status": "ALIVE", "species": "HUMAN",
             "image": "https://futuramaapi.com/static/img/human/philip-j_-fry.webp"},
            {"id": 2, "name": "Turanga Leela", "gender": "FEMALE", "status": "DEAD", "species": "MUTANT"}
        ]))),
    )
    .await;

    let source = source_for(&server);
    let items = assert_ok!(source.fetch_characters(&CharacterQuery::first_page()).await);

    let ids: Vec<i64> = items.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![3, 1, 2]);
    assert_eq!(items[0].image, None);
    assert_eq!(items[2].image, None);
    assert!(items[1].image.is_some());
}

#[tokio::test]
async fn test_fetch_empty_items() {
    let server = MockServer::start().await;
    mount_characters(
        &server,
        ResponseTemplate::new(200).set_body_json(envelope(serde_json::json!([]))),
    )
    .await;

    let items = assert_ok!(
        source_for(&server)
            .fetch_characters(&CharacterQuery::first_page())
            .await
    );
    assert!(items.is_empty());
}

#[tokio::test]
async fn test_fetch_server_error() {
    let server = MockServer::start().await;
    mount_characters(
        &server,
        ResponseTemplate::new(500).set_body_string("Internal Server Error"),
    )
    .await;

    let err = assert_err!(
        source_for(&server)
            .fetch_characters(&CharacterQuery::first_page())
            .await
    );
    match err {
        FetchError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "Internal Server Error");
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_fetch_malformed_json() {
    let server = MockServer::start().await;
    mount_characters(&server, ResponseTemplate::new(200).set_body_string("{not json")).await;

    let err = assert_err!(
        source_for(&server)
            .fetch_characters(&CharacterQuery::first_page())
            .await
    );
    assert!(matches!(err, FetchError::Parse(_)));
}

#[tokio::test]
async fn test_fetch_envelope_without_items_is_failure() {
    let server = MockServer::start().await;
    mount_characters(
        &server,
        ResponseTemplate::new(200).set_body_json(serde_json::json!({"detail": "nope"})),
    )
    .await;

    let err = assert_err!(
        source_for(&server)
            .fetch_characters(&CharacterQuery::first_page())
            .await
    );
    assert!(matches!(err, FetchError::Parse(msg) if msg.contains("items")));
}

#[tokio::test]
async fn test_fetch_timeout_is_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/characters"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(envelope(serde_json::json!([])))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let source =
        HttpCharacterSource::new(format!("{}/api", server.uri()), Duration::from_millis(200));
    let err = assert_err!(source.fetch_characters(&CharacterQuery::first_page()).await);
    assert!(matches!(err, FetchError::Network(msg) if msg.contains("timed out")));
}

#[tokio::test]
async fn test_fetch_unreachable_host() {
    // Nothing listens on port 9 (discard) on a test machine
    let source = HttpCharacterSource::new("http://127.0.0.1:9/api", Duration::from_secs(2));
    let err = assert_err!(source.fetch_characters(&CharacterQuery::first_page()).await);
    assert!(matches!(err, FetchError::Network(_)));
}

// ============================================================================
// Avatar Loading
// ============================================================================

#[tokio::test]
async fn test_load_image_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/img/fry.png"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(vec![0x89, b'P', b'N', b'G'], "image/png"),
        )
        .mount(&server)
        .await;

    let source = source_for(&server);
    assert_ok!(source.load_image(&format!("{}/img/fry.png", server.uri())).await);
}

#[tokio::test]
async fn test_load_image_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/img/missing.png"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = assert_err!(
        source_for(&server)
            .load_image(&format!("{}/img/missing.png", server.uri()))
            .await
    );
    assert_eq!(err, ImageLoadError::Status(404));
}

#[tokio::test]
async fn test_load_image_rejects_html() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/img/login.png"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(b"<html></html>".to_vec(), "text/html"),
        )
        .mount(&server)
        .await;

    let err = assert_err!(
        source_for(&server)
            .load_image(&format!("{}/img/login.png", server.uri()))
            .await
    );
    assert!(matches!(err, ImageLoadError::NotAnImage(ct) if ct.starts_with("text/html")));
}

#[tokio::test]
async fn test_load_image_bad_uri() {
    let server = MockServer::start().await;
    let err = assert_err!(source_for(&server).load_image("not a uri").await);
    assert!(matches!(err, ImageLoadError::Network(_)));
}

// ============================================================================
// Fetch + Update
// ============================================================================

#[tokio::test]
async fn test_single_character_flow() {
    let server = MockServer::start().await;
    mount_characters(
        &server,
        ResponseTemplate::new(200).set_body_json(envelope(serde_json::json!([
            {"id": 1, "name": "Fry", "gender": "Male", "status": "ALIVE", "species": "Human", "image": null}
        ]))),
    )
    .await;

    let source: Arc<dyn CharacterSource> = Arc::new(source_for(&server));
    let mut app = App::new(source.clone());

    assert_eq!(update(&mut app, Action::Activate), Effect::SpawnFetch);
    assert_eq!(app.display_mode(), DisplayMode::Loading);

    let result = source.fetch_characters(&CharacterQuery::first_page()).await;
    // No image, so nothing to load
    assert_eq!(update(&mut app, Action::FetchSettled(result)), Effect::None);

    assert!(!app.loading);
    assert!(app.error.is_none());
    assert_eq!(app.characters.len(), 1);
    let fry = &app.characters[0];
    assert_eq!(fry.name, "Fry");
    assert!(fry.is_alive());
    assert!(app.avatar_for(fry).is_placeholder());
}

#[tokio::test]
async fn test_failed_fetch_flow() {
    let server = MockServer::start().await;
    mount_characters(&server, ResponseTemplate::new(503)).await;

    let source: Arc<dyn CharacterSource> = Arc::new(source_for(&server));
    let mut app = App::new(source.clone());
    update(&mut app, Action::Activate);

    let result = source.fetch_characters(&CharacterQuery::first_page()).await;
    update(&mut app, Action::FetchSettled(result));

    assert!(!app.loading);
    assert_eq!(app.error.as_deref(), Some(FETCH_ERROR_MESSAGE));
    assert!(app.characters.is_empty());
    assert_eq!(app.display_mode(), DisplayMode::Error);
}
