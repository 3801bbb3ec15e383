//! Backend client tests using wiremock.
//!
//! These tests verify that ApiClient calls the right endpoints with the right
//! query parameters and unwraps the backend's response envelopes.

use std::collections::HashMap;

use picto_lingua::config::Config;
use picto_lingua::model::{
    ApiClient, ApiError, ProgressItem, SaveSessionRequest, VocabularyApi, WordStatus,
};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer, language: &str) -> ApiClient {
    let config = Config {
        api_url: server.uri(),
        language: language.to_string(),
        ..Config::default()
    };
    ApiClient::new(&config).unwrap()
}

#[tokio::test]
async fn test_fetch_themes_unwraps_envelope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/themes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "themes": [
                {"id": "animals", "name": "Animals", "description": "Creatures great and small"},
                {"id": "food", "name": "Food"}
            ]
        })))
        .mount(&mock_server)
        .await;

    let client = ApiClient::with_base_url(&mock_server.uri());
    let themes = client.fetch_themes().await.unwrap();

    assert_eq!(themes.len(), 2);
    assert_eq!(themes[0].id, "animals");
    assert_eq!(themes[1].description, None);
}

#[tokio::test]
async fn test_fetch_images_sends_theme_and_reads_attribution() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/images"))
        .and(query_param("theme", "animals"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "theme": "animals",
            "images": [{
                "id": "img-1",
                "url": "https://images.example/img-1.jpg",
                "download_url": "https://images.example/img-1/download",
                "description": "A dog in the park",
                "width": 4000,
                "height": 3000,
                "created_at": "2024-03-01T09:00:00Z",
                "photographer": "Ada",
                "photographer_url": "https://unsplash.com/@ada",
                "unsplash_url": "https://unsplash.com/photos/img-1",
                "attribution_string": "Photo by Ada on Unsplash"
            }]
        })))
        .mount(&mock_server)
        .await;

    let client = ApiClient::with_base_url(&mock_server.uri());
    let images = client.fetch_images("animals").await.unwrap();

    assert_eq!(images.len(), 1);
    assert_eq!(images[0].source_url, "https://unsplash.com/photos/img-1");
    assert_eq!(images[0].credit(), "Photo by Ada on Unsplash");
    assert_eq!(images[0].caption("fallback"), "A dog in the park");
}

#[tokio::test]
async fn test_fetch_vocabulary_sends_count_and_language() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/vocabulary"))
        .and(query_param("theme", "animals"))
        .and(query_param("count", "10"))
        .and(query_param("language", "dutch"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "theme": "animals",
            "count": 1,
            "language": "dutch",
            "vocabulary": [{
                "word": "dog",
                "definition": "a domesticated canine",
                "example": "The dog barked.",
                "dutch_word": "hond",
                "dutch_definition": "een gedomesticeerd dier",
                "dutch_example": "De hond blafte."
            }]
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, "dutch");
    let items = client.fetch_vocabulary("animals", 10).await.unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].translated_word.as_deref(), Some("hond"));
    assert_eq!(items[0].translated_example.as_deref(), Some("De hond blafte."));
}

#[tokio::test]
async fn test_error_status_carries_backend_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/images"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(serde_json::json!({"error": "Invalid theme"})),
        )
        .mount(&mock_server)
        .await;

    let client = ApiClient::with_base_url(&mock_server.uri());
    let result = client.fetch_images("unknown").await;

    match result {
        Err(ApiError::Status { status, message }) => {
            assert_eq!(status, 400);
            assert_eq!(message, "Invalid theme");
        }
        other => panic!("Expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/themes"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = ApiClient::with_base_url(&mock_server.uri());
    let result = client.fetch_themes().await;

    assert!(matches!(result, Err(ApiError::Decode(_))));
}

#[tokio::test]
async fn test_save_session_posts_progress() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/session"))
        .and(body_json(serde_json::json!({
            "theme_id": "animals",
            "image_id": "img-1",
            "progress": {
                "dog": {"word": "dog", "status": "known", "seen_count": 1, "known_count": 1}
            },
            "session_id": "session_1"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "session_id": "session_1",
            "status": "success"
        })))
        .mount(&mock_server)
        .await;

    let request = SaveSessionRequest {
        theme_id: "animals".to_string(),
        image_id: "img-1".to_string(),
        progress: HashMap::from([(
            "dog".to_string(),
            ProgressItem {
                word: "dog".to_string(),
                status: WordStatus::Known,
                time_taken_ms: None,
                seen_count: 1,
                known_count: 1,
            },
        )]),
        session_id: Some("session_1".to_string()),
    };

    let client = ApiClient::with_base_url(&mock_server.uri());
    let response = client.save_session(&request).await.unwrap();

    assert_eq!(response.session_id, "session_1");
    assert_eq!(response.status, "success");
}

#[tokio::test]
async fn test_load_session_found_and_missing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/session"))
        .and(query_param("session_id", "session_9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "theme_id": "animals",
            "image_id": "img-1",
            "progress": {
                "cat": {"word": "cat", "status": "learning", "seen_count": 2, "known_count": 0}
            },
            "session_id": "session_9",
            "started_at": "2024-03-01T09:00:00Z",
            "last_updated": "2024-03-01T09:30:00Z"
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/session"))
        .and(query_param("session_id", "missing"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(serde_json::json!({"error": "Session not found"})),
        )
        .mount(&mock_server)
        .await;

    let client = ApiClient::with_base_url(&mock_server.uri());

    let session = client.load_session("session_9").await.unwrap().unwrap();
    assert_eq!(session.progress["cat"].status, WordStatus::Learning);
    assert_eq!(session.progress["cat"].seen_count, 2);

    assert!(client.load_session("missing").await.unwrap().is_none());
}
