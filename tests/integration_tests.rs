//! Integration tests for the translation gateway
//!
//! These tests run the real axum server on a local port and point the
//! Google Translate provider at a wiremock server, so every request goes
//! through HTTP on both sides.

use std::sync::Arc;
use std::time::Duration;
use translation_gateway::{
    config::{Config, DEFAULT_TIMEOUT_SECS},
    gateway::TranslationGateway,
    languages::LanguageRegistry,
    provider::GoogleTranslateProvider,
    server::{self, AppState},
};
use wiremock::{
    matchers::{body_partial_json, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

// ==================== Test Helpers ====================

const TRANSLATE_PATH: &str = "/v3/projects/test-project/locations/global:translateText";

/// Create a test config pointing the provider at a mock server
fn create_test_config(api_url: &str) -> Config {
    Config {
        project_id: "test-project".to_string(),
        translate_api_url: api_url.to_string(),
        access_token: Some("test-access-token".to_string()),
        request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        port: 0,
    }
}

/// Start the gateway on an ephemeral port and return its base URL
async fn spawn_gateway(config: &Config) -> String {
    let provider = GoogleTranslateProvider::from_config(config).expect("provider");
    let gateway = TranslationGateway::new(
        LanguageRegistry::builtin(),
        Arc::new(provider),
        config.parent(),
    );
    let app = server::router(AppState::new(gateway));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server");
    });

    format!("http://{}", addr)
}

fn translations_body(text: &str) -> serde_json::Value {
    serde_json::json!({
        "translations": [{"translatedText": text}]
    })
}

// ==================== End-to-End Translation Tests ====================

#[tokio::test]
async fn test_translate_end_to_end() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(TRANSLATE_PATH))
        .and(header("Authorization", "Bearer test-access-token"))
        .and(body_partial_json(serde_json::json!({
            "contents": ["Good morning"],
            "sourceLanguageCode": "en-GB",
            "targetLanguageCode": "ak",
            "mimeType": "text/plain"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(translations_body("Maakye")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let base = spawn_gateway(&create_test_config(&mock_server.uri())).await;

    let response = reqwest::Client::new()
        .post(format!("{}/translate", base))
        .json(&serde_json::json!({
            "text": "Good morning",
            "source_lang": "English",
            "target_lang": "twi"
        }))
        .send()
        .await
        .expect("request");

    assert_eq!(response.status().as_u16(), 200);
    let json: serde_json::Value = response.json().await.expect("json");
    assert_eq!(
        json,
        serde_json::json!({
            "original_text": "Good morning",
            "translated_text": "Maakye",
            "source_language": "English",
            "target_language": "Twi (Akan)"
        })
    );
}

#[tokio::test]
async fn test_provider_error_surfaces_as_500() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(TRANSLATE_PATH))
        .respond_with(ResponseTemplate::new(429).set_body_string("Quota exceeded"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let base = spawn_gateway(&create_test_config(&mock_server.uri())).await;

    let response = reqwest::Client::new()
        .post(format!("{}/translate", base))
        .json(&serde_json::json!({
            "text": "Hello",
            "source_lang": "english",
            "target_lang": "ewe"
        }))
        .send()
        .await
        .expect("request");

    assert_eq!(response.status().as_u16(), 500);
    let json: serde_json::Value = response.json().await.expect("json");
    let error = json["error"].as_str().expect("error field");
    assert!(error.starts_with("Translation error: "));
    assert!(error.contains("Quota exceeded"));
}

#[tokio::test]
async fn test_provider_timeout_surfaces_as_500() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(TRANSLATE_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_secs(3))
                .set_body_json(translations_body("late")),
        )
        .mount(&mock_server)
        .await;

    let mut config = create_test_config(&mock_server.uri());
    config.request_timeout_secs = 1;
    let base = spawn_gateway(&config).await;

    let response = reqwest::Client::new()
        .post(format!("{}/translate", base))
        .json(&serde_json::json!({
            "text": "Hello",
            "source_lang": "english",
            "target_lang": "ga"
        }))
        .send()
        .await
        .expect("request");

    assert_eq!(response.status().as_u16(), 500);
}

#[tokio::test]
async fn test_invalid_language_never_reaches_provider() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(translations_body("x")))
        .expect(0)
        .mount(&mock_server)
        .await;

    let base = spawn_gateway(&create_test_config(&mock_server.uri())).await;

    let response = reqwest::Client::new()
        .post(format!("{}/translate", base))
        .json(&serde_json::json!({
            "text": "Hello",
            "source_lang": "klingon",
            "target_lang": "twi"
        }))
        .send()
        .await
        .expect("request");

    assert_eq!(response.status().as_u16(), 400);
    let json: serde_json::Value = response.json().await.expect("json");
    assert_eq!(json, serde_json::json!({"error": "Invalid language names"}));
}

#[tokio::test]
async fn test_missing_parameters() {
    let mock_server = MockServer::start().await;
    let base = spawn_gateway(&create_test_config(&mock_server.uri())).await;

    let response = reqwest::Client::new()
        .post(format!("{}/translate", base))
        .json(&serde_json::json!({"text": "Hello"}))
        .send()
        .await
        .expect("request");

    assert_eq!(response.status().as_u16(), 400);
    let json: serde_json::Value = response.json().await.expect("json");
    assert_eq!(
        json["error"],
        "Missing required parameters: text, source_lang, target_lang"
    );
}

// ==================== Languages Endpoint Tests ====================

#[tokio::test]
async fn test_languages_endpoint() {
    let mock_server = MockServer::start().await;
    let base = spawn_gateway(&create_test_config(&mock_server.uri())).await;

    let response = reqwest::Client::new()
        .get(format!("{}/languages", base))
        .send()
        .await
        .expect("request");

    assert!(response.status().is_success());
    let json: serde_json::Value = response.json().await.expect("json");
    assert_eq!(
        json,
        serde_json::json!({
            "english": "English",
            "twi": "Twi (Akan)",
            "ga": "Ga",
            "ewe": "Ewe"
        })
    );
}

// ==================== Concurrency Tests ====================

#[tokio::test]
async fn test_concurrent_requests_are_independent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(TRANSLATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(translations_body("Ndi")))
        .expect(8)
        .mount(&mock_server)
        .await;

    let base = spawn_gateway(&create_test_config(&mock_server.uri())).await;
    let client = reqwest::Client::new();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let client = client.clone();
            let url = format!("{}/translate", base);
            tokio::spawn(async move {
                client
                    .post(url)
                    .json(&serde_json::json!({
                        "text": "Hello",
                        "source_lang": "english",
                        "target_lang": "ga"
                    }))
                    .send()
                    .await
                    .expect("request")
                    .json::<serde_json::Value>()
                    .await
                    .expect("json")
            })
        })
        .collect();

    let mut bodies = Vec::new();
    for handle in handles {
        bodies.push(handle.await.expect("task"));
    }

    assert!(bodies.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(bodies[0]["translated_text"], "Ndi");
    assert_eq!(bodies[0]["target_language"], "Ga");
}
