//! Integration tests for the DeepL client and translate action.
//!
//! All remote behavior is mocked with wiremock; no real API is hit.

use deepl_plugin::{
    DeeplClient, DeeplConfig, HandlerPayload, Message, TranslateAction, TranslationError,
    TranslationRequest, DEEPL_AUTH_KEY,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings(key: &str) -> Option<String> {
    (key == DEEPL_AUTH_KEY).then(|| "test_key".to_string())
}

fn client_for(server: &MockServer) -> DeeplClient {
    let config = DeeplConfig::resolve(&settings)
        .unwrap()
        .with_endpoint(format!("{}/v2/translate", server.uri()));
    DeeplClient::new(config).unwrap()
}

#[tokio::test]
async fn translate_returns_first_entry_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/translate"))
        .and(header("Authorization", "DeepL-Auth-Key test_key"))
        .and(body_json(json!({
            "text": ["Hello, how are you?"],
            "source_lang": "EN",
            "target_lang": "DE"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "translations": [
                { "text": "Hallo, wie geht es dir?", "detected_source_language": "EN" }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = TranslationRequest::new("Hello, how are you?", "DE").with_source_lang("EN");

    let translation = client.translate(&request).await.unwrap();
    assert_eq!(translation.text, "Hallo, wie geht es dir?");
    assert_eq!(translation.detected_source_language.as_deref(), Some("EN"));
}

#[tokio::test]
async fn translate_ignores_entries_past_the_first() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/translate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "translations": [
                { "text": "Hallo" },
                { "text": "Welt" }
            ]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = TranslationRequest::new("Hello", "DE");

    let translation = client.translate(&request).await.unwrap();
    assert_eq!(translation.text, "Hallo");
    assert!(translation.detected_source_language.is_none());
}

#[tokio::test]
async fn translate_reports_empty_translations() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/translate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "translations": [] })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .translate(&TranslationRequest::new("Hello", "DE"))
        .await
        .unwrap_err();

    assert!(matches!(err, TranslationError::EmptyResultError));
    assert_eq!(err.to_string(), "No translations returned from DeepL.");
}

#[tokio::test]
async fn translate_surfaces_http_errors() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/translate"))
        .respond_with(ResponseTemplate::new(403).set_body_string("invalid auth key"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .translate(&TranslationRequest::new("Hello", "DE"))
        .await
        .unwrap_err();

    match err {
        TranslationError::ApiError { status, message } => {
            assert_eq!(status, 403);
            assert!(message.contains("invalid auth key"));
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn translate_surfaces_malformed_bodies() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/translate"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not valid json"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .translate(&TranslationRequest::new("Hello", "DE"))
        .await
        .unwrap_err();

    assert!(matches!(err, TranslationError::InvalidResponseError { .. }));
    assert!(!err.to_string().is_empty());
}

#[tokio::test]
async fn translate_surfaces_connection_failures() {
    // Take an address, then shut the server down before translating.
    // A bespoke (non-pooled) server is required: pooled servers from
    // `MockServer::start()` keep their listener alive after drop.
    let server = MockServer::builder().start().await;
    let uri = server.uri();
    drop(server);

    let config = DeeplConfig::resolve(&settings)
        .unwrap()
        .with_endpoint(format!("{uri}/v2/translate"));
    let client = DeeplClient::new(config).unwrap();

    let err = client
        .translate(&TranslationRequest::new("Hello", "DE"))
        .await
        .unwrap_err();

    assert!(matches!(err, TranslationError::NetworkError { .. }));
    assert!(!err.to_string().is_empty());
}

#[tokio::test]
async fn handler_reports_translated_text() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/translate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "translations": [
                { "text": "Hallo, wie geht es dir?", "detected_source_language": "EN" }
            ]
        })))
        .mount(&server)
        .await;

    let action = TranslateAction::new(client_for(&server));
    let message = Message::new(json!({
        "text": "Hello, how are you?",
        "sourceLang": "EN",
        "targetLang": "DE"
    }));

    let mut payloads: Vec<HandlerPayload> = Vec::new();
    let outcome = action
        .handle(&message, Some(|p: HandlerPayload| payloads.push(p)))
        .await;

    assert!(outcome);
    assert_eq!(payloads.len(), 1);
    assert_eq!(payloads[0].text, "Translated: Hallo, wie geht es dir?");
    assert_eq!(
        payloads[0].content["translatedText"],
        json!("Hallo, wie geht es dir?")
    );
    assert_eq!(payloads[0].content["detectedSourceLanguage"], json!("EN"));
}

#[tokio::test]
async fn handler_rejects_invalid_content_without_network_call() {
    let server = MockServer::start().await;

    // Any request reaching the server fails the test on drop
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let action = TranslateAction::new(client_for(&server));
    let message = Message::new(json!({ "text": 42 }));

    let mut payloads: Vec<HandlerPayload> = Vec::new();
    let outcome = action
        .handle(&message, Some(|p: HandlerPayload| payloads.push(p)))
        .await;

    assert!(!outcome);
    assert_eq!(payloads.len(), 1);
    assert_eq!(
        payloads[0].text,
        "Unable to process request. Invalid translation parameters."
    );
    assert_eq!(
        payloads[0].content,
        json!({ "error": "Invalid translation parameters." })
    );
}

#[tokio::test]
async fn handler_reports_translation_errors() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/translate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "translations": [] })))
        .mount(&server)
        .await;

    let action = TranslateAction::new(client_for(&server));
    let message = Message::new(json!({ "text": "Hello", "targetLang": "DE" }));

    let mut payloads: Vec<HandlerPayload> = Vec::new();
    let outcome = action
        .handle(&message, Some(|p: HandlerPayload| payloads.push(p)))
        .await;

    assert!(!outcome);
    assert_eq!(payloads.len(), 1);
    assert_eq!(
        payloads[0].text,
        "Translation error: No translations returned from DeepL."
    );
    assert_eq!(
        payloads[0].content,
        json!({ "error": "No translations returned from DeepL." })
    );
}

#[tokio::test]
async fn handler_works_without_a_callback() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/translate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "translations": [{ "text": "Bonjour" }]
        })))
        .mount(&server)
        .await;

    let action = TranslateAction::new(client_for(&server));
    let message = Message::new(json!({ "text": "Hello", "targetLang": "FR" }));

    let outcome = action.handle(&message, None::<fn(HandlerPayload)>).await;
    assert!(outcome);
}
