//! TRANSLATE_WITH_DEEPL action: validation, translation, result reporting

use serde_json::{json, Value};
use tracing::{error, info};

use crate::core::client::DeeplClient;
use crate::core::config::{DeeplConfig, SettingsSource};
use crate::core::errors::Result;
use crate::core::models::TranslationRequest;

/// Action name registered with the host runtime
pub const ACTION_NAME: &str = "TRANSLATE_WITH_DEEPL";

/// Alternative action names the host may route here
pub const SIMILES: &[&str] = &["TRANSLATE_TEXT", "ASK_TRANSLATION"];

/// Action description shown to the host
pub const DESCRIPTION: &str =
    "Send a text-translation request to DeepL API and obtain translation.";

const INVALID_PARAMS_MSG: &str = "Invalid translation parameters.";

/// Incoming message from the host runtime
///
/// `content` is loosely typed on purpose: the host composes it from
/// conversation state and the shape is only checked at this boundary.
#[derive(Debug, Clone)]
pub struct Message {
    pub content: Value,
}

impl Message {
    pub fn new(content: Value) -> Self {
        Self { content }
    }
}

/// Outcome reported back through the handler callback
#[derive(Debug, Clone)]
pub struct HandlerPayload {
    /// User-facing text
    pub text: String,
    /// Structured result or error detail
    pub content: Value,
}

/// Check that content carries the fields a translation needs
///
/// True only when `text` and `targetLang` are strings. `sourceLang` and
/// `debug` stay unchecked; no trimming or case normalization happens here.
pub fn is_valid_content(content: &Value) -> bool {
    parse_content(content).is_some()
}

/// Parse content into a translation request, `None` when malformed
fn parse_content(content: &Value) -> Option<TranslationRequest> {
    let text = content.get("text")?.as_str()?;
    let target_lang = content.get("targetLang")?.as_str()?;

    let mut request = TranslationRequest::new(text, target_lang);
    if let Some(source_lang) = content.get("sourceLang").and_then(Value::as_str) {
        request = request.with_source_lang(source_lang);
    }
    if let Some(debug) = content.get("debug").and_then(Value::as_bool) {
        request = request.with_debug(debug);
    }

    Some(request)
}

/// The translate action with its injected client
#[derive(Debug, Clone)]
pub struct TranslateAction {
    client: DeeplClient,
}

impl TranslateAction {
    pub fn new(client: DeeplClient) -> Self {
        Self { client }
    }

    /// Pre-flight check that the credential is configured
    ///
    /// Errors before any request is attempted when the key is absent.
    pub fn validate(settings: &dyn SettingsSource) -> Result<bool> {
        DeeplConfig::resolve(settings)?;
        Ok(true)
    }

    /// Handle one incoming message
    ///
    /// Reports the outcome through `callback` and returns `true` on
    /// success, `false` on any failure. No error crosses this boundary.
    pub async fn handle<F>(&self, message: &Message, mut callback: Option<F>) -> bool
    where
        F: FnMut(HandlerPayload),
    {
        info!("Executing {}", ACTION_NAME);

        let Some(request) = parse_content(&message.content) else {
            error!("Invalid content for {}", ACTION_NAME);
            if let Some(cb) = callback.as_mut() {
                cb(HandlerPayload {
                    text: format!("Unable to process request. {INVALID_PARAMS_MSG}"),
                    content: json!({ "error": INVALID_PARAMS_MSG }),
                });
            }
            return false;
        };

        match self.client.translate(&request).await {
            Ok(translation) => {
                if let Some(cb) = callback.as_mut() {
                    cb(HandlerPayload {
                        text: format!("Translated: {}", translation.text),
                        content: json!({
                            "translatedText": translation.text,
                            "detectedSourceLanguage": translation.detected_source_language,
                        }),
                    });
                }
                true
            }
            Err(e) => {
                error!("Error during translation: {}", e);
                if let Some(cb) = callback.as_mut() {
                    cb(HandlerPayload {
                        text: format!("Translation error: {}", e),
                        content: json!({ "error": e.to_string() }),
                    });
                }
                false
            }
        }
    }
}
