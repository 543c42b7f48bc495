//! Async DeepL client: one authenticated POST per translation

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::config::{DeeplConfig, SettingsSource};
use crate::core::errors::{Result, TranslationError};
use crate::core::models::{Translation, TranslationRequest};

/// Request body for the DeepL translate endpoint
///
/// The remote API takes a batch of texts; this client only ever sends a
/// batch of one.
#[derive(Debug, Serialize)]
struct TranslateBody<'a> {
    text: [&'a str; 1],
    #[serde(skip_serializing_if = "Option::is_none")]
    source_lang: Option<&'a str>,
    target_lang: &'a str,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    #[serde(default)]
    translations: Vec<TranslationEntry>,
}

#[derive(Debug, Deserialize)]
struct TranslationEntry {
    text: String,
    detected_source_language: Option<String>,
}

/// Async DeepL translation client
///
/// Holds the credential read-only after construction, so a single client
/// may serve concurrent invocations without coordination.
#[derive(Debug, Clone)]
pub struct DeeplClient {
    client: reqwest::Client,
    config: Arc<DeeplConfig>,
}

impl DeeplClient {
    /// Create a new client from a validated configuration
    pub fn new(config: DeeplConfig) -> Result<Self> {
        config.validate()?;

        // No request timeout: a single attempt that waits on whatever the
        // transport defaults to.
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| TranslationError::NetworkError {
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    /// Resolve the credential and create a client in one step
    pub fn from_settings(settings: &dyn SettingsSource) -> Result<Self> {
        let config = DeeplConfig::resolve(settings)?;
        Self::new(config)
    }

    /// Translate a single request
    ///
    /// One outbound POST, no retry. Takes the first entry of the returned
    /// translations; only one text is ever sent, so only index 0 is ever
    /// populated.
    pub async fn translate(&self, request: &TranslationRequest) -> Result<Translation> {
        if request.text.is_empty() {
            return Err(TranslationError::ValidationError {
                message: "text must not be empty".to_string(),
            });
        }

        let body = TranslateBody {
            text: [request.text.as_str()],
            source_lang: request.source_lang.as_deref(),
            target_lang: &request.target_lang,
        };

        if request.debug {
            debug!(
                endpoint = %self.config.api_endpoint,
                target_lang = %request.target_lang,
                "Sending DeepL translate request"
            );
        }

        let response = self
            .client
            .post(&self.config.api_endpoint)
            .header(
                "Authorization",
                format!("DeepL-Auth-Key {}", self.config.api_key),
            )
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| TranslationError::NetworkError {
                message: e.to_string(),
            })?;

        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(TranslationError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: TranslateResponse =
            response
                .json()
                .await
                .map_err(|e| TranslationError::InvalidResponseError {
                    message: e.to_string(),
                })?;

        let entry = parsed
            .translations
            .into_iter()
            .next()
            .ok_or(TranslationError::EmptyResultError)?;

        Ok(Translation {
            text: entry.text,
            detected_source_language: entry.detected_source_language,
        })
    }
}
